//! Similarity matrix CSV loading
//!
//! The matrix source has the row label in the first column and one column
//! per beer id after it. Row labels must repeat the header labels in the
//! same order; the set of labels is the set of catalog ids.

use std::path::Path;

use tracing::info;

use brewrec_core::{BeerId, Error, Result, SimilarityMatrix};

/// Read the square similarity-matrix CSV.
///
/// Fails with [`Error::Csv`] on reader failures and
/// [`Error::MalformedMatrix`] on unparseable labels or scores, ragged
/// rows, or row labels out of step with the header.
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<SimilarityMatrix> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| Error::Csv(format!("{}: {e}", path.display())))?;

    let headers = reader
        .headers()
        .map_err(|e| Error::Csv(format!("{}: {e}", path.display())))?
        .clone();
    if headers.len() < 2 {
        return Err(Error::MalformedMatrix(
            "header carries no column labels".to_string(),
        ));
    }

    let ids = headers
        .iter()
        .skip(1)
        .map(|h| {
            h.trim()
                .parse::<BeerId>()
                .map_err(|_| Error::MalformedMatrix(format!("column label '{h}' is not an id")))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut labels = Vec::with_capacity(ids.len());
    let mut rows = Vec::with_capacity(ids.len());
    for result in reader.records() {
        let record = result.map_err(|e| Error::Csv(format!("{}: {e}", path.display())))?;
        let label_field = record.get(0).unwrap_or("");
        let label = label_field
            .trim()
            .parse::<BeerId>()
            .map_err(|_| Error::MalformedMatrix(format!("row label '{label_field}' is not an id")))?;

        let row = record
            .iter()
            .skip(1)
            .map(|v| {
                v.trim().parse::<f32>().map_err(|_| {
                    Error::MalformedMatrix(format!("row {label}: score '{v}' is not a number"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        labels.push(label);
        rows.push(row);
    }

    if labels != ids {
        return Err(Error::MalformedMatrix(
            "row labels do not match column labels".to_string(),
        ));
    }

    let matrix = SimilarityMatrix::new(ids, rows)?;
    info!(
        "Loaded {}x{} similarity matrix from {}",
        matrix.len(),
        matrix.len(),
        path.display()
    );
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_square_matrix() {
        let file = write_csv(
            "num,1,2,3\n\
             1,1.0,0.2,0.9\n\
             2,0.2,1.0,0.4\n\
             3,0.9,0.4,1.0\n",
        );
        let matrix = load_matrix(file.path()).unwrap();
        assert_eq!(matrix.len(), 3);
        assert_eq!(matrix.score(1, 3), Some(0.9));
        assert_eq!(matrix.row(2), Some(&[0.2, 1.0, 0.4][..]));
    }

    #[test]
    fn test_label_order_mismatch_fails() {
        let file = write_csv(
            "num,1,2\n\
             2,0.2,1.0\n\
             1,1.0,0.2\n",
        );
        assert!(matches!(
            load_matrix(file.path()),
            Err(Error::MalformedMatrix(_))
        ));
    }

    #[test]
    fn test_non_numeric_score_fails() {
        let file = write_csv(
            "num,1,2\n\
             1,1.0,high\n\
             2,0.2,1.0\n",
        );
        assert!(matches!(
            load_matrix(file.path()),
            Err(Error::MalformedMatrix(_))
        ));
    }

    #[test]
    fn test_ragged_row_fails() {
        let file = write_csv(
            "num,1,2\n\
             1,1.0\n\
             2,0.2,1.0\n",
        );
        // The csv reader itself rejects rows with the wrong field count
        assert!(load_matrix(file.path()).is_err());
    }

    #[test]
    fn test_missing_row_fails() {
        let file = write_csv(
            "num,1,2\n\
             1,1.0,0.2\n",
        );
        assert!(matches!(
            load_matrix(file.path()),
            Err(Error::MalformedMatrix(_))
        ));
    }
}
