//! Catalog CSV loading
//!
//! The catalog source is one row per beer with the logical fields
//! (id, name, section, state, style, brewery, abv, notes). Header naming
//! varies between festival years; [`BeerRecord`]'s serde aliases absorb
//! both the lowercase and capitalized variants.

use std::path::Path;

use tracing::info;

use brewrec_core::{BeerRecord, Catalog, Error, Result};

/// Read the festival-beers CSV and build the catalog.
///
/// Fails with [`Error::Csv`] if the file cannot be read,
/// [`Error::MalformedRecord`] if a row does not resolve to the logical
/// schema or carries a negative ABV, and [`Error::DuplicateId`] if two
/// rows share an entry number.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| Error::Csv(format!("{}: {e}", path.display())))?;

    let mut records = Vec::new();
    for (row, result) in reader.deserialize::<BeerRecord>().enumerate() {
        // Row 1 is the header
        let line = row + 2;
        let record =
            result.map_err(|e| Error::MalformedRecord(format!("line {line}: {e}")))?;
        if record.abv < 0.0 {
            return Err(Error::MalformedRecord(format!(
                "line {line}: beer {} has negative abv {}",
                record.id, record.abv
            )));
        }
        records.push(record);
    }

    let catalog = Catalog::load(records)?;
    info!("Loaded {} beers from {}", catalog.len(), path.display());
    Ok(catalog)
}
