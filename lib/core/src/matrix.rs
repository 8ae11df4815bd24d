//! Precomputed pairwise similarity scores
//!
//! The matrix is square, labeled on both axes by beer id, and read-only
//! after construction. Symmetry is by convention and never enforced;
//! diagonal entries carry self-similarity.

use ahash::AHashMap;

use crate::catalog::Catalog;
use crate::record::BeerId;
use crate::{Error, Result};

/// A dense square similarity matrix indexed by beer id.
#[derive(Debug)]
pub struct SimilarityMatrix {
    ids: Vec<BeerId>,
    rows: AHashMap<BeerId, usize>,
    /// Row-major, `ids.len() * ids.len()` entries
    scores: Vec<f32>,
}

impl SimilarityMatrix {
    /// Build a matrix from axis labels and row-major score rows.
    ///
    /// Fails with [`Error::MalformedMatrix`] if a label repeats, the row
    /// count differs from the label count, or any row is ragged.
    pub fn new(ids: Vec<BeerId>, score_rows: Vec<Vec<f32>>) -> Result<Self> {
        let n = ids.len();
        if score_rows.len() != n {
            return Err(Error::MalformedMatrix(format!(
                "expected {} rows, got {}",
                n,
                score_rows.len()
            )));
        }

        let mut rows = AHashMap::with_capacity(n);
        for (pos, &id) in ids.iter().enumerate() {
            if rows.insert(id, pos).is_some() {
                return Err(Error::MalformedMatrix(format!("duplicate label: {id}")));
            }
        }

        let mut scores = Vec::with_capacity(n * n);
        for (pos, row) in score_rows.iter().enumerate() {
            if row.len() != n {
                return Err(Error::MalformedMatrix(format!(
                    "row {} has {} columns, expected {}",
                    ids[pos],
                    row.len(),
                    n
                )));
            }
            scores.extend_from_slice(row);
        }

        Ok(Self { ids, rows, scores })
    }

    /// Number of beers on each axis
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Axis labels in row order
    #[inline]
    #[must_use]
    pub fn ids(&self) -> &[BeerId] {
        &self.ids
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, id: BeerId) -> bool {
        self.rows.contains_key(&id)
    }

    /// The similarity row for a beer, in axis-label order
    #[inline]
    pub fn row(&self, id: BeerId) -> Option<&[f32]> {
        let n = self.ids.len();
        self.rows.get(&id).map(|&pos| &self.scores[pos * n..(pos + 1) * n])
    }

    /// Pairwise score between two beers
    #[inline]
    pub fn score(&self, a: BeerId, b: BeerId) -> Option<f32> {
        let row = self.row(a)?;
        self.rows.get(&b).map(|&col| row[col])
    }

    /// Check that every matrix label resolves to a catalog record.
    ///
    /// Fails with [`Error::MalformedMatrix`] naming the first label with
    /// no catalog counterpart.
    pub fn validate_against(&self, catalog: &Catalog) -> Result<()> {
        for &id in &self.ids {
            if !catalog.contains(id) {
                return Err(Error::MalformedMatrix(format!(
                    "label {id} is not in the catalog"
                )));
            }
        }
        Ok(())
    }
}
