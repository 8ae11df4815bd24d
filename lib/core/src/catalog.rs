use ahash::AHashMap;

use crate::filter::FilterPredicate;
use crate::record::{BeerId, BeerRecord};
use crate::{Error, Result};

/// An ordered, read-only collection of beer records keyed by entry number.
///
/// Built once at startup; the record order and the id→position index are
/// invariant for the process lifetime, so the catalog can be shared across
/// threads without locking.
#[derive(Debug)]
pub struct Catalog {
    records: Vec<BeerRecord>,
    positions: AHashMap<BeerId, usize>,
}

impl Catalog {
    /// Construct a catalog from records in source order.
    ///
    /// Fails with [`Error::DuplicateId`] if two records share an id; no
    /// partially built catalog is observable on failure.
    pub fn load(records: Vec<BeerRecord>) -> Result<Self> {
        let mut positions = AHashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            if positions.insert(record.id, pos).is_some() {
                return Err(Error::DuplicateId(record.id));
            }
        }
        Ok(Self { records, positions })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, id: BeerId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Get a record by id
    #[inline]
    pub fn get(&self, id: BeerId) -> Option<&BeerRecord> {
        self.positions.get(&id).map(|&pos| &self.records[pos])
    }

    /// Catalog position of an id (0-based, source order)
    #[inline]
    pub fn position(&self, id: BeerId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// All records in source order
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[BeerRecord] {
        &self.records
    }

    /// Records satisfying every active condition of the predicate, in
    /// source order. An empty predicate returns the full catalog.
    pub fn filter(&self, predicate: &FilterPredicate) -> Vec<BeerRecord> {
        self.records
            .iter()
            .filter(|record| predicate.matches(record))
            .cloned()
            .collect()
    }
}
