//! # brewrec Data
//!
//! Loads the static reference data consumed by the engine at startup:
//!
//! - the festival-beer catalog CSV ([`load_catalog`])
//! - the precomputed pairwise similarity matrix CSV ([`load_matrix`])
//! - the precomputed 2-D embedding CSV ([`EmbeddingTable`])
//!
//! All three inputs are read fully, once, before any request is served;
//! nothing in this crate writes back to disk.

pub mod catalog_csv;
pub mod embedding;
pub mod matrix_csv;

pub use catalog_csv::load_catalog;
pub use embedding::{EmbeddingPoint, EmbeddingTable, MapBounds};
pub use matrix_csv::load_matrix;
