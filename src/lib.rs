//! # brewrec
//!
//! A festival-beer catalog with attribute filtering and similarity-based
//! recommendations.
//!
//! The engine loads three static inputs at startup (the beer catalog, a
//! precomputed pairwise similarity matrix, and an optional precomputed 2-D
//! embedding), then serves two read-only operations: filter the catalog by
//! attribute, and look up the top-N most similar beers for one entry. When
//! a filter narrows the catalog to exactly one beer, the evaluate
//! operation attaches that beer's recommendations.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! brewrec --beers data/festival_beers.csv \
//!         --similarity data/similarity_matrix.csv \
//!         --http-port 8050
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use brewrec::prelude::*;
//!
//! # fn main() -> brewrec::Result<()> {
//! let catalog = Arc::new(load_catalog("data/festival_beers.csv")?);
//! let matrix = Arc::new(load_matrix("data/similarity_matrix.csv")?);
//! let recommender = Recommender::new(catalog, matrix, SelfPolicy::Exclude)?;
//!
//! // Five beers most like beer 42
//! let recs = recommender.recommend(42, 5)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! - `brewrec-core` - Catalog, filtering, similarity matrix, recommender
//! - `brewrec-data` - CSV loading for the three static inputs
//! - `brewrec-api` - REST API over the core operations

// Re-export core types
pub use brewrec_core::{
    BeerId, BeerRecord, Catalog, Error, Evaluation, FilterCondition, FilterPredicate,
    Recommender, Result, SelfPolicy, SimilarityMatrix, DEFAULT_RECOMMENDATIONS,
};

// Re-export data loading
pub use brewrec_data::{load_catalog, load_matrix, EmbeddingPoint, EmbeddingTable, MapBounds};

// Re-export API
pub use brewrec_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        load_catalog, load_matrix, BeerId, BeerRecord, Catalog, EmbeddingTable, Error,
        Evaluation, FilterCondition, FilterPredicate, MapBounds, Recommender, RestApi, Result,
        SelfPolicy, SimilarityMatrix, DEFAULT_RECOMMENDATIONS,
    };
}
