//! # brewrec Core
//!
//! Core library for the brewrec beer recommendation engine.
//!
//! This crate provides the fundamental data structures and operations:
//!
//! - [`BeerRecord`] - One catalog entry with its attributes
//! - [`Catalog`] - Ordered record store with id lookup and filtering
//! - [`FilterPredicate`] - AND-composed per-attribute constraints
//! - [`SimilarityMatrix`] - Precomputed pairwise similarity scores
//! - [`Recommender`] - Top-N similarity lookup and filter-then-recommend
//!   orchestration
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use brewrec_core::{
//!     BeerRecord, Catalog, FilterCondition, FilterPredicate, Recommender,
//!     SelfPolicy, SimilarityMatrix,
//! };
//!
//! let catalog = Arc::new(Catalog::load(vec![
//!     BeerRecord::new(1, "Galaxy Haze").with_state("VIC").with_abv(4.0),
//!     BeerRecord::new(2, "Harbour Sour").with_state("NSW").with_abv(5.0),
//!     BeerRecord::new(3, "Hop Tram").with_state("VIC").with_abv(4.5),
//! ]).unwrap());
//!
//! let matrix = Arc::new(SimilarityMatrix::new(
//!     vec![1, 2, 3],
//!     vec![
//!         vec![1.0, 0.2, 0.9],
//!         vec![0.2, 1.0, 0.4],
//!         vec![0.9, 0.4, 1.0],
//!     ],
//! ).unwrap());
//!
//! let recommender = Recommender::new(catalog, matrix, SelfPolicy::Exclude).unwrap();
//!
//! // Narrow the catalog, then ask for neighbors of the single survivor
//! let predicate = FilterPredicate::new()
//!     .with(FilterCondition::StateIn(vec!["NSW".to_string()]));
//! let evaluation = recommender.evaluate(&predicate, 5).unwrap();
//! assert_eq!(evaluation.matches.len(), 1);
//! ```

pub mod catalog;
pub mod error;
pub mod filter;
pub mod matrix;
pub mod record;
pub mod recommend;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use filter::{FilterCondition, FilterPredicate};
pub use matrix::SimilarityMatrix;
pub use record::{BeerId, BeerRecord};
pub use recommend::{Evaluation, Recommender, SelfPolicy, DEFAULT_RECOMMENDATIONS};
