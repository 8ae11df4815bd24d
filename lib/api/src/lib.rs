//! # brewrec API
//!
//! The UI-facing HTTP surface. Thin handlers over [`brewrec_core`]: the
//! engine's two operations (filter, recommend), the single-selection
//! evaluate transition, and the precomputed beer-map coordinates.

pub mod rest;

pub use rest::RestApi;
