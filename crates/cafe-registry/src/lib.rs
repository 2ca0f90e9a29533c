//! # cafe-registry
//!
//! Port definitions (abstract traits) for cafe storage.
//! Adapter crates implement these traits.

pub mod query;
pub mod repository;

pub use query::CafeQuery;
pub use repository::{CafeRepository, RepositoryError};
