//! # cafe-types
//!
//! Domain types for the cafe service.
//! This crate contains pure data types with zero external dependencies
//! (except serde for serialization).

pub mod cafe;
pub mod error;
pub mod flag;

// Re-exports for convenience.
pub use cafe::{Cafe, CafeId, NewCafe};
pub use error::CafeError;
pub use flag::presence_flag;
