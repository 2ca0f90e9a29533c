//! # cafe-store-sqlite
//!
//! SQLite adapter for cafe storage.
//! Implements `CafeRepository` over a single `cafe` table.

pub mod migrations;
mod query_builder;
pub mod repository;
mod repository_impl;
mod row_mapping;

pub use repository::SqliteCafeRepository;
