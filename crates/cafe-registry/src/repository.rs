//! Abstract repository trait (port) for cafe storage.

use async_trait::async_trait;
use thiserror::Error;

use cafe_types::{Cafe, CafeId, NewCafe};

use crate::query::CafeQuery;

/// Errors returned by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No cafe has the requested id.
    #[error("cafe not found: {id}")]
    NotFound { id: CafeId },
    /// A random pick was requested but the store holds no cafes.
    #[error("no cafes stored")]
    EmptyStore,
    /// A database or I/O error occurred.
    #[error("storage error: {message}")]
    Storage { message: String },
    /// A uniqueness constraint was violated (duplicate name).
    #[error("conflict: {message}")]
    Conflict { message: String },
}

/// Abstract trait for cafe persistence.
///
/// Implementations live in adapter crates (e.g., `cafe-store-sqlite`).
#[async_trait]
pub trait CafeRepository: Send + Sync {
    /// Finds a cafe by its id.
    async fn find_by_id(&self, id: CafeId) -> Result<Option<Cafe>, RepositoryError>;

    /// Finds cafes matching a query, in id order.
    async fn find_all(&self, query: CafeQuery) -> Result<Vec<Cafe>, RepositoryError>;

    /// Returns every stored cafe.
    async fn list_all(&self) -> Result<Vec<Cafe>, RepositoryError> {
        self.find_all(CafeQuery::all()).await
    }

    /// Returns the first cafe (lowest id) whose location equals `location`.
    async fn find_by_location(&self, location: &str) -> Result<Option<Cafe>, RepositoryError> {
        let mut found = self
            .find_all(CafeQuery::all().with_location(location).with_limit(1))
            .await?;
        Ok(found.pop())
    }

    /// Picks one cafe uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::EmptyStore` when no cafes exist.
    async fn pick_random(&self) -> Result<Cafe, RepositoryError>;

    /// Inserts a new cafe and returns it with its assigned id.
    async fn insert(&self, cafe: NewCafe) -> Result<Cafe, RepositoryError>;

    /// Overwrites the coffee price of a cafe and returns the updated record.
    async fn update_price(
        &self,
        id: CafeId,
        new_price: Option<String>,
    ) -> Result<Cafe, RepositoryError>;

    /// Deletes a cafe by id.
    async fn delete(&self, id: CafeId) -> Result<(), RepositoryError>;

    /// Number of stored cafes.
    async fn count(&self) -> Result<u64, RepositoryError>;
}
