//! Store bootstrap for the binary.

use std::path::Path;
use std::sync::Arc;

use cafe_registry::CafeRepository;
use cafe_store_sqlite::SqliteCafeRepository;

/// Opens the SQLite cafe store, creating its parent directory and schema
/// when missing.
///
/// # Errors
///
/// Returns an error if the directory or database cannot be created.
pub fn open_repository(path: &str) -> anyhow::Result<Arc<dyn CafeRepository>> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let repo = SqliteCafeRepository::open(path).map_err(|e| anyhow::anyhow!("store error: {e}"))?;
    Ok(Arc::new(repo))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn open_repository_creates_nested_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = dir.path().join("data").join("cafes.db");
        let path = db.to_str().expect("utf8");
        let repo = open_repository(path).expect("open");
        assert_eq!(repo.count().await.expect("count"), 0);
        assert!(db.exists());
    }

    #[test]
    fn open_repository_in_existing_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = dir.path().join("cafes.db");
        assert!(open_repository(db.to_str().expect("utf8")).is_ok());
    }
}
