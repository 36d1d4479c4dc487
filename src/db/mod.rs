use async_trait::async_trait;

use crate::errors::SubmissionError;

pub mod record_repository;
pub mod schema;

use crate::db::record_repository::RecordRepository;

/// Document store seam: append-only writes into named collections, ids
/// assigned by the store. Shared across requests without external locking.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn add_record(
        &self,
        collection: &str,
        body: serde_json::Value,
    ) -> Result<(), SubmissionError>;
}

/// Sqlite-backed store. Opens a connection per write, like the rest of the
/// db layer, so the handle itself stays trivially Send + Sync.
pub struct SqliteStore {
    path: String,
}

impl SqliteStore {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

#[async_trait]
impl DocumentStore for SqliteStore {
    async fn add_record(
        &self,
        collection: &str,
        body: serde_json::Value,
    ) -> Result<(), SubmissionError> {
        let path = self.path.clone();
        let collection = collection.to_string();

        tokio::task::spawn_blocking(move || {
            let conn = schema::init_db(&path)
                .map_err(|e| SubmissionError::StorageError(e.to_string()))?;
            RecordRepository::new(conn)
                .add_record(&collection, &body)
                .map(|_| ())
        })
        .await
        .map_err(|e| SubmissionError::StorageError(format!("Blocking task error: {}", e)))?
    }
}
