use crate::errors::SubmissionError;
use chrono::{DateTime, NaiveDateTime, Utc};
use rusqlite::{params, Connection, Result as RusqliteResult};

/// A document read back from the append-only `records` table. Identifiers
/// and `created_at` are assigned by the store.
pub struct StoredRecord {
    pub id: i64,
    pub collection: String,
    pub body: serde_json::Value,
    pub created_at: Option<DateTime<Utc>>,
}

pub struct RecordRepository {
    conn: Connection,
}

impl RecordRepository {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    fn map_row_to_record(row: &rusqlite::Row) -> RusqliteResult<StoredRecord> {
        let body_text: String = row.get(2)?;
        let created_at_str: Option<String> = row.get(3)?;

        let created_at = created_at_str.and_then(|s| {
            NaiveDateTime::parse_from_str(&s, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|dt| dt.and_utc())
        });

        Ok(StoredRecord {
            id: row.get(0)?,
            collection: row.get(1)?,
            body: serde_json::from_str(&body_text).unwrap_or(serde_json::Value::Null),
            created_at,
        })
    }

    pub fn add_record(
        &self,
        collection: &str,
        body: &serde_json::Value,
    ) -> Result<i64, SubmissionError> {
        let result = self.conn.execute(
            "INSERT INTO records (collection, body) VALUES (?1, ?2)",
            params![collection, body.to_string()],
        );

        match result {
            Ok(_) => Ok(self.conn.last_insert_rowid()),
            Err(e) => Err(SubmissionError::StorageError(e.to_string())),
        }
    }

    pub fn get_records(&self, collection: &str) -> Result<Vec<StoredRecord>, SubmissionError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, collection, body, created_at
             FROM records WHERE collection = ?1 ORDER BY id",
            )
            .map_err(|e| SubmissionError::StorageError(e.to_string()))?;

        let record_iter = stmt
            .query_map(params![collection], Self::map_row_to_record)
            .map_err(|e| SubmissionError::StorageError(e.to_string()))?;

        let records: Result<Vec<StoredRecord>, _> = record_iter
            .map(|res| res.map_err(|e| SubmissionError::StorageError(e.to_string())))
            .collect();

        records
    }
}
