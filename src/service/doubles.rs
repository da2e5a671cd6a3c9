//! Test doubles for the service seams.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::import::{CsvRow, RowConsumer};
use super::s3::ObjectStore;

/// In-memory [`ObjectStore`] keyed by `bucket/key`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn with(mut self, bucket: &str, key: &str, content: impl Into<Vec<u8>>) -> Self {
        self.objects.insert(format!("{bucket}/{key}"), content.into());
        self
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn get(&self, bucket: &str, key: &str) -> anyhow::Result<Vec<u8>> {
        self.objects
            .get(&format!("{bucket}/{key}"))
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no such object {key} in bucket {bucket}"))
    }
}

/// [`RowConsumer`] that records every row it sees.
#[derive(Debug, Default)]
pub struct RecordingConsumer {
    pub rows: Mutex<Vec<CsvRow>>,
}

#[async_trait]
impl RowConsumer for RecordingConsumer {
    async fn consume(&self, row: CsvRow) -> anyhow::Result<()> {
        self.rows.lock().unwrap().push(row);
        Ok(())
    }
}

/// [`RowConsumer`] that rejects every row.
#[derive(Debug, Default)]
pub struct FailingConsumer;

#[async_trait]
impl RowConsumer for FailingConsumer {
    async fn consume(&self, _row: CsvRow) -> anyhow::Result<()> {
        anyhow::bail!("row consumer rejected the row")
    }
}
