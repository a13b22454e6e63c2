use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::account::aggregate::RawEntries;

/// Where the raw date → duration map comes from. The production source is a
/// JSON file an external fetcher keeps refreshed.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EntrySource: Send + Sync {
    async fn fetch(&self) -> Result<RawEntries>;
}

pub struct FileEntrySource {
    path: PathBuf,
}

impl FileEntrySource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl EntrySource for FileEntrySource {
    async fn fetch(&self) -> Result<RawEntries> {
        let data = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read entries from {:?}", self.path))?;
        serde_json::from_str(&data)
            .with_context(|| format!("Entries file {:?} should map dates to durations", self.path))
    }
}
