//! In-memory storage, for tests and throwaway sessions.

use std::collections::BTreeMap;
use super::{Result, Storage};

/// Storage backed by an in-process map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    blobs: BTreeMap<String, String>,
}

impl MemoryStorage {
    /// Create empty storage.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Storage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    async fn put(&mut self, key: &str, value: &str) -> Result<()> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&mut self, key: &str) -> Result<()> {
        self.blobs.remove(key);
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>> {
        Ok(self.blobs.keys().cloned().collect())
    }
}
