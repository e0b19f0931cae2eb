//! Storage trait abstraction.

use async_trait::async_trait;

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error in `{key}`: {source}")]
    Json {
        /// Key whose blob failed to (de)serialize
        key: String,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Opaque key-value store holding serialized blobs.
///
/// Keys are short names such as `todos`; values are text blobs.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Read the blob stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous blob.
    async fn put(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    async fn remove(&mut self, key: &str) -> Result<()>;

    /// All keys currently stored, sorted.
    async fn keys(&self) -> Result<Vec<String>>;
}
