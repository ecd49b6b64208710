use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when writing to the document store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: invalid API key or token")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Document store is not configured")]
    NotConfigured,
}

/// Write-only document store
///
/// Implementations make one attempt per call; callers decide what a failure
/// means for them.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Create a document in `collection` and return its id
    async fn create_document(&self, collection: &str, document: Value) -> Result<String, StoreError>;

    /// Store name for logging
    fn name(&self) -> &'static str;
}

/// Store used when no backend is configured; every write fails
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledStore;

#[async_trait]
impl DocumentStore for DisabledStore {
    async fn create_document(&self, _collection: &str, _document: Value) -> Result<String, StoreError> {
        Err(StoreError::NotConfigured)
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_store_rejects_writes() {
        let result = DisabledStore
            .create_document("recommendation", serde_json::json!({"a": 1}))
            .await;
        assert!(matches!(result, Err(StoreError::NotConfigured)));
    }
}
