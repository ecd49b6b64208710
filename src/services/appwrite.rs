use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::time::Duration;

use crate::services::store::{DocumentStore, StoreError};

/// Appwrite databases API client
///
/// Only document creation is needed: recommendation records are written once
/// and never read back by this service.
pub struct AppwriteClient {
    base_url: String,
    api_key: String,
    project_id: String,
    database_id: String,
    client: Client,
}

impl AppwriteClient {
    /// Create a new Appwrite client
    pub fn new(
        base_url: String,
        api_key: String,
        project_id: String,
        database_id: String,
    ) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            base_url,
            api_key,
            project_id,
            database_id,
            client,
        })
    }

    fn documents_url(&self, collection: &str) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(&self.database_id),
            urlencoding::encode(collection)
        )
    }
}

#[async_trait]
impl DocumentStore for AppwriteClient {
    async fn create_document(&self, collection: &str, document: Value) -> Result<String, StoreError> {
        let url = self.documents_url(collection);

        let payload = json!({
            "documentId": uuid::Uuid::new_v4().simple().to_string(),
            "data": document,
        });

        let response = self
            .client
            .post(&url)
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(StoreError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::debug!("Appwrite rejected document in {}: {} - {}", collection, status, body);
            return Err(StoreError::ApiError(format!(
                "Failed to create document: {}",
                status
            )));
        }

        let json: Value = response.json().await?;

        let id = json
            .get("$id")
            .and_then(|id| id.as_str())
            .ok_or_else(|| StoreError::InvalidResponse("Missing $id in created document".into()))?;

        tracing::debug!("Created document {} in {}", id, collection);

        Ok(id.to_string())
    }

    fn name(&self) -> &'static str {
        "appwrite"
    }
}
