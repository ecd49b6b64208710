use serde::{Deserialize, Serialize};
use crate::models::domain::TagCard;

/// Response for the choices endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceResponse {
    /// 1-based round the options belong to
    pub round: usize,
    pub total_rounds: usize,
    pub options: Vec<TagCard>,
}

/// Destination as presented to the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedDestination {
    pub name: String,
    pub country: String,
    pub image: String,
    pub score: f64,
    pub tags: Vec<String>,
    pub stays_url: String,
    pub flights_url: String,
    pub guide_url: String,
}

/// Response for the recommend endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<RecommendedDestination>,
    pub saved_id: Option<String>,
}

/// Root endpoint greeting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Environment probe: which store settings are present
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvStatusResponse {
    pub backend: String,
    pub database_url: String,
    pub database_name: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
