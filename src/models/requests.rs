use serde::{Deserialize, Serialize};
use crate::models::domain::SurveyAnswers;

/// Request for the next round of tag cards
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChoiceRequest {
    /// Previously chosen tag ids, oldest first
    #[serde(default)]
    pub history: Vec<String>,
}

/// Request for ranked destinations once every round is done
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub answers: SurveyAnswers,
    pub history: Vec<String>,
}
