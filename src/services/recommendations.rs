use std::sync::Arc;

use crate::core::{
    links::{flights_url, guide_url, stays_url},
    Catalog, Recommender, RoundError, TOP_RESULTS,
};
use crate::models::{
    RecommendResponse, RecommendationRecord, RecommendationSummary, RecommendedDestination,
    ScoredDestination, SurveyAnswers,
};
use crate::services::store::{DocumentStore, StoreError};

/// Ranks destinations, records the outcome and formats the response
///
/// Persistence is best effort: a failed write is logged and surfaces only as
/// a missing `saved_id`.
#[derive(Clone)]
pub struct RecommendationService {
    catalog: Arc<Catalog>,
    recommender: Recommender,
    store: Arc<dyn DocumentStore>,
    collection: String,
}

impl RecommendationService {
    pub fn new(
        catalog: Arc<Catalog>,
        recommender: Recommender,
        store: Arc<dyn DocumentStore>,
        collection: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            recommender,
            store,
            collection: collection.into(),
        }
    }

    /// Produce the top destinations for a finished session
    pub async fn recommend(
        &self,
        answers: &SurveyAnswers,
        history: &[String],
    ) -> Result<RecommendResponse, RoundError> {
        let top = self
            .recommender
            .rank(&self.catalog, answers, history, TOP_RESULTS)?;

        let record = RecommendationRecord {
            answers: answers.clone(),
            history: history.to_vec(),
            results: top.iter().map(RecommendationSummary::from).collect(),
        };

        let saved_id = match self.persist(&record).await {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::warn!(
                    "Recommendation computed but {} store write failed: {}",
                    self.store.name(),
                    e
                );
                None
            }
        };

        let recommendations = top.iter().map(present).collect();

        Ok(RecommendResponse {
            recommendations,
            saved_id,
        })
    }

    /// Write a recommendation record to the configured collection
    pub async fn persist(&self, record: &RecommendationRecord) -> Result<String, StoreError> {
        let document = serde_json::to_value(record)?;
        self.store.create_document(&self.collection, document).await
    }
}

fn present(scored: &ScoredDestination<'_>) -> RecommendedDestination {
    let destination = scored.destination;
    RecommendedDestination {
        name: destination.name.clone(),
        country: destination.country.clone(),
        image: destination.image.clone(),
        score: round2(scored.score),
        tags: destination.tags.clone(),
        stays_url: stays_url(&destination.city),
        flights_url: flights_url(&destination.airport_code),
        guide_url: guide_url(&destination.city),
    }
}

/// Round to two decimals for presentation
#[inline]
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingStore {
        documents: Mutex<Vec<(String, Value)>>,
    }

    #[async_trait]
    impl DocumentStore for RecordingStore {
        async fn create_document(&self, collection: &str, document: Value) -> Result<String, StoreError> {
            let mut documents = self.documents.lock().unwrap();
            documents.push((collection.to_string(), document));
            Ok(format!("doc-{}", documents.len()))
        }

        fn name(&self) -> &'static str {
            "recording"
        }
    }

    fn answers() -> SurveyAnswers {
        SurveyAnswers {
            budget: "luxury".to_string(),
            trip_length: "long".to_string(),
            flexibility: "low".to_string(),
            stay_type: "villa".to_string(),
            companions: Some("friends".to_string()),
            ..Default::default()
        }
    }

    fn history() -> Vec<String> {
        ["city", "nightlife", "food", "luxury", "city", "nightlife", "food"]
            .iter()
            .map(|t| t.to_string())
            .collect()
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(12.2000000001), 12.2);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(3.14159), 3.14);
    }

    #[tokio::test]
    async fn test_record_written_with_raw_scores() {
        let store = Arc::new(RecordingStore::default());
        let service = RecommendationService::new(
            Arc::new(Catalog::builtin()),
            Recommender::default(),
            store.clone(),
            "recommendation",
        );

        let response = service.recommend(&answers(), &history()).await.unwrap();

        assert_eq!(response.saved_id.as_deref(), Some("doc-1"));
        assert_eq!(response.recommendations[0].name, "New York");

        let documents = store.documents.lock().unwrap();
        assert_eq!(documents.len(), 1);
        let (collection, document) = &documents[0];
        assert_eq!(collection, "recommendation");
        assert_eq!(document["history"].as_array().unwrap().len(), 7);
        assert_eq!(document["answers"]["budget"], "luxury");
        assert_eq!(document["answers"]["climate"], Value::Null);
        assert_eq!(document["results"].as_array().unwrap().len(), 3);
        assert_eq!(document["results"][0]["name"], "New York");
        assert_eq!(document["results"][0]["country"], "USA");
    }

    #[tokio::test]
    async fn test_incomplete_history_writes_nothing() {
        let store = Arc::new(RecordingStore::default());
        let service = RecommendationService::new(
            Arc::new(Catalog::builtin()),
            Recommender::default(),
            store.clone(),
            "recommendation",
        );

        let result = service.recommend(&answers(), &history()[..3]).await;

        assert!(matches!(result, Err(RoundError::RoundsIncomplete { completed: 3 })));
        assert!(store.documents.lock().unwrap().is_empty());
    }
}
