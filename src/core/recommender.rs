use crate::core::{
    catalog::Catalog,
    rounds::{ensure_complete, RoundError},
    scoring::calculate_destination_score,
};
use crate::models::{ScoredDestination, ScoringWeights, SurveyAnswers};

/// Number of destinations returned per recommendation
pub const TOP_RESULTS: usize = 3;

/// Ranks the destination catalog against a finished session
#[derive(Debug, Clone)]
pub struct Recommender {
    weights: ScoringWeights,
}

impl Recommender {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score every destination and return the best `limit`, highest first
    ///
    /// Fails with [`RoundError::RoundsIncomplete`] until the history covers
    /// every round. Equal scores keep catalog order.
    pub fn rank<'a>(
        &self,
        catalog: &'a Catalog,
        answers: &SurveyAnswers,
        history: &[String],
        limit: usize,
    ) -> Result<Vec<ScoredDestination<'a>>, RoundError> {
        ensure_complete(history)?;

        let mut scored: Vec<ScoredDestination<'a>> = catalog
            .destinations()
            .iter()
            .map(|destination| ScoredDestination {
                destination,
                score: calculate_destination_score(destination, answers, history, &self.weights),
            })
            .collect();

        // sort_by is stable, ties stay in declaration order
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        for entry in &scored {
            tracing::debug!("Scored {}: {:.2}", entry.destination.name, entry.score);
        }

        scored.truncate(limit);
        Ok(scored)
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers() -> SurveyAnswers {
        SurveyAnswers {
            budget: "mid".to_string(),
            trip_length: "1-2 weeks".to_string(),
            flexibility: "high".to_string(),
            stay_type: "apartment".to_string(),
            ..Default::default()
        }
    }

    fn history(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    fn names(scored: &[ScoredDestination<'_>]) -> Vec<String> {
        scored.iter().map(|s| s.destination.name.clone()).collect()
    }

    #[test]
    fn test_incomplete_history_rejected() {
        let catalog = Catalog::builtin();
        let recommender = Recommender::default();

        let result = recommender.rank(&catalog, &answers(), &history(&["beach"; 6]), TOP_RESULTS);

        assert_eq!(result.unwrap_err(), RoundError::RoundsIncomplete { completed: 6 });
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = Catalog::builtin();
        let recommender = Recommender::default();

        let result = recommender
            .rank(&catalog, &answers(), &history(&["nowhere"; 7]), TOP_RESULTS)
            .unwrap();

        assert_eq!(names(&result), vec!["Bali", "Kyoto", "Reykjavík"]);
        assert!(result.iter().all(|s| s.score == 0.0));
    }

    #[test]
    fn test_arctic_history_picks_reykjavik() {
        let catalog = Catalog::builtin();
        let recommender = Recommender::default();
        let h = history(&["arctic", "cold", "adventure", "mountains", "arctic", "cold", "adventure"]);

        let result = recommender.rank(&catalog, &answers(), &h, TOP_RESULTS).unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].destination.name, "Reykjavík");
        assert!(result[0].score >= result[1].score);
        assert!(result[1].score >= result[2].score);
    }

    #[test]
    fn test_respects_limit() {
        let catalog = Catalog::builtin();
        let recommender = Recommender::default();

        let all = recommender
            .rank(&catalog, &answers(), &history(&["food"; 7]), usize::MAX)
            .unwrap();

        assert_eq!(all.len(), catalog.destinations().len());
    }

    #[test]
    fn test_keeps_configured_weights() {
        let weights = ScoringWeights {
            tag_overlap: 1.0,
            ..ScoringWeights::default()
        };

        assert_eq!(Recommender::new(weights).weights(), &weights);
        assert_eq!(Recommender::default().weights(), &ScoringWeights::default());
    }
}
