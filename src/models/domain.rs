use serde::{Deserialize, Serialize};

/// A pickable tag card shown during a choice round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCard {
    pub id: String,
    pub label: String,
    pub image: String,
}

/// Destination entry in the static catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    pub country: String,
    pub image: String,
    pub tags: Vec<String>,
    #[serde(rename = "airport")]
    pub airport_code: String,
    pub city: String,
}

impl Destination {
    /// Whether the destination carries the given tag
    #[inline]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Whether the destination carries any of the given tags
    #[inline]
    pub fn has_any_tag(&self, tags: &[&str]) -> bool {
        tags.iter().any(|tag| self.has_tag(tag))
    }
}

/// Survey answers submitted alongside the final history
///
/// Values are free-form strings. Anything outside the documented options is
/// accepted and simply never matches a scoring rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurveyAnswers {
    /// budget | mid | luxury
    pub budget: String,
    /// weekend | 1-2 weeks | long
    pub trip_length: String,
    /// low | medium | high
    pub flexibility: String,
    /// hotel | apartment | hostel | resort | villa
    pub stay_type: String,
    /// warm | mild | cold
    #[serde(default)]
    pub climate: Option<String>,
    /// chill | balanced | packed
    #[serde(default)]
    pub pace: Option<String>,
    #[serde(default)]
    pub month: Option<String>,
    /// solo | couple | family | friends
    #[serde(default)]
    pub companions: Option<String>,
}

/// Destination paired with its request-time score
#[derive(Debug, Clone, Copy)]
pub struct ScoredDestination<'a> {
    pub destination: &'a Destination,
    pub score: f64,
}

/// Trimmed result stored with a recommendation record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSummary {
    pub name: String,
    pub country: String,
    pub score: f64,
}

impl From<&ScoredDestination<'_>> for RecommendationSummary {
    fn from(scored: &ScoredDestination<'_>) -> Self {
        Self {
            name: scored.destination.name.clone(),
            country: scored.destination.country.clone(),
            score: scored.score,
        }
    }
}

/// Document persisted once per successful recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRecord {
    pub answers: SurveyAnswers,
    pub history: Vec<String>,
    pub results: Vec<RecommendationSummary>,
}

/// Scoring weights for each additive rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// Applied per history tag shared with the destination
    pub tag_overlap: f64,
    pub budget: f64,
    pub climate: f64,
    pub pace: f64,
    pub companions: f64,
    pub food: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            tag_overlap: 3.0,
            budget: 1.5,
            climate: 1.0,
            pace: 0.8,
            companions: 0.5,
            food: 0.7,
        }
    }
}
