// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{TagCard, Destination, SurveyAnswers, ScoredDestination, RecommendationSummary, RecommendationRecord, ScoringWeights};
pub use requests::{ChoiceRequest, RecommendRequest};
pub use responses::{ChoiceResponse, RecommendedDestination, RecommendResponse, RootResponse, HealthResponse, EnvStatusResponse, ErrorResponse};
