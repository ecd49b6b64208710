//! Wanderpick - travel destination recommender
//!
//! Clients play seven rounds of tag cards, then submit a short survey. This
//! library picks each round's cards with a bias toward complementary themes,
//! scores a static destination catalog against the finished session and
//! records the outcome in a document store.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{Catalog, Recommender, RoundError, next_choices, TOTAL_ROUNDS};
pub use models::{TagCard, Destination, SurveyAnswers, ScoringWeights, RecommendResponse, ChoiceResponse};
pub use services::{DocumentStore, RecommendationService, StoreError};
