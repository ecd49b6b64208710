// Core algorithm exports
pub mod catalog;
pub mod choices;
pub mod links;
pub mod recommender;
pub mod rounds;
pub mod scoring;

pub use catalog::Catalog;
pub use choices::{next_choices, bias_pool, CHOICES_PER_ROUND};
pub use links::{stays_url, flights_url, guide_url};
pub use recommender::{Recommender, TOP_RESULTS};
pub use rounds::{next_round, ensure_complete, RoundError, TOTAL_ROUNDS};
pub use scoring::calculate_destination_score;
