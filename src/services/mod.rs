// Service exports
pub mod appwrite;
pub mod recommendations;
pub mod store;

pub use appwrite::AppwriteClient;
pub use recommendations::RecommendationService;
pub use store::{DocumentStore, DisabledStore, StoreError};
