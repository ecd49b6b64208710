use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::core::{next_choices, next_round, Catalog, RoundError, TOTAL_ROUNDS};
use crate::models::{
    ChoiceRequest, ChoiceResponse, EnvStatusResponse, ErrorResponse, HealthResponse,
    RecommendRequest, RootResponse,
};
use crate::services::RecommendationService;

/// Presence of the document store settings, reported by `/test`
#[derive(Debug, Clone, Copy, Default)]
pub struct StoreStatus {
    pub endpoint_set: bool,
    pub database_set: bool,
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub recommendations: RecommendationService,
    pub store_status: StoreStatus,
}

/// Configure the top-level probe routes
pub fn configure_probes(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(root))
        .route("/health", web::get().to(health_check))
        .route("/test", web::get().to(env_status));
}

/// Configure the tag-card and recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/choices", web::post().to(choices))
        .route("/recommend", web::post().to(recommend));
}

async fn root() -> impl Responder {
    HttpResponse::Ok().json(RootResponse {
        message: "Travel Recommender API ready".to_string(),
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Minimal environment report: is the document store configured
async fn env_status(state: web::Data<AppState>) -> impl Responder {
    fn presence(set: bool) -> String {
        let status = if set { "✅ Set" } else { "❌ Not Set" };
        status.to_string()
    }

    HttpResponse::Ok().json(EnvStatusResponse {
        backend: "✅ Running".to_string(),
        database_url: presence(state.store_status.endpoint_set),
        database_name: presence(state.store_status.database_set),
    })
}

/// Next round of tag cards
///
/// POST /api/choices
///
/// Request body:
/// ```json
/// {
///   "history": ["beach", "food"]
/// }
/// ```
async fn choices(
    state: web::Data<AppState>,
    req: web::Json<ChoiceRequest>,
) -> impl Responder {
    let round = match next_round(&req.history) {
        Ok(round) => round,
        Err(e) => return round_error(e),
    };

    let options = next_choices(&state.catalog, &req.history, &mut rand::thread_rng())
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();

    tracing::info!(
        "Serving round {}/{} with options {:?}",
        round,
        TOTAL_ROUNDS,
        options.iter().map(|o| o.id.as_str()).collect::<Vec<_>>()
    );

    HttpResponse::Ok().json(ChoiceResponse {
        round,
        total_rounds: TOTAL_ROUNDS,
        options,
    })
}

/// Ranked destinations for a finished session
///
/// POST /api/recommend
///
/// Request body:
/// ```json
/// {
///   "answers": {"budget": "mid", "trip_length": "weekend", "flexibility": "low", "stay_type": "hotel"},
///   "history": ["beach", "tropical", "food", "warm", "relaxation", "city", "food"]
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    let req = req.into_inner();

    match state.recommendations.recommend(&req.answers, &req.history).await {
        Ok(response) => {
            tracing::info!(
                "Returning {} recommendations (saved: {})",
                response.recommendations.len(),
                response.saved_id.as_deref().unwrap_or("no")
            );
            HttpResponse::Ok().json(response)
        }
        Err(e) => round_error(e),
    }
}

fn round_error(e: RoundError) -> HttpResponse {
    tracing::info!("Rejected request: {}", e);
    let error = match e {
        RoundError::AllRoundsCompleted => "rounds_completed",
        RoundError::RoundsIncomplete { .. } => "rounds_incomplete",
    };
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message: e.to_string(),
        status_code: 400,
    })
}
