use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use wanderpick::config::{LoggingSettings, Settings};
use wanderpick::core::{Catalog, Recommender};
use wanderpick::models::ScoringWeights;
use wanderpick::routes::{self, AppState, StoreStatus};
use wanderpick::services::{AppwriteClient, DisabledStore, DocumentStore, RecommendationService};

/// Initialize logging from settings; RUST_LOG takes precedence over the level
fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_tracing(&settings.logging);

    info!("Starting Wanderpick recommender...");

    let store: Arc<dyn DocumentStore> = if settings.store.is_configured() {
        let client = AppwriteClient::new(
            settings.store.endpoint.clone(),
            settings.store.api_key.clone(),
            settings.store.project_id.clone(),
            settings.store.database_id.clone(),
        )
        .map_err(|e| {
            error!("Failed to create Appwrite client: {}", e);
            std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
        })?;
        info!("Appwrite store initialized");
        Arc::new(client)
    } else {
        warn!("Document store not configured, recommendations will not be saved");
        Arc::new(DisabledStore)
    };

    let store_status = StoreStatus {
        endpoint_set: settings.store.endpoint_set(),
        database_set: settings.store.database_set(),
    };

    let catalog = Arc::new(Catalog::builtin());
    info!(
        "Catalog loaded: {} tags, {} destinations",
        catalog.tags().len(),
        catalog.destinations().len()
    );

    let recommender = Recommender::new(ScoringWeights::from(&settings.scoring.weights));

    info!("Recommender initialized with weights: {:?}", recommender.weights());

    let app_state = AppState {
        catalog: catalog.clone(),
        recommendations: RecommendationService::new(
            catalog,
            recommender,
            store,
            settings.collection.recommendations.clone(),
        ),
        store_status,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
