// Route exports
pub mod travel;

use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse};

use crate::models::ErrorResponse;

pub use travel::{AppState, StoreStatus};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        .app_data(web::JsonConfig::default().error_handler(reject_payload))
        .configure(travel::configure_probes)
        .service(
            web::scope("/api")
                .configure(travel::configure),
        );
}

/// Request body that could not be read as a session payload
#[derive(Debug, thiserror::Error)]
#[error("Request body is not a valid session payload: {0}")]
pub struct RejectedPayload(#[from] error::JsonPayloadError);

impl error::ResponseError for RejectedPayload {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::BadRequest().json(ErrorResponse {
            error: "invalid_json".to_string(),
            message: self.to_string(),
            status_code: self.status_code().as_u16(),
        })
    }
}

fn reject_payload(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Rejected payload on {}: {}", req.path(), err);
    RejectedPayload(err).into()
}
