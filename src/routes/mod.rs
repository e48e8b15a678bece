// Route exports
pub mod matches;
pub mod plans;
pub mod sessions;

use std::sync::Arc;

use actix_web::{http::StatusCode, web, HttpResponse};

use crate::catalog::{InterestCatalog, VenueCatalog};
use crate::core::{Matcher, PlanGenerator};
use crate::models::ErrorResponse;
use crate::services::{SessionLimits, SessionStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<VenueCatalog>,
    pub interests: Arc<InterestCatalog>,
    pub planner: PlanGenerator,
    pub matcher: Matcher,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(catalog: VenueCatalog, interests: InterestCatalog, limits: SessionLimits) -> Self {
        let catalog = Arc::new(catalog);
        let interests = Arc::new(interests);

        Self {
            planner: PlanGenerator::new(catalog.clone()),
            matcher: Matcher::new(catalog.clone()),
            sessions: Arc::new(SessionStore::new(catalog.clone(), interests.clone(), limits)),
            catalog,
            interests,
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matches::configure)
            .configure(plans::configure)
            .configure(sessions::configure),
    );
}

/// JSON error body with the given status
pub(crate) fn error_response(status: StatusCode, error: &str, message: String) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status.as_u16(),
    })
}

pub(crate) fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string())
}
