use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{
    HealthResponse, InterestGroup, InterestsResponse, MatchVenuesRequest, MatchVenuesResponse,
    VenuesResponse,
};
use crate::routes::{validation_failed, AppState};

/// Configure catalog and matching routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/venues", web::get().to(list_venues))
        .route("/interests", web::get().to(list_interests))
        .route("/matches/venues", web::post().to(match_venues));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

async fn list_venues(state: web::Data<AppState>) -> impl Responder {
    let venues = state.catalog.venues().to_vec();

    HttpResponse::Ok().json(VenuesResponse {
        total: venues.len(),
        venues,
    })
}

/// Interests grouped by category, in display order
async fn list_interests(state: web::Data<AppState>) -> impl Responder {
    let groups = state
        .interests
        .grouped()
        .into_iter()
        .map(|(category, interests)| InterestGroup {
            category,
            label: category.label().to_string(),
            interests,
        })
        .collect();

    HttpResponse::Ok().json(InterestsResponse { groups })
}

/// Match venues endpoint
///
/// POST /api/v1/matches/venues
///
/// Request body:
/// ```json
/// {
///   "interestsA": ["Italian", "Hiking"],
///   "interestsB": ["Italian", "Dancing"]
/// }
/// ```
///
/// Unrecognized interest names are ignored.
async fn match_venues(
    state: web::Data<AppState>,
    req: web::Json<MatchVenuesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let result = state.matcher.find_matches(&req.interests_a, &req.interests_b);

    tracing::info!(
        "Returning {} matched venues ({} shared interests)",
        result.venues.len(),
        result.shared_interests.len()
    );

    HttpResponse::Ok().json(MatchVenuesResponse {
        venues: result.venues,
        shared_interests: result.shared_interests,
    })
}
