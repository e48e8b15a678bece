use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;

use crate::models::{
    CreateSessionRequest, JoinSessionRequest, MatchVenuesResponse, SubmitInterestsRequest,
    SwipeRequest, SwipeResponse, VenuesResponse,
};
use crate::routes::{error_response, validation_failed, AppState};
use crate::services::SessionError;

/// Configure two-person session routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/sessions", web::post().to(create_session))
        .route("/sessions/join", web::post().to(join_session))
        .route("/sessions/{id}", web::get().to(get_session))
        .route("/sessions/{id}/interests", web::put().to(submit_interests))
        .route("/sessions/{id}/matches", web::get().to(session_matches))
        .route("/sessions/{id}/swipes", web::post().to(record_swipe))
        .route("/sessions/{id}/saved", web::get().to(saved_venues));
}

fn session_error(err: SessionError) -> HttpResponse {
    let (status, error) = match &err {
        SessionError::NotFound(_) => (StatusCode::NOT_FOUND, "Session not found"),
        SessionError::UnknownVenue(_) => (StatusCode::NOT_FOUND, "Venue not found"),
        SessionError::InvalidCode(_) => (StatusCode::BAD_REQUEST, "Invalid invite code"),
        SessionError::AlreadyJoined(_) => (StatusCode::CONFLICT, "Session already joined"),
        SessionError::NotActive(_) => (StatusCode::CONFLICT, "Session not active"),
        SessionError::NotEnoughInterests { .. } | SessionError::TooManyInterests { .. } => {
            (StatusCode::BAD_REQUEST, "Invalid interests")
        }
    };

    tracing::warn!("Session request failed: {}", err);
    error_response(status, error, err.to_string())
}

/// POST /api/v1/sessions
async fn create_session(
    state: web::Data<AppState>,
    req: web::Json<CreateSessionRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let session = state.sessions.create(&req.name).await;
    HttpResponse::Created().json(session)
}

/// POST /api/v1/sessions/join
///
/// Request body:
/// ```json
/// { "code": "3F9A01BC", "name": "Sam" }
/// ```
async fn join_session(
    state: web::Data<AppState>,
    req: web::Json<JoinSessionRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    match state.sessions.join(&req.code, &req.name).await {
        Ok(session) => HttpResponse::Ok().json(session),
        Err(e) => session_error(e),
    }
}

/// GET /api/v1/sessions/{id}
///
/// Polled by the creator while waiting for the partner to join.
async fn get_session(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match state.sessions.get(path.into_inner()).await {
        Ok(session) => HttpResponse::Ok().json(session),
        Err(e) => session_error(e),
    }
}

/// PUT /api/v1/sessions/{id}/interests
///
/// Request body:
/// ```json
/// { "role": "creator", "interests": ["Sushi", "Hiking", "Coffee"] }
/// ```
async fn submit_interests(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<SubmitInterestsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    match state
        .sessions
        .submit_interests(path.into_inner(), req.role, &req.interests)
        .await
    {
        Ok(session) => HttpResponse::Ok().json(session),
        Err(e) => session_error(e),
    }
}

/// GET /api/v1/sessions/{id}/matches
async fn session_matches(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match state.sessions.matches(path.into_inner()).await {
        Ok(result) => HttpResponse::Ok().json(MatchVenuesResponse {
            venues: result.venues,
            shared_interests: result.shared_interests,
        }),
        Err(e) => session_error(e),
    }
}

/// POST /api/v1/sessions/{id}/swipes
///
/// Request body:
/// ```json
/// { "venueId": "r1", "direction": "right" }
/// ```
async fn record_swipe(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<SwipeRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    match state
        .sessions
        .record_swipe(path.into_inner(), &req.venue_id, req.direction)
        .await
    {
        Ok(saved_count) => HttpResponse::Ok().json(SwipeResponse {
            success: true,
            saved_count,
        }),
        Err(e) => session_error(e),
    }
}

/// GET /api/v1/sessions/{id}/saved
async fn saved_venues(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match state.sessions.saved_venues(path.into_inner()).await {
        Ok(venues) => HttpResponse::Ok().json(VenuesResponse {
            total: venues.len(),
            venues,
        }),
        Err(e) => session_error(e),
    }
}
