use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;

use crate::core::PlanCriteria;
use crate::models::{GeneratePlansRequest, GeneratePlansResponse};
use crate::routes::{error_response, validation_failed, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/plans/generate", web::post().to(generate_plans));
}

/// Generate date plans endpoint
///
/// POST /api/v1/plans/generate
///
/// Request body:
/// ```json
/// {
///   "budget": 2,
///   "vibe": 3,
///   "occasion": "first-date",
///   "preferences": "no seafood"
/// }
/// ```
///
/// Every call reshuffles, so identical requests return different plans.
async fn generate_plans(
    state: web::Data<AppState>,
    req: web::Json<GeneratePlansRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for generate_plans request: {:?}", errors);
        return validation_failed(errors);
    }

    let req = req.into_inner();
    let criteria = PlanCriteria {
        budget: req.budget,
        vibe: req.vibe,
        occasion: req.occasion,
        preferences: req.preferences,
    };

    match state.planner.generate(&criteria) {
        Ok(plans) => {
            tracing::info!(
                "Generated {} plans (budget {}, vibe {}, occasion {})",
                plans.len(),
                criteria.budget,
                criteria.vibe,
                criteria.occasion.as_str()
            );
            HttpResponse::Ok().json(GeneratePlansResponse { plans })
        }
        Err(e) => error_response(StatusCode::BAD_REQUEST, "Invalid input", e.to_string()),
    }
}
