// HTTP tests for the Date Planner API

use actix_web::{http::StatusCode, test, web, App};
use date_planner::catalog::{InterestCatalog, VenueCatalog};
use date_planner::routes::{configure_routes, AppState};
use date_planner::services::SessionLimits;
use serde_json::{json, Value};

fn app_state() -> AppState {
    AppState::new(
        VenueCatalog::san_francisco(),
        InterestCatalog::default(),
        SessionLimits::default(),
    )
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_health() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_generate_plans() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/plans/generate")
        .set_json(json!({ "budget": 2, "vibe": 3, "occasion": "first-date" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let plans = body["plans"].as_array().unwrap();
    assert_eq!(plans.len(), 3);

    for plan in plans {
        assert!(plan["id"].as_str().unwrap().starts_with("plan-"));
        assert_eq!(plan["restaurant"]["type"], "restaurant");
        assert_eq!(plan["activity"]["type"], "activity");
        assert_eq!(plan["dessert"]["type"], "dessert");
        assert_eq!(plan["totalTime"], "~3 hours");
        assert!(plan["totalCost"].as_str().unwrap().ends_with("per person"));
    }
}

#[actix_web::test]
async fn test_generate_plans_rejects_bad_input() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/plans/generate")
        .set_json(json!({ "budget": 5, "vibe": 3, "occasion": "casual" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/v1/plans/generate")
        .set_json(json!({ "budget": 2, "vibe": 3, "occasion": "wedding" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_match_venues() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/venues")
        .set_json(json!({
            "interestsA": ["Italian", "Hiking"],
            "interestsB": ["Italian", "Dancing"]
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["sharedInterests"], json!(["Italian"]));

    let venues = body["venues"].as_array().unwrap();
    assert!(!venues.is_empty());

    let top = &venues[0];
    assert!(top["matchScore"].as_f64().unwrap() > 2.0);
    assert!(top["id"].is_string());
}

#[actix_web::test]
async fn test_list_interests_grouped() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/interests").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let groups = body["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 6);
    for group in groups {
        assert!(!group["interests"].as_array().unwrap().is_empty());
    }
}

#[actix_web::test]
async fn test_list_venues() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/venues").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total"].as_u64().unwrap() as usize, body["venues"].as_array().unwrap().len());
}

#[actix_web::test]
async fn test_session_flow() {
    let app = init_app!();

    // Create
    let req = test::TestRequest::post()
        .uri("/api/v1/sessions")
        .set_json(json!({ "name": "Alex" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let session: Value = test::read_body_json(resp).await;
    let id = session["id"].as_str().unwrap().to_string();
    let code = session["code"].as_str().unwrap().to_string();
    assert_eq!(session["status"], "waiting");

    // Join with a lowercased code
    let req = test::TestRequest::post()
        .uri("/api/v1/sessions/join")
        .set_json(json!({ "code": code.to_lowercase(), "name": "Sam" }))
        .to_request();
    let joined: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(joined["status"], "active");
    assert_eq!(joined["partnerName"], "Sam");

    // A second join is a conflict
    let req = test::TestRequest::post()
        .uri("/api/v1/sessions/join")
        .set_json(json!({ "code": code, "name": "Jo" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // Too few interests
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/sessions/{}/interests", id))
        .set_json(json!({ "role": "creator", "interests": ["Hiking"] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    for (role, interests) in [
        ("creator", json!(["Hiking", "Coffee", "Museums"])),
        ("partner", json!(["Hiking", "Pizza", "Live Music"])),
    ] {
        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/sessions/{}/interests", id))
            .set_json(json!({ "role": role, "interests": interests }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/sessions/{}/matches", id))
        .to_request();
    let deck: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(deck["sharedInterests"], json!(["Hiking"]));
    let top = deck["venues"][0]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/sessions/{}/swipes", id))
        .set_json(json!({ "venueId": top, "direction": "right" }))
        .to_request();
    let swipe: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(swipe["savedCount"], 1);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/sessions/{}/swipes", id))
        .set_json(json!({ "venueId": "nope", "direction": "right" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/sessions/{}/saved", id))
        .to_request();
    let saved: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(saved["total"], 1);
    assert_eq!(saved["venues"][0]["id"], top.as_str());
}

#[actix_web::test]
async fn test_join_with_malformed_code() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/sessions/join")
        .set_json(json!({ "code": "!!", "name": "Sam" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid invite code");
    assert_eq!(body["statusCode"], 400);
    assert!(body.get("status_code").is_none());

    // Well-formed but unknown
    let req = test::TestRequest::post()
        .uri("/api/v1/sessions/join")
        .set_json(json!({ "code": "ABCD1234", "name": "Sam" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_unknown_session() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/sessions/{}", uuid::Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
