use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use marathon_trainer::api::{create_routes, AppState};
use marathon_trainer::config::PlannerConfig;
use marathon_trainer::services::{InMemoryProgressStore, PlanGenerationService};

fn create_test_app() -> Router {
    let service = PlanGenerationService::new(PlannerConfig::default());
    create_routes(AppState::new(service, Arc::new(InMemoryProgressStore::new())))
}

fn json_request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");

    match body {
        Some(body) => builder.body(Body::from(body.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let app = create_test_app();
    let (status, body) = send(&app, json_request(Method::GET, "/health", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["aiConfigured"], false);
}

#[tokio::test]
async fn test_generate_plan_endpoint() {
    let app = create_test_app();
    let request = json_request(
        Method::POST,
        "/api/generate-plan",
        Some(json!({
            "userData": {
                "name": "Sam",
                "age": "45",
                "experience": "beginner",
                "sessionsPerWeek": "4",
                "strengthTraining": true
            }
        })),
    );

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["aiGenerated"], false);
    assert_eq!(body["source"], "rule_based");

    let phases = body["plan"]["phases"].as_array().unwrap();
    assert_eq!(phases.len(), 5);
    assert_eq!(phases[0]["workouts"].as_array().unwrap().len(), 6);
    assert!(body["plan"]["personalizedAdvice"]
        .as_str()
        .unwrap()
        .starts_with("For Sam:"));
}

#[tokio::test]
async fn test_validate_plan_endpoint_regenerates() {
    let app = create_test_app();
    let request = json_request(
        Method::POST,
        "/api/validate-plan",
        Some(json!({
            "candidate": { "phases": [{ "name": "a" }, { "name": "b" }, { "name": "c" }] },
            "sessionsPerWeek": 5,
            "includeStrength": false
        })),
    );

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["regenerated"], true);
    assert_eq!(body["plan"]["phases"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_progress_flow() {
    let app = create_test_app();
    let user_id = Uuid::new_v4();
    let base = format!("/api/progress/{}", user_id);

    let (status, body) = send(&app, json_request(Method::GET, &base, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Progress not found");

    // Generating with a user id stores the plan as that user's progress.
    let (status, _) = send(
        &app,
        json_request(
            Method::POST,
            "/api/generate-plan",
            Some(json!({
                "userId": user_id,
                "userData": { "sessionsPerWeek": 4, "strengthTraining": true }
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            &format!("{}/workouts/toggle", base),
            Some(json!({ "week": 1, "day": "Sunday" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["completed"], true);
    assert_eq!(body["week"]["completed"], 1);
    assert_eq!(body["week"]["total"], 6);

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            &format!("{}/workouts/toggle", base),
            Some(json!({ "week": 1, "day": "Friday" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid workout");

    let (status, body) = send(
        &app,
        json_request(Method::POST, &format!("{}/weeks/1/complete", base), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["newlyCompleted"], 5);
    assert_eq!(body["currentWeek"], 2);

    let (status, body) = send(&app, json_request(Method::GET, &format!("{}/summary", base), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["completedCount"], 6);
    assert_eq!(body["currentWeek"], 2);
    assert_eq!(body["weeksToGo"], 44);
    assert_eq!(body["currentPhase"], "Phase 1 - Base Building");

    let (status, body) = send(&app, json_request(Method::GET, &base, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["completedWorkouts"].as_array().unwrap().len(), 6);

    let (status, _) = send(&app, json_request(Method::DELETE, &base, None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, json_request(Method::DELETE, &base, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_put_progress_validates_week() {
    let app = create_test_app();
    let uri = format!("/api/progress/{}", Uuid::new_v4());

    let (status, body) = send(
        &app,
        json_request(Method::PUT, &uri, Some(json!({ "currentWeek": 46 }))),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request");

    let (status, body) = send(
        &app,
        json_request(
            Method::PUT,
            &uri,
            Some(json!({ "currentWeek": 3, "completedWorkouts": ["1-Sunday", "2-Sunday"] })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["currentWeek"], 3);
}

#[tokio::test]
async fn test_complete_week_without_plan_conflicts() {
    let app = create_test_app();
    let uri = format!("/api/progress/{}", Uuid::new_v4());
    send(&app, json_request(Method::PUT, &uri, Some(json!({})))).await;

    let (status, body) = send(
        &app,
        json_request(Method::POST, &format!("{}/weeks/1/complete", uri), None),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "No training plan");
}
