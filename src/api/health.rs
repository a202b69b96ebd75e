use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use super::routes::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "aiConfigured": state.generation_service.has_ai_source(),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now(),
    }))
}
