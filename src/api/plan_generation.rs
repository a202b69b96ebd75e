use axum::{extract::State, response::Json, routing::post, Router};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use super::errors::ApiError;
use super::routes::AppState;
use crate::models::AthleteProfile;
use crate::services::{GeneratedPlan, ValidationOutcome};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePlanRequest {
    #[serde(default)]
    pub user_data: AthleteProfile,
    /// When set, the plan and profile are stored as this user's progress.
    #[serde(default)]
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatePlanRequest {
    pub candidate: Value,
    #[serde(default)]
    pub sessions_per_week: Option<u32>,
    #[serde(default)]
    pub include_strength: bool,
}

pub fn plan_generation_routes() -> Router<AppState> {
    Router::new()
        .route("/api/generate-plan", post(generate_plan))
        .route("/api/validate-plan", post(validate_plan))
}

/// Generate a full 45-week plan for the submitted profile
pub async fn generate_plan(
    State(state): State<AppState>,
    Json(request): Json<GeneratePlanRequest>,
) -> Result<Json<GeneratedPlan>, ApiError> {
    let generated = state.generation_service.generate(&request.user_data).await;

    if let Some(user_id) = request.user_id {
        let mut progress = state
            .store
            .load(user_id)
            .await?
            .unwrap_or_default();
        progress.user_data = request.user_data;
        progress.generated_plan = Some(generated.plan.clone());
        progress.updated_at = generated.generated;
        state.store.save(user_id, &progress).await?;
        tracing::info!(%user_id, "stored generated plan");
    }

    Ok(Json(generated))
}

/// Repair or regenerate an externally produced plan
pub async fn validate_plan(
    State(state): State<AppState>,
    Json(request): Json<ValidatePlanRequest>,
) -> Json<ValidationOutcome> {
    let profile = AthleteProfile {
        sessions_per_week: request.sessions_per_week,
        strength_training: request.include_strength,
        ..Default::default()
    };
    let plan_request = state.generation_service.request_for(&profile);

    Json(state.generation_service.validate(&request.candidate, plan_request))
}
