use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use super::errors::ApiError;
use super::routes::AppState;
use crate::models::{ProgressSummary, TrainingProgress, WeekProgress, WorkoutToggle, PROGRAM_WEEKS};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponse {
    pub completed: bool,
    pub week: WeekProgress,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteWeekResponse {
    pub newly_completed: usize,
    pub current_week: u32,
    pub week: WeekProgress,
}

pub fn progress_routes() -> Router<AppState> {
    Router::new()
        .route("/:user_id", get(get_progress).put(put_progress).delete(delete_progress))
        .route("/:user_id/summary", get(get_summary))
        .route("/:user_id/workouts/toggle", post(toggle_workout))
        .route("/:user_id/weeks/:week/complete", post(complete_week))
}

async fn load_progress(state: &AppState, user_id: Uuid) -> Result<TrainingProgress, ApiError> {
    state
        .store
        .load(user_id)
        .await?
        .ok_or(ApiError::ProgressNotFound)
}

pub async fn get_progress(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<TrainingProgress>, ApiError> {
    Ok(Json(load_progress(&state, user_id).await?))
}

/// Replace the stored progress wholesale
pub async fn put_progress(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(mut progress): Json<TrainingProgress>,
) -> Result<Json<TrainingProgress>, ApiError> {
    if !(1..=PROGRAM_WEEKS).contains(&progress.current_week) {
        return Err(ApiError::InvalidRequest(format!(
            "currentWeek must be between 1 and {}",
            PROGRAM_WEEKS
        )));
    }
    if let Some(plan) = &progress.generated_plan {
        if !plan.is_structurally_valid() {
            return Err(ApiError::InvalidRequest(
                "generatedPlan must have five phases with workouts".to_string(),
            ));
        }
    }

    progress.updated_at = Utc::now();
    state.store.save(user_id, &progress).await?;
    Ok(Json(progress))
}

pub async fn delete_progress(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.store.delete(user_id).await? {
        tracing::info!(%user_id, "progress reset");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::ProgressNotFound)
    }
}

pub async fn toggle_workout(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(toggle): Json<WorkoutToggle>,
) -> Result<Json<ToggleResponse>, ApiError> {
    let mut progress = load_progress(&state, user_id).await?;
    let completed = state
        .progress_service
        .toggle_workout(&mut progress, toggle.week, toggle.day)?;
    let week = state.progress_service.week_progress(&progress, toggle.week)?;
    state.store.save(user_id, &progress).await?;

    Ok(Json(ToggleResponse { completed, week }))
}

pub async fn complete_week(
    State(state): State<AppState>,
    Path((user_id, week)): Path<(Uuid, u32)>,
) -> Result<Json<CompleteWeekResponse>, ApiError> {
    let mut progress = load_progress(&state, user_id).await?;
    let newly_completed = state.progress_service.complete_week(&mut progress, week)?;
    let week_progress = state.progress_service.week_progress(&progress, week)?;
    state.store.save(user_id, &progress).await?;

    Ok(Json(CompleteWeekResponse {
        newly_completed,
        current_week: progress.current_week,
        week: week_progress,
    }))
}

pub async fn get_summary(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ProgressSummary>, ApiError> {
    let progress = load_progress(&state, user_id).await?;
    let today = Utc::now().date_naive();
    Ok(Json(state.progress_service.summary(&progress, today)))
}
