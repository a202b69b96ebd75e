use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::health::health_check;
use super::plan_generation::plan_generation_routes;
use super::progress::progress_routes;
use crate::services::{PlanGenerationService, ProgressService, ProgressStore};

#[derive(Clone)]
pub struct AppState {
    pub generation_service: PlanGenerationService,
    pub progress_service: ProgressService,
    pub store: Arc<dyn ProgressStore>,
}

impl AppState {
    pub fn new(generation_service: PlanGenerationService, store: Arc<dyn ProgressStore>) -> Self {
        let progress_service = ProgressService::new(generation_service.config());
        Self {
            generation_service,
            progress_service,
            store,
        }
    }
}

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(plan_generation_routes())
        .nest("/api/progress", progress_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
