use std::sync::Arc;

use marathon_trainer::api::{create_routes, AppState};
use marathon_trainer::config::{run_migrations, AiConfig, AppConfig, DatabaseConfig, PlannerConfig};
use marathon_trainer::services::{
    InMemoryProgressStore, MessagesApiClient, PgProgressStore, PlanGenerationService, ProgressStore,
};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app_config = AppConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&app_config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(app_config.is_development())
        .with_ansi(!app_config.is_production())
        .init();

    let planner_config = PlannerConfig::from_env()?;
    let ai_config = AiConfig::from_env()?;

    let mut generation_service = PlanGenerationService::new(planner_config);
    if ai_config.is_enabled() {
        let client = MessagesApiClient::new(&ai_config)?;
        generation_service = generation_service.with_source(Arc::new(client));
        info!(model = %ai_config.model, "AI plan generation enabled");
    } else {
        warn!("AI_API_KEY not set, serving rule-based plans only");
    }

    let store: Arc<dyn ProgressStore> = match DatabaseConfig::from_env()? {
        Some(db_config) => {
            let pool = db_config.create_pool().await?;
            run_migrations(&pool).await?;
            info!("progress stored in Postgres");
            Arc::new(PgProgressStore::new(pool))
        }
        None => {
            warn!("DATABASE_URL not set, progress is kept in memory");
            Arc::new(InMemoryProgressStore::new())
        }
    };

    let app = create_routes(AppState::new(generation_service, store));

    let address = app_config.server_address();
    let listener = TcpListener::bind(&address).await?;
    info!(environment = %app_config.environment, "marathon trainer listening on http://{}", address);
    info!("Health check available at http://{}/health", address);

    axum::serve(listener, app).await?;

    Ok(())
}
