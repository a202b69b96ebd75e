// Environment-driven configuration

pub mod ai;
pub mod app;
pub mod database;
pub mod planner;

pub use ai::AiConfig;
pub use app::AppConfig;
pub use database::{run_migrations, DatabaseConfig};
pub use planner::PlannerConfig;
