// HTTP routes and handlers

pub mod errors;
pub mod health;
pub mod plan_generation;
pub mod progress;
pub mod routes;

pub use errors::ApiError;
pub use routes::{create_routes, AppState};
