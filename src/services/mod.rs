// Plan generation, validation and progress services

pub mod advice_service;
pub mod ai_plan_service;
pub mod phase_assembler;
pub mod plan_generation_service;
pub mod plan_generator;
pub mod plan_validation_service;
pub mod progress_service;
pub mod progress_store;
pub mod weekly_plan_builder;
pub mod workout_catalog;

pub use advice_service::{dashboard_tip, personalized_advice};
pub use ai_plan_service::{AiPlanError, MessagesApiClient, PlanSource};
pub use phase_assembler::PhaseAssembler;
pub use plan_generation_service::{GeneratedPlan, PlanGenerationService, PlanOrigin};
pub use plan_generator::PlanGenerator;
pub use plan_validation_service::{PlanInspection, PlanValidator, ValidationOutcome};
pub use progress_service::{ProgressError, ProgressService};
pub use progress_store::{InMemoryProgressStore, PgProgressStore, ProgressStore, StoreError};
pub use weekly_plan_builder::build_week;
pub use workout_catalog::{PhaseBlueprint, WorkoutCatalog};
