use tracing::debug;

use super::weekly_plan_builder::build_week;
use super::workout_catalog::WorkoutCatalog;
use crate::config::PlannerConfig;
use crate::models::{Phase, PlanRequest, TrainingPhase};

/// Turns catalog blueprints into complete phases.
#[derive(Debug, Clone, Copy)]
pub struct PhaseAssembler {
    catalog: WorkoutCatalog,
    taper_session_ceiling: u32,
}

impl PhaseAssembler {
    pub fn new(catalog: WorkoutCatalog, taper_session_ceiling: u32) -> Self {
        Self {
            catalog,
            taper_session_ceiling,
        }
    }

    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(*WorkoutCatalog::standard(), config.taper_session_ceiling)
    }

    pub fn catalog(&self) -> &WorkoutCatalog {
        &self.catalog
    }

    pub fn assemble(&self, phase: TrainingPhase, request: PlanRequest) -> Phase {
        let blueprint = self.catalog.blueprint(phase);

        let sessions = match phase {
            TrainingPhase::Taper => request.sessions_per_week.min(self.taper_session_ceiling),
            _ => request.sessions_per_week,
        };
        if sessions != request.sessions_per_week {
            debug!(
                requested = request.sessions_per_week,
                sessions, "taper caps weekly run sessions"
            );
        }

        Phase {
            name: blueprint.name.to_string(),
            weeks: phase.weeks().collect(),
            description: blueprint.description.to_string(),
            weekly_volume_target: blueprint.weekly_volume_target.to_string(),
            workouts: build_week(
                blueprint.run_workouts,
                blueprint.strength_workouts,
                sessions,
                request.include_strength,
            ),
        }
    }

    /// All five phases in programme order.
    pub fn assemble_all(&self, request: PlanRequest) -> Vec<Phase> {
        TrainingPhase::ALL
            .into_iter()
            .map(|phase| self.assemble(phase, request))
            .collect()
    }
}

impl Default for PhaseAssembler {
    fn default() -> Self {
        Self::from_config(&PlannerConfig::default())
    }
}
