use tracing::info;

use super::advice_service::personalized_advice;
use super::phase_assembler::PhaseAssembler;
use crate::config::PlannerConfig;
use crate::models::{AthleteProfile, Plan, PlanRequest};

/// Deterministic plan source that cannot fail; the fallback of last resort.
#[derive(Debug, Clone)]
pub struct PlanGenerator {
    assembler: PhaseAssembler,
    config: PlannerConfig,
}

impl PlanGenerator {
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            assembler: PhaseAssembler::from_config(&config),
            config,
        }
    }

    pub fn assembler(&self) -> &PhaseAssembler {
        &self.assembler
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn generate(&self, profile: &AthleteProfile) -> Plan {
        let request = PlanRequest::from_profile(profile, &self.config);
        self.generate_with(profile, request)
    }

    pub fn generate_with(&self, profile: &AthleteProfile, request: PlanRequest) -> Plan {
        info!(
            sessions_per_week = request.sessions_per_week,
            include_strength = request.include_strength,
            "generating rule-based plan"
        );

        Plan {
            phases: self.assembler.assemble_all(request),
            personalized_advice: personalized_advice(profile),
        }
    }
}

impl Default for PlanGenerator {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}
