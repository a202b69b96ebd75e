use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

use super::ai_plan_service::PlanSource;
use super::plan_generator::PlanGenerator;
use super::plan_validation_service::{PlanValidator, ValidationOutcome};
use crate::config::PlannerConfig;
use crate::models::{AthleteProfile, Plan, PlanRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanOrigin {
    Ai,
    /// AI plan with some phases rebuilt by the rule-based assembler.
    AiRepaired,
    RuleBased,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPlan {
    pub plan: Plan,
    pub generated: DateTime<Utc>,
    pub source: PlanOrigin,
    pub ai_generated: bool,
    pub repaired_phases: Vec<usize>,
}

/// Produces plans, preferring the AI source and degrading silently to the
/// rule-based generator.
#[derive(Clone)]
pub struct PlanGenerationService {
    generator: PlanGenerator,
    validator: PlanValidator,
    source: Option<Arc<dyn PlanSource>>,
}

impl PlanGenerationService {
    pub fn new(config: PlannerConfig) -> Self {
        let generator = PlanGenerator::new(config);
        Self {
            validator: PlanValidator::new(generator.clone()),
            generator,
            source: None,
        }
    }

    pub fn with_source(mut self, source: Arc<dyn PlanSource>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn has_ai_source(&self) -> bool {
        self.source.is_some()
    }

    pub fn config(&self) -> &PlannerConfig {
        self.generator.config()
    }

    pub fn request_for(&self, profile: &AthleteProfile) -> PlanRequest {
        PlanRequest::from_profile(profile, self.generator.config())
    }

    pub async fn generate(&self, profile: &AthleteProfile) -> GeneratedPlan {
        let request = self.request_for(profile);
        info!(
            name = %profile.name,
            sessions_per_week = request.sessions_per_week,
            include_strength = request.include_strength,
            "plan requested"
        );

        let (plan, source, repaired_phases) = match &self.source {
            Some(source) => {
                info!("attempting AI generation");
                match source.fetch_plan(profile, request).await {
                    Ok(candidate) => {
                        let outcome = self.validator.validate_with_profile(&candidate, request, profile);
                        let origin = match (outcome.regenerated, outcome.repaired_phases.is_empty()) {
                            (true, _) => PlanOrigin::RuleBased,
                            (false, true) => PlanOrigin::Ai,
                            (false, false) => PlanOrigin::AiRepaired,
                        };
                        (outcome.plan, origin, outcome.repaired_phases)
                    }
                    Err(error) => {
                        warn!(%error, "AI generation failed, falling back to rule-based plan");
                        (self.generator.generate_with(profile, request), PlanOrigin::RuleBased, Vec::new())
                    }
                }
            }
            None => {
                info!("no AI source configured, using rule-based plan");
                (self.generator.generate_with(profile, request), PlanOrigin::RuleBased, Vec::new())
            }
        };

        info!(
            phases = plan.phases.len(),
            first_phase_workouts = plan.phases.first().map(|p| p.workouts.len()).unwrap_or(0),
            source = ?source,
            "plan ready"
        );

        GeneratedPlan {
            plan,
            generated: Utc::now(),
            ai_generated: source != PlanOrigin::RuleBased,
            source,
            repaired_phases,
        }
    }

    pub fn validate(&self, candidate: &Value, request: PlanRequest) -> ValidationOutcome {
        self.validator
            .validate_with_profile(candidate, request, &AthleteProfile::default())
    }
}
