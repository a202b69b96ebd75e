use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::advice_service::personalized_advice;
use super::plan_generator::PlanGenerator;
use super::workout_catalog::PhaseBlueprint;
use crate::models::{AthleteProfile, Phase, Plan, PlanRequest, TrainingPhase, PHASE_COUNT};

/// Shape check of an untrusted plan value.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanInspection {
    /// Five usable phases and advice.
    Valid(Plan),
    /// Five phase slots, some unusable (`None`), or the advice is missing.
    NeedsRepair {
        phases: Vec<Option<Phase>>,
        personalized_advice: Option<String>,
    },
    /// Not a plan with five phases; only regeneration helps.
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    pub plan: Plan,
    /// Zero-based indices of the phases that were rebuilt.
    pub repaired_phases: Vec<usize>,
    pub regenerated: bool,
}

/// Turns any candidate into a structurally valid plan, repairing per phase
/// where possible and regenerating otherwise. Never fails.
#[derive(Debug, Clone, Default)]
pub struct PlanValidator {
    generator: PlanGenerator,
}

impl PlanValidator {
    pub fn new(generator: PlanGenerator) -> Self {
        Self { generator }
    }

    pub fn inspect(&self, candidate: &Value) -> PlanInspection {
        let Some(raw_phases) = candidate.get("phases").and_then(Value::as_array) else {
            return PlanInspection::Invalid;
        };
        if raw_phases.len() != PHASE_COUNT {
            debug!(phase_count = raw_phases.len(), "candidate plan has wrong phase count");
            return PlanInspection::Invalid;
        }

        let phases: Vec<Option<Phase>> = raw_phases
            .iter()
            .zip(self.generator.assembler().catalog().blueprints())
            .map(|(value, blueprint)| parse_phase(value, blueprint))
            .collect();
        let personalized_advice = candidate
            .get("personalizedAdvice")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|advice| !advice.is_empty())
            .map(str::to_string);

        match (phases.iter().all(Option::is_some), personalized_advice) {
            (true, Some(advice)) => PlanInspection::Valid(Plan {
                phases: phases.into_iter().flatten().collect(),
                personalized_advice: advice,
            }),
            (_, advice) => PlanInspection::NeedsRepair {
                phases,
                personalized_advice: advice,
            },
        }
    }

    pub fn validate(&self, candidate: &Value, request: PlanRequest) -> Plan {
        self.validate_with_profile(candidate, request, &AthleteProfile::default())
            .plan
    }

    /// `profile` only feeds advice for regenerated or advice-less plans.
    pub fn validate_with_profile(
        &self,
        candidate: &Value,
        request: PlanRequest,
        profile: &AthleteProfile,
    ) -> ValidationOutcome {
        match self.inspect(candidate) {
            PlanInspection::Valid(plan) => ValidationOutcome {
                plan,
                repaired_phases: Vec::new(),
                regenerated: false,
            },
            PlanInspection::NeedsRepair {
                phases,
                personalized_advice: advice,
            } => {
                let mut repaired_phases = Vec::new();
                let phases = phases
                    .into_iter()
                    .zip(TrainingPhase::ALL)
                    .map(|(phase, slot)| {
                        phase.unwrap_or_else(|| {
                            warn!(phase = slot.number(), "phase invalid, regenerating");
                            repaired_phases.push(slot.index());
                            self.generator.assembler().assemble(slot, request)
                        })
                    })
                    .collect();

                ValidationOutcome {
                    plan: Plan {
                        phases,
                        personalized_advice: advice
                            .unwrap_or_else(|| personalized_advice(profile)),
                    },
                    repaired_phases,
                    regenerated: false,
                }
            }
            PlanInspection::Invalid => {
                warn!("candidate plan structure invalid, regenerating whole plan");
                ValidationOutcome {
                    plan: self.generator.generate_with(profile, request),
                    repaired_phases: Vec::new(),
                    regenerated: true,
                }
            }
        }
    }
}

/// A phase is usable as long as it has workouts; a blank name or missing
/// week numbers are taken from the slot's blueprint.
fn parse_phase(value: &Value, blueprint: &PhaseBlueprint) -> Option<Phase> {
    match serde_json::from_value::<Phase>(value.clone()) {
        Ok(mut phase) if !phase.workouts.is_empty() => {
            if phase.name.trim().is_empty() {
                phase.name = blueprint.name.to_string();
            }
            if phase.weeks.is_empty() {
                phase.weeks = blueprint.phase.weeks().collect();
            }
            Some(phase)
        }
        Ok(_) => None,
        Err(error) => {
            debug!(%error, "phase failed to parse");
            None
        }
    }
}
