use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::config::PlannerConfig;

/// Athlete data collected by the onboarding form.
///
/// Form inputs arrive as a mix of numbers and strings, so numeric fields are
/// parsed leniently: numeric strings are accepted and blanks become `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AthleteProfile {
    pub name: String,
    #[serde(deserialize_with = "lenient_u32")]
    pub age: Option<u32>,
    pub gender: String,
    /// Kilograms.
    #[serde(deserialize_with = "lenient_f64")]
    pub weight: Option<f64>,
    /// Centimetres.
    #[serde(deserialize_with = "lenient_f64")]
    pub height: Option<f64>,
    pub running_years: String,
    pub experience: ExperienceLevel,
    #[serde(deserialize_with = "lenient_f64")]
    pub current_km_per_week: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub longest_run: Option<f64>,
    #[serde(deserialize_with = "lenient_u32")]
    pub previous_marathons: Option<u32>,
    pub previous_marathon_time: String,
    pub injuries: String,
    pub medications: String,
    #[serde(deserialize_with = "lenient_u32")]
    pub sessions_per_week: Option<u32>,
    #[serde(deserialize_with = "lenient_u32")]
    pub time_per_session: Option<u32>,
    pub goal: RaceGoal,
    pub target_time: String,
    pub strength_training: bool,
    pub cross_training: Vec<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub sleep_hours: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RaceGoal {
    Time,
    #[default]
    #[serde(other)]
    Finish,
}

impl AthleteProfile {
    /// Body mass index, when both weight and height are known.
    pub fn bmi(&self) -> Option<f64> {
        match (self.weight, self.height) {
            (Some(weight), Some(height)) if weight > 0.0 && height > 0.0 => {
                let metres = height / 100.0;
                Some(weight / (metres * metres))
            }
            _ => None,
        }
    }

    pub fn has_injuries(&self) -> bool {
        !self.injuries.trim().is_empty()
    }

    pub fn goal_label(&self) -> String {
        match self.goal {
            RaceGoal::Time if !self.target_time.trim().is_empty() => self.target_time.clone(),
            _ => "Finish".to_string(),
        }
    }
}

/// Inputs of the rule-based builder derived from a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub sessions_per_week: u32,
    pub include_strength: bool,
}

impl PlanRequest {
    pub fn new(sessions_per_week: u32, include_strength: bool) -> Self {
        Self {
            sessions_per_week,
            include_strength,
        }
    }

    /// Clamps the requested session count into the supported range.
    pub fn from_profile(profile: &AthleteProfile, config: &PlannerConfig) -> Self {
        let sessions = profile
            .sessions_per_week
            .filter(|&n| n > 0)
            .unwrap_or(config.default_sessions_per_week)
            .clamp(config.min_sessions_per_week, config.max_sessions_per_week);

        Self::new(sessions, profile.strength_training)
    }
}

fn lenient_number(value: Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', ".").parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(lenient_number(Value::deserialize(deserializer)?))
}

fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    Ok(lenient_number(Value::deserialize(deserializer)?)
        .filter(|n| *n >= 0.0)
        .map(|n| n.trunc().min(u32::MAX as f64) as u32))
}
