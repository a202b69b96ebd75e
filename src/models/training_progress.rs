use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::athlete_profile::AthleteProfile;
use super::training_plan::Plan;
use super::weekday::Weekday;

/// Everything the dashboard persists for one athlete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingProgress {
    /// Keys of the form `"{week}-{day}"`.
    #[serde(default)]
    pub completed_workouts: BTreeSet<String>,
    #[serde(default = "first_week")]
    pub current_week: u32,
    #[serde(default)]
    pub user_data: AthleteProfile,
    #[serde(default)]
    pub generated_plan: Option<Plan>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

fn first_week() -> u32 {
    1
}

impl Default for TrainingProgress {
    fn default() -> Self {
        Self {
            completed_workouts: BTreeSet::new(),
            current_week: first_week(),
            user_data: AthleteProfile::default(),
            generated_plan: None,
            updated_at: Utc::now(),
        }
    }
}

/// Identifier of one workout occurrence in the programme.
pub fn workout_key(week: u32, day: Weekday) -> String {
    format!("{}-{}", week, day)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekProgress {
    pub week: u32,
    pub phase_name: String,
    pub completed: usize,
    pub total: usize,
    pub percent: f64,
    pub starts_on: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub completed_count: usize,
    pub progress_percent: f64,
    pub current_week: u32,
    pub weeks_to_go: u32,
    /// Programme week that contains today's date.
    pub calendar_week: u32,
    pub days_to_race: i64,
    pub current_phase: Option<String>,
    pub goal: String,
    pub tip: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutToggle {
    pub week: u32,
    pub day: Weekday,
}
