use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::workout::Workout;

/// Number of phases in every plan.
pub const PHASE_COUNT: usize = 5;

/// The five progressive blocks of the programme, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingPhase {
    BaseBuilding,
    Volume,
    PeakVolume,
    RaceSpecific,
    Taper,
}

impl TrainingPhase {
    pub const ALL: [TrainingPhase; PHASE_COUNT] = [
        TrainingPhase::BaseBuilding,
        TrainingPhase::Volume,
        TrainingPhase::PeakVolume,
        TrainingPhase::RaceSpecific,
        TrainingPhase::Taper,
    ];

    /// Zero-based position in `Plan::phases`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// One-based phase number.
    pub fn number(self) -> usize {
        self.index() + 1
    }

    pub fn weeks(self) -> RangeInclusive<u32> {
        match self {
            TrainingPhase::BaseBuilding => 1..=4,
            TrainingPhase::Volume => 5..=12,
            TrainingPhase::PeakVolume => 13..=28,
            TrainingPhase::RaceSpecific => 29..=42,
            TrainingPhase::Taper => 43..=45,
        }
    }

    pub fn for_week(week: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|phase| phase.weeks().contains(&week))
    }
}

/// One block of the plan; the same week template repeats for every week in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub weeks: Vec<u32>,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "weeklyMinutes", alias = "weeklyVolumeTarget", default)]
    pub weekly_volume_target: String,
    #[serde(default)]
    pub workouts: Vec<Workout>,
}

impl Phase {
    pub fn contains_week(&self, week: u32) -> bool {
        self.weeks.contains(&week)
    }

    /// Workouts that count towards progress.
    pub fn training_workouts(&self) -> impl Iterator<Item = &Workout> {
        self.workouts.iter().filter(|w| !w.is_rest())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub phases: Vec<Phase>,
    #[serde(rename = "personalizedAdvice", default)]
    pub personalized_advice: String,
}

impl Plan {
    /// Looks the week up in the phases' own week lists, falling back to the
    /// phase in the slot that normally covers it.
    pub fn phase_for_week(&self, week: u32) -> Option<&Phase> {
        self.phases
            .iter()
            .find(|phase| phase.contains_week(week))
            .or_else(|| {
                TrainingPhase::for_week(week).and_then(|slot| self.phases.get(slot.index()))
            })
    }

    pub fn is_structurally_valid(&self) -> bool {
        self.phases.len() == PHASE_COUNT && self.phases.iter().all(|p| !p.workouts.is_empty())
    }
}
