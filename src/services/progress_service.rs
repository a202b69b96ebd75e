use chrono::{NaiveDate, Utc};
use thiserror::Error;
use tracing::debug;

use super::advice_service::dashboard_tip;
use crate::config::PlannerConfig;
use crate::models::{
    workout_key, Phase, ProgressSummary, TrainingCalendar, TrainingProgress, WeekProgress,
    Weekday, PROGRAM_WEEKS,
};

/// Denominator of the overall progress percentage: 45 weeks of 6 sessions.
pub const PROGRESS_TARGET_WORKOUTS: usize = PROGRAM_WEEKS as usize * 6;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProgressError {
    #[error("week {0} is outside the programme (1-45)")]
    WeekOutOfRange(u32),
    #[error("no training plan has been generated yet")]
    NoPlan,
    #[error("no phase covers week {0}")]
    NoPhase(u32),
    #[error("no workout scheduled on {day} in week {week}")]
    NoWorkout { week: u32, day: Weekday },
}

/// Dashboard bookkeeping over a stored plan.
#[derive(Debug, Clone, Copy)]
pub struct ProgressService {
    calendar: TrainingCalendar,
    race_date: NaiveDate,
}

impl ProgressService {
    pub fn new(config: &PlannerConfig) -> Self {
        Self {
            calendar: TrainingCalendar::new(config.program_start_date),
            race_date: config.race_date,
        }
    }

    /// Flips completion of one workout; returns whether it is now completed.
    pub fn toggle_workout(
        &self,
        progress: &mut TrainingProgress,
        week: u32,
        day: Weekday,
    ) -> Result<bool, ProgressError> {
        let phase = phase_for_week(progress, week)?;
        if !phase.training_workouts().any(|w| w.day == day) {
            return Err(ProgressError::NoWorkout { week, day });
        }

        let key = workout_key(week, day);
        let completed = if progress.completed_workouts.remove(&key) {
            false
        } else {
            progress.completed_workouts.insert(key);
            true
        };
        progress.updated_at = Utc::now();

        debug!(week, %day, completed, "toggled workout");
        Ok(completed)
    }

    /// Marks every workout of `week` done and advances the current week when
    /// `week` is the current one. Returns the number of newly completed workouts.
    pub fn complete_week(
        &self,
        progress: &mut TrainingProgress,
        week: u32,
    ) -> Result<usize, ProgressError> {
        let keys: Vec<String> = phase_for_week(progress, week)?
            .training_workouts()
            .map(|w| workout_key(week, w.day))
            .collect();

        let added = keys
            .into_iter()
            .filter(|key| progress.completed_workouts.insert(key.clone()))
            .count();

        if week == progress.current_week {
            progress.current_week = (week + 1).min(PROGRAM_WEEKS);
        }
        progress.updated_at = Utc::now();

        debug!(week, added, current_week = progress.current_week, "completed week");
        Ok(added)
    }

    pub fn week_progress(
        &self,
        progress: &TrainingProgress,
        week: u32,
    ) -> Result<WeekProgress, ProgressError> {
        let phase = phase_for_week(progress, week)?;
        let total = phase.training_workouts().count();
        let completed = phase
            .training_workouts()
            .filter(|w| progress.completed_workouts.contains(&workout_key(week, w.day)))
            .count();

        Ok(WeekProgress {
            week,
            phase_name: phase.name.clone(),
            completed,
            total,
            percent: percentage(completed, total),
            starts_on: self.calendar.date_of(week, Weekday::Saturday),
        })
    }

    pub fn summary(&self, progress: &TrainingProgress, today: NaiveDate) -> ProgressSummary {
        let completed_count = progress.completed_workouts.len();
        let current_week = progress.current_week.clamp(1, PROGRAM_WEEKS);

        ProgressSummary {
            completed_count,
            progress_percent: percentage(completed_count, PROGRESS_TARGET_WORKOUTS).min(100.0),
            current_week,
            weeks_to_go: PROGRAM_WEEKS - current_week + 1,
            calendar_week: self.calendar.week_containing(today),
            days_to_race: (self.race_date - today).num_days().max(0),
            current_phase: progress
                .generated_plan
                .as_ref()
                .and_then(|plan| plan.phase_for_week(current_week))
                .map(|phase| phase.name.clone()),
            goal: progress.user_data.goal_label(),
            tip: dashboard_tip(&progress.user_data).to_string(),
        }
    }
}

fn phase_for_week(progress: &TrainingProgress, week: u32) -> Result<&Phase, ProgressError> {
    if !(1..=PROGRAM_WEEKS).contains(&week) {
        return Err(ProgressError::WeekOutOfRange(week));
    }
    progress
        .generated_plan
        .as_ref()
        .ok_or(ProgressError::NoPlan)?
        .phase_for_week(week)
        .ok_or(ProgressError::NoPhase(week))
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
