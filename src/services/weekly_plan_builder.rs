use std::collections::HashSet;
use tracing::debug;

use crate::models::{Weekday, Workout, WorkoutTemplate};

/// Days eligible for strength work, most preferred first.
pub const STRENGTH_DAY_PREFERENCE: [Weekday; 4] = [
    Weekday::Monday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
];

pub const MAX_STRENGTH_SESSIONS: usize = 2;

const STRENGTH_KIND: &str = "Strength";
const DEFAULT_STRENGTH_DESCRIPTION: &str = "Strength training";

/// Selects and places one week of workouts.
///
/// Runs are taken from the front of `run_workouts` on their preferred days.
/// Strength sessions then fill free days from [`STRENGTH_DAY_PREFERENCE`] and
/// are dropped when none is free. Days without a workout are rest days and
/// are left out of the result, which is sorted Saturday to Friday.
pub fn build_week(
    run_workouts: &[WorkoutTemplate],
    strength_workouts: &[WorkoutTemplate],
    sessions_per_week: u32,
    include_strength: bool,
) -> Vec<Workout> {
    let mut week = Vec::with_capacity(sessions_per_week as usize + MAX_STRENGTH_SESSIONS);
    let mut used_days = HashSet::new();

    for template in run_workouts.iter().take(sessions_per_week as usize) {
        if used_days.insert(template.day) {
            week.push(template.to_workout());
        } else {
            debug!(day = %template.day, kind = template.kind, "run template day already taken, skipping");
        }
    }

    if include_strength {
        let mut strength_templates = strength_workouts.iter();
        let mut placed = 0;

        for day in STRENGTH_DAY_PREFERENCE {
            if placed >= MAX_STRENGTH_SESSIONS {
                break;
            }
            if !used_days.insert(day) {
                continue;
            }

            let workout = match strength_templates.next() {
                Some(template) => Workout::new(template.kind, template.description, day),
                None => Workout::new(STRENGTH_KIND, DEFAULT_STRENGTH_DESCRIPTION, day),
            };
            week.push(workout);
            placed += 1;
        }

        if placed < MAX_STRENGTH_SESSIONS {
            debug!(placed, "strength sessions limited by free days");
        }
    }

    week.sort_by_key(|workout| workout.day);

    debug!(
        sessions_per_week,
        include_strength,
        total = week.len(),
        days = ?week.iter().map(|w| w.day).collect::<Vec<_>>(),
        "built weekly plan"
    );

    week
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkoutCategory;
    use pretty_assertions::assert_eq;
    use Weekday::*;

    const RUNS: [WorkoutTemplate; 6] = [
        WorkoutTemplate::new("Long Run", "long", Sunday),
        WorkoutTemplate::new("Mid Long", "mid", Saturday),
        WorkoutTemplate::new("Easy Run", "easy", Tuesday),
        WorkoutTemplate::new("Intervals", "vo2", Thursday),
        WorkoutTemplate::new("Strides", "strides", Friday),
        WorkoutTemplate::new("Tempo", "tempo", Wednesday),
    ];

    const STRENGTH: [WorkoutTemplate; 2] = [
        WorkoutTemplate::new("Strength", "legs", Monday),
        WorkoutTemplate::new("Strength", "core", Wednesday),
    ];

    fn days(week: &[Workout]) -> Vec<Weekday> {
        week.iter().map(|w| w.day).collect()
    }

    #[test]
    fn test_truncates_runs_in_priority_order() {
        let week = build_week(&RUNS, &STRENGTH, 3, false);
        let kinds: Vec<_> = week.iter().map(|w| w.kind.as_str()).collect();
        assert_eq!(kinds, vec!["Mid Long", "Long Run", "Easy Run"]);
        assert_eq!(days(&week), vec![Saturday, Sunday, Tuesday]);
    }

    #[test]
    fn test_strength_fills_preferred_free_days() {
        let week = build_week(&RUNS, &STRENGTH, 4, true);
        assert_eq!(week.len(), 6);

        let strength: Vec<_> = week.iter().filter(|w| w.is_strength()).collect();
        assert_eq!(strength.len(), 2);
        assert_eq!(strength[0].day, Monday);
        assert_eq!(strength[0].description, "legs");
        assert_eq!(strength[1].day, Wednesday);
        assert_eq!(strength[1].description, "core");
    }

    #[test]
    fn test_strength_never_displaces_runs() {
        // Runs on Monday and Wednesday leave Thursday and Friday.
        let runs = [
            WorkoutTemplate::new("Long Run", "long", Sunday),
            WorkoutTemplate::new("Easy Run", "easy", Monday),
            WorkoutTemplate::new("Tempo", "tempo", Wednesday),
        ];
        let week = build_week(&runs, &STRENGTH, 3, true);

        let strength_days: Vec<_> = week.iter().filter(|w| w.is_strength()).map(|w| w.day).collect();
        assert_eq!(strength_days, vec![Thursday, Friday]);
        assert_eq!(week.iter().filter(|w| w.is_run()).count(), 3);
    }

    #[test]
    fn test_strength_dropped_when_preferred_days_taken() {
        let runs = [
            WorkoutTemplate::new("Easy", "a", Monday),
            WorkoutTemplate::new("Easy", "b", Wednesday),
            WorkoutTemplate::new("Easy", "c", Thursday),
            WorkoutTemplate::new("Easy", "d", Friday),
        ];
        let week = build_week(&runs, &STRENGTH, 4, true);
        assert_eq!(week.len(), 4);
        assert!(week.iter().all(|w| w.category() == WorkoutCategory::Run));
    }

    #[test]
    fn test_second_strength_session_without_template_uses_default() {
        let strength = [WorkoutTemplate::new("Strength", "light", Monday)];
        let week = build_week(&RUNS[..2], &strength, 2, true);

        let strength: Vec<_> = week.iter().filter(|w| w.is_strength()).collect();
        assert_eq!(strength.len(), 2);
        assert_eq!(strength[0].description, "light");
        assert_eq!(strength[1].description, DEFAULT_STRENGTH_DESCRIPTION);
        assert_eq!(strength[1].day, Wednesday);
    }

    #[test]
    fn test_session_count_beyond_catalog_is_capped() {
        let week = build_week(&RUNS, &STRENGTH, 9, false);
        assert_eq!(week.len(), RUNS.len());
    }

    #[test]
    fn test_duplicate_run_days_keep_first_template() {
        let runs = [
            WorkoutTemplate::new("Long Run", "first", Sunday),
            WorkoutTemplate::new("Recovery", "second", Sunday),
            WorkoutTemplate::new("Easy Run", "third", Tuesday),
        ];
        let week = build_week(&runs, &[], 3, false);
        assert_eq!(days(&week), vec![Sunday, Tuesday]);
        assert_eq!(week[0].description, "first");
    }

    #[test]
    fn test_output_sorted_saturday_first() {
        let week = build_week(&RUNS, &STRENGTH, 6, true);
        let mut sorted = days(&week);
        sorted.sort();
        assert_eq!(days(&week), sorted);
        assert_eq!(week.first().map(|w| w.day), Some(Saturday));
    }
}
