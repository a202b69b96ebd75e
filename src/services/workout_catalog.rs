//! Built-in workout templates for each phase of the programme.
//!
//! Run templates are listed in priority order: when an athlete trains fewer
//! days than a phase offers, the builder keeps the first entries.

use crate::models::{TrainingPhase, Weekday, WorkoutTemplate, PHASE_COUNT};

/// Metadata and candidate workouts of one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseBlueprint {
    pub phase: TrainingPhase,
    pub name: &'static str,
    pub description: &'static str,
    pub weekly_volume_target: &'static str,
    pub run_workouts: &'static [WorkoutTemplate],
    pub strength_workouts: &'static [WorkoutTemplate],
}

/// Immutable lookup table of phase blueprints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutCatalog {
    blueprints: [PhaseBlueprint; PHASE_COUNT],
}

impl WorkoutCatalog {
    /// Blueprints must be given in phase order.
    pub const fn new(blueprints: [PhaseBlueprint; PHASE_COUNT]) -> Self {
        Self { blueprints }
    }

    pub fn standard() -> &'static WorkoutCatalog {
        &STANDARD_CATALOG
    }

    pub fn blueprint(&self, phase: TrainingPhase) -> &PhaseBlueprint {
        &self.blueprints[phase.index()]
    }

    pub fn blueprints(&self) -> &[PhaseBlueprint] {
        &self.blueprints
    }
}

use Weekday::*;

const BASE_RUNS: [WorkoutTemplate; 6] = [
    WorkoutTemplate::new("Long Run", "45-50' run-walk in zone 2. Alternate 3' jogging / 1' walking.", Sunday),
    WorkoutTemplate::new("Run-Walk", "10x (1' jog / 2' walk). Start with 5' walking.", Saturday),
    WorkoutTemplate::new("Easy Run", "30' easy jogging in zone 2. Conversational pace.", Tuesday),
    WorkoutTemplate::new("Run-Walk", "8x (2' jog / 2' walk). Comfortable pace.", Thursday),
    WorkoutTemplate::new("Strides", "25' easy + 4x 15\" strides at 85% of max speed.", Friday),
    WorkoutTemplate::new("Tempo", "35' with 15' slightly faster. Not hard!", Wednesday),
];

const BASE_STRENGTH: [WorkoutTemplate; 2] = [
    WorkoutTemplate::new("Strength", "30' core: 3x12 squats, 3x10 lunges, 3x30\" plank.", Monday),
    WorkoutTemplate::new("Strength", "30' full body: 3x12 deadlifts, 3x10 step-ups, 3x15 rows.", Wednesday),
];

const VOLUME_RUNS: [WorkoutTemplate; 6] = [
    WorkoutTemplate::new("Long Run", "75-90' in zone 2. Start easy, practise fuelling.", Sunday),
    WorkoutTemplate::new("Easy Run", "45-60' easy in zone 2. Conversational pace.", Saturday),
    WorkoutTemplate::new("Z2 Endurance", "50' comfortable zone 2. Last 10' may be quicker.", Tuesday),
    WorkoutTemplate::new("Tempo", "45' total: 10' warm-up, 20' tempo, 15' cool-down.", Wednesday),
    WorkoutTemplate::new("Strides", "40' easy + 6x 20\" strides at 85-90% of max.", Thursday),
    WorkoutTemplate::new("Easy Run", "35' recovery run. Deliberately slow.", Friday),
];

const VOLUME_STRENGTH: [WorkoutTemplate; 2] = [
    WorkoutTemplate::new("Strength", "35' power: 3x15 squats, 3x12 deadlifts, 3x10 box jumps.", Monday),
    WorkoutTemplate::new("Strength", "35' stability: 3x12 single-leg RDL, 3x10 Bulgarian split squats.", Wednesday),
];

const PEAK_RUNS: [WorkoutTemplate; 6] = [
    WorkoutTemplate::new("Long Run", "105-120' zone 2, last 20-30' quicker. Practise race fuelling from 90'.", Sunday),
    WorkoutTemplate::new("Z2 Endurance", "60-75' comfortable zone 2. Focus on an even pace.", Saturday),
    WorkoutTemplate::new("Tempo Run", "50': 10' warm-up, 4x 5' tempo (80-85% max HR) with 2' rest, 10' cool-down.", Wednesday),
    WorkoutTemplate::new("Easy Run", "45-60' recovery run. Deliberately slow!", Tuesday),
    WorkoutTemplate::new("Progression", "60' starting in zone 2, last 15-20' building to tempo pace.", Thursday),
    WorkoutTemplate::new("Strides", "50' zone 2 + 8x 20\" strides. Easy running, sharp strides.", Friday),
];

const PEAK_STRENGTH: [WorkoutTemplate; 2] = [
    WorkoutTemplate::new("Strength", "35' heavy: 4x10 squats, 4x8 deadlifts, 3x10 lunges.", Monday),
    WorkoutTemplate::new("Strength", "35' core: 3x12 single-leg RDL, 3x60\" plank variations.", Thursday),
];

const RACE_SPECIFIC_RUNS: [WorkoutTemplate; 6] = [
    WorkoutTemplate::new("Long Run", "2h45-3h15, the key session: first 2h zone 2, last 30-45' at marathon pace.", Sunday),
    WorkoutTemplate::new("Z2 Endurance", "60-75' zone 2, second half progressive (not marathon pace).", Saturday),
    WorkoutTemplate::new("Marathon Pace", "60-75': 15' warm-up, 2-3x 15-20' marathon pace with 5' rest, 10' cool-down.", Thursday),
    WorkoutTemplate::new("Tempo", "55': 10' warm-up, 3x 10' tempo with 3' rest, 10' cool-down.", Wednesday),
    WorkoutTemplate::new("Z2 + Strides", "45-60' zone 2 + 6-8x 20\" strides. Sharp but relaxed.", Friday),
    WorkoutTemplate::new("Easy Run", "30-40' recovery run. Focus on form and relaxation.", Tuesday),
];

const RACE_SPECIFIC_STRENGTH: [WorkoutTemplate; 2] = [
    WorkoutTemplate::new("Strength", "30' maintenance, light weights: 3x12 goblet squats, 3x10 RDL.", Monday),
    WorkoutTemplate::new("Strength", "25' core: 3x45\" planks, 3x20 bicycle crunches, 3x15 leg raises.", Wednesday),
];

const TAPER_RUNS: [WorkoutTemplate; 5] = [
    WorkoutTemplate::new("Race Day", "Marathon day! First half controlled, second half by feel. Enjoy it!", Sunday),
    WorkoutTemplate::new("Easy Run", "30-40' relaxed zone 2. Much lighter than usual, bank the energy.", Tuesday),
    WorkoutTemplate::new("Marathon Pace", "40': 10' warm-up, 3x 5' marathon pace (should feel easy) with 2' rest, 10' cool-down.", Thursday),
    WorkoutTemplate::new("Shakeout", "20-30' very light + 4-6x 15\" strides. Last run before the race.", Saturday),
    WorkoutTemplate::new("Easy Run", "25' very light jogging. Focus on how your legs feel.", Wednesday),
];

const TAPER_STRENGTH: [WorkoutTemplate; 1] = [WorkoutTemplate::new(
    "Strength",
    "20' light: 2x10 squats, 2x10 lunges, 2x30\" planks. No heavy weights!",
    Monday,
)];

static STANDARD_CATALOG: WorkoutCatalog = WorkoutCatalog::new([
    PhaseBlueprint {
        phase: TrainingPhase::BaseBuilding,
        name: "Phase 1 - Base Building",
        description: "Build the habit with run-walk sessions and basic conditioning",
        weekly_volume_target: "120-180'",
        run_workouts: &BASE_RUNS,
        strength_workouts: &BASE_STRENGTH,
    },
    PhaseBlueprint {
        phase: TrainingPhase::Volume,
        name: "Phase 2 - Volume",
        description: "Build towards 25-35 km per week",
        weekly_volume_target: "200-260'",
        run_workouts: &VOLUME_RUNS,
        strength_workouts: &VOLUME_STRENGTH,
    },
    PhaseBlueprint {
        phase: TrainingPhase::PeakVolume,
        name: "Phase 3 - Peak Volume",
        description: "Build towards 35-45 km per week with more structure",
        weekly_volume_target: "240-300'",
        run_workouts: &PEAK_RUNS,
        strength_workouts: &PEAK_STRENGTH,
    },
    PhaseBlueprint {
        phase: TrainingPhase::RaceSpecific,
        name: "Phase 4 - Race Specific",
        description: "Integrate marathon pace at 45-60 km per week",
        weekly_volume_target: "280-340'",
        run_workouts: &RACE_SPECIFIC_RUNS,
        strength_workouts: &RACE_SPECIFIC_STRENGTH,
    },
    PhaseBlueprint {
        phase: TrainingPhase::Taper,
        name: "Phase 5 - Taper",
        description: "Reduce volume and arrive fresh at the start line",
        weekly_volume_target: "Decreasing towards race day",
        run_workouts: &TAPER_RUNS,
        strength_workouts: &TAPER_STRENGTH,
    },
]);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_blueprints_are_in_phase_order() {
        let catalog = WorkoutCatalog::standard();
        for (index, blueprint) in catalog.blueprints().iter().enumerate() {
            assert_eq!(blueprint.phase.index(), index);
            assert_eq!(catalog.blueprint(blueprint.phase), blueprint);
        }
    }

    #[test]
    fn test_run_templates_use_distinct_days() {
        for blueprint in WorkoutCatalog::standard().blueprints() {
            let days: HashSet<_> = blueprint.run_workouts.iter().map(|w| w.day).collect();
            assert_eq!(days.len(), blueprint.run_workouts.len(), "{}", blueprint.name);
            assert!(!blueprint.strength_workouts.is_empty());
        }
    }

    #[test]
    fn test_long_run_has_top_priority() {
        for blueprint in WorkoutCatalog::standard().blueprints() {
            assert_eq!(blueprint.run_workouts[0].day, Weekday::Sunday);
        }
    }

    #[test]
    fn test_phase_one_offers_six_runs() {
        let catalog = WorkoutCatalog::standard();
        assert_eq!(catalog.blueprint(TrainingPhase::BaseBuilding).run_workouts.len(), 6);
        assert_eq!(catalog.blueprint(TrainingPhase::Taper).run_workouts.len(), 5);
    }
}
