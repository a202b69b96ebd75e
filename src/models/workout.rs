use serde::{Deserialize, Serialize};

use super::weekday::Weekday;

/// A single training session placed on a day of the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    /// Open category label ("Long Run", "Tempo", "Strength", ...).
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    pub day: Weekday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutCategory {
    Run,
    Strength,
    Rest,
}

impl Workout {
    pub fn new(kind: impl Into<String>, description: impl Into<String>, day: Weekday) -> Self {
        Self {
            kind: kind.into(),
            description: description.into(),
            day,
        }
    }

    pub fn category(&self) -> WorkoutCategory {
        let kind = self.kind.trim().to_lowercase();
        if kind.starts_with("strength") || kind.starts_with("kracht") {
            WorkoutCategory::Strength
        } else if kind == "rest" || kind == "rust" || kind == "rest day" {
            WorkoutCategory::Rest
        } else {
            WorkoutCategory::Run
        }
    }

    pub fn is_run(&self) -> bool {
        self.category() == WorkoutCategory::Run
    }

    pub fn is_strength(&self) -> bool {
        self.category() == WorkoutCategory::Strength
    }

    pub fn is_rest(&self) -> bool {
        self.category() == WorkoutCategory::Rest
    }
}

/// Static description of a catalog workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutTemplate {
    pub kind: &'static str,
    pub description: &'static str,
    /// Preferred day when the template is selected.
    pub day: Weekday,
}

impl WorkoutTemplate {
    pub const fn new(kind: &'static str, description: &'static str, day: Weekday) -> Self {
        Self {
            kind,
            description,
            day,
        }
    }

    pub fn to_workout(&self) -> Workout {
        Workout::new(self.kind, self.description, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_classification() {
        assert_eq!(
            Workout::new("Strength", "", Weekday::Monday).category(),
            WorkoutCategory::Strength
        );
        assert_eq!(
            Workout::new("Kracht", "", Weekday::Monday).category(),
            WorkoutCategory::Strength
        );
        assert_eq!(Workout::new("Rust", "", Weekday::Monday).category(), WorkoutCategory::Rest);
        assert_eq!(Workout::new("REST", "", Weekday::Monday).category(), WorkoutCategory::Rest);
        assert_eq!(Workout::new("Tempo", "", Weekday::Monday).category(), WorkoutCategory::Run);
        assert_eq!(
            Workout::new("Hill Sprints", "", Weekday::Monday).category(),
            WorkoutCategory::Run
        );
    }

    #[test]
    fn test_kind_serialises_as_type() {
        let workout = Workout::new("Easy Run", "30' easy", Weekday::Tuesday);
        let value = serde_json::to_value(&workout).unwrap();
        assert_eq!(value["type"], "Easy Run");
        assert_eq!(value["day"], "Tuesday");
        assert!(value.get("kind").is_none());
    }
}
