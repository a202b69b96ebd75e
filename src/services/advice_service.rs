use crate::models::{AthleteProfile, ExperienceLevel, RaceGoal};

const DEFAULT_ADVICE: &str = "Listen to your body and enjoy the process";

/// Rule-based coaching advice derived from the athlete profile.
pub fn personalized_advice(profile: &AthleteProfile) -> String {
    let mut advice: Vec<String> = Vec::new();

    if profile.bmi().is_some_and(|bmi| bmi > 30.0) {
        advice.push("Focus on weight management through healthy nutrition".to_string());
    }
    if profile.age.is_some_and(|age| age > 50) {
        advice.push("Put extra focus on recovery and take rest days seriously".to_string());
    }
    if profile.experience == ExperienceLevel::Beginner {
        advice.push("Build up gradually: consistency beats speed".to_string());
    }
    if profile.has_injuries() {
        advice.push("Pay attention to injury prevention and always warm up properly".to_string());
    }
    if profile.goal == RaceGoal::Time {
        let target = profile.target_time.trim();
        if target.is_empty() {
            advice.push("For your time goal: focus on tempo runs in phases 3 and 4".to_string());
        } else {
            advice.push(format!(
                "For your {} goal: focus on tempo runs in phases 3 and 4",
                target
            ));
        }
    }
    if profile.strength_training {
        advice.push("Strength training helps prevent injuries".to_string());
    }

    if advice.is_empty() {
        advice.push(DEFAULT_ADVICE.to_string());
    }

    format!("For {}: {}.", addressee(profile), advice.join(". "))
}

/// The single most relevant tip for the dashboard.
pub fn dashboard_tip(profile: &AthleteProfile) -> &'static str {
    if profile.age.is_some_and(|age| age > 50) {
        "Extra focus on recovery and mobility - take rest seriously!"
    } else if profile.experience == ExperienceLevel::Beginner {
        "Start easy and build up gradually - consistency matters more than speed!"
    } else if profile.has_injuries() {
        "Pay extra attention to injury prevention - warm up and cool down well!"
    } else {
        "Listen to your body and enjoy the process!"
    }
}

fn addressee(profile: &AthleteProfile) -> &str {
    match profile.name.trim() {
        "" => "you",
        name => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_advice() {
        let advice = personalized_advice(&AthleteProfile::default());
        assert_eq!(advice, "For you: Listen to your body and enjoy the process.");
    }

    #[test]
    fn test_rules_are_applied_in_order() {
        let profile = AthleteProfile {
            name: "Alex".to_string(),
            age: Some(55),
            weight: Some(110.0),
            height: Some(180.0),
            experience: ExperienceLevel::Beginner,
            injuries: "knee".to_string(),
            goal: RaceGoal::Time,
            target_time: "4:30".to_string(),
            strength_training: true,
            ..Default::default()
        };

        let advice = personalized_advice(&profile);
        assert!(advice.starts_with("For Alex: Focus on weight management"));

        let positions: Vec<usize> = [
            "weight management",
            "recovery",
            "consistency",
            "injury prevention",
            "4:30 goal",
            "Strength training",
        ]
        .iter()
        .map(|needle| advice.find(needle).unwrap())
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(advice.ends_with('.'));
    }

    #[test]
    fn test_age_boundary() {
        let fifty = AthleteProfile {
            age: Some(50),
            ..Default::default()
        };
        assert!(!personalized_advice(&fifty).contains("recovery"));
    }

    #[test]
    fn test_dashboard_tip_priority() {
        let profile = AthleteProfile {
            age: Some(60),
            experience: ExperienceLevel::Beginner,
            ..Default::default()
        };
        assert!(dashboard_tip(&profile).contains("recovery"));

        let beginner = AthleteProfile {
            experience: ExperienceLevel::Beginner,
            injuries: "shin splints".to_string(),
            ..Default::default()
        };
        assert!(dashboard_tip(&beginner).contains("consistency"));

        let injured = AthleteProfile {
            injuries: "shin splints".to_string(),
            ..Default::default()
        };
        assert!(dashboard_tip(&injured).contains("injury"));
    }
}
