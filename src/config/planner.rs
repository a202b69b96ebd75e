use anyhow::{bail, Result};
use chrono::NaiveDate;
use std::env;

/// Tunables of the rule-based planner and the training calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Upper bound on run sessions during the taper phase.
    pub taper_session_ceiling: u32,
    pub min_sessions_per_week: u32,
    pub max_sessions_per_week: u32,
    pub default_sessions_per_week: u32,
    /// Saturday that opens week 1.
    pub program_start_date: NaiveDate,
    pub race_date: NaiveDate,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            taper_session_ceiling: 4,
            min_sessions_per_week: 3,
            max_sessions_per_week: 6,
            default_sessions_per_week: 4,
            program_start_date: NaiveDate::from_ymd_opt(2025, 11, 15).expect("valid start date"),
            race_date: NaiveDate::from_ymd_opt(2026, 9, 27).expect("valid race date"),
        }
    }
}

impl PlannerConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let config = PlannerConfig {
            taper_session_ceiling: parse_or("TAPER_SESSION_CEILING", defaults.taper_session_ceiling),
            min_sessions_per_week: parse_or("MIN_SESSIONS_PER_WEEK", defaults.min_sessions_per_week),
            max_sessions_per_week: parse_or("MAX_SESSIONS_PER_WEEK", defaults.max_sessions_per_week),
            default_sessions_per_week: parse_or(
                "DEFAULT_SESSIONS_PER_WEEK",
                defaults.default_sessions_per_week,
            ),
            program_start_date: date_or("PROGRAM_START_DATE", defaults.program_start_date),
            race_date: date_or("RACE_DATE", defaults.race_date),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.taper_session_ceiling == 0 {
            bail!("TAPER_SESSION_CEILING must be at least 1");
        }
        if self.min_sessions_per_week == 0 || self.min_sessions_per_week > self.max_sessions_per_week {
            bail!(
                "invalid session range {}..={}",
                self.min_sessions_per_week,
                self.max_sessions_per_week
            );
        }
        if !(self.min_sessions_per_week..=self.max_sessions_per_week)
            .contains(&self.default_sessions_per_week)
        {
            bail!(
                "DEFAULT_SESSIONS_PER_WEEK {} outside {}..={}",
                self.default_sessions_per_week,
                self.min_sessions_per_week,
                self.max_sessions_per_week
            );
        }
        Ok(())
    }
}

fn parse_or(key: &str, default: u32) -> u32 {
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

fn date_or(key: &str, default: NaiveDate) -> NaiveDate {
    env::var(key)
        .ok()
        .and_then(|value| NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok())
        .unwrap_or(default)
}
