use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of weeks in the full programme.
pub const PROGRAM_WEEKS: u32 = 45;

/// Day of the training week.
///
/// The training week starts on Saturday so that the Saturday/Sunday long-run
/// block sits at the front of every week. Variant order is the sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Saturday,
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Days after the Saturday that opens the training week.
    pub fn offset(self) -> u32 {
        self as u32
    }

    pub fn label(self) -> &'static str {
        match self {
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown weekday: {0}")]
pub struct UnknownWeekday(pub String);

impl FromStr for Weekday {
    type Err = UnknownWeekday;

    // Dutch labels come from older plans and AI responses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "saturday" | "sat" | "zaterdag" | "za" => Ok(Weekday::Saturday),
            "sunday" | "sun" | "zondag" | "zo" => Ok(Weekday::Sunday),
            "monday" | "mon" | "maandag" | "ma" => Ok(Weekday::Monday),
            "tuesday" | "tue" | "dinsdag" | "di" => Ok(Weekday::Tuesday),
            "wednesday" | "wed" | "woensdag" | "wo" => Ok(Weekday::Wednesday),
            "thursday" | "thu" | "donderdag" | "do" => Ok(Weekday::Thursday),
            "friday" | "fri" | "vrijdag" | "vr" => Ok(Weekday::Friday),
            _ => Err(UnknownWeekday(s.to_string())),
        }
    }
}

impl Serialize for Weekday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Weekday {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Maps (week, day) pairs of the programme onto calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingCalendar {
    start_date: NaiveDate,
}

impl TrainingCalendar {
    /// `start_date` is the first day (a Saturday) of week 1.
    pub fn new(start_date: NaiveDate) -> Self {
        Self { start_date }
    }

    pub fn date_of(&self, week: u32, day: Weekday) -> NaiveDate {
        let days = (week.saturating_sub(1) * 7 + day.offset()) as i64;
        self.start_date + Duration::days(days)
    }

    /// Training week containing `date`, clamped to the programme.
    pub fn week_containing(&self, date: NaiveDate) -> u32 {
        let elapsed = (date - self.start_date).num_days();
        if elapsed < 0 {
            return 1;
        }
        ((elapsed / 7) as u32 + 1).min(PROGRAM_WEEKS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_week_order_starts_on_saturday() {
        let mut days = vec![Weekday::Friday, Weekday::Monday, Weekday::Sunday, Weekday::Saturday];
        days.sort();
        assert_eq!(
            days,
            vec![Weekday::Saturday, Weekday::Sunday, Weekday::Monday, Weekday::Friday]
        );
        assert_eq!(Weekday::Saturday.offset(), 0);
        assert_eq!(Weekday::Friday.offset(), 6);
    }

    #[test]
    fn test_parse_english_and_dutch_labels() {
        assert_eq!("Zondag".parse::<Weekday>().unwrap(), Weekday::Sunday);
        assert_eq!("wednesday".parse::<Weekday>().unwrap(), Weekday::Wednesday);
        assert_eq!(" Vrijdag ".parse::<Weekday>().unwrap(), Weekday::Friday);
        assert!("Funday".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_serde_uses_english_label() {
        let json = serde_json::to_string(&Weekday::Thursday).unwrap();
        assert_eq!(json, "\"Thursday\"");
        let day: Weekday = serde_json::from_str("\"Donderdag\"").unwrap();
        assert_eq!(day, Weekday::Thursday);
    }

    #[test]
    fn test_calendar_dates() {
        let start = NaiveDate::from_ymd_opt(2025, 11, 15).unwrap();
        let calendar = TrainingCalendar::new(start);

        assert_eq!(calendar.date_of(1, Weekday::Saturday), start);
        assert_eq!(
            calendar.date_of(1, Weekday::Sunday),
            NaiveDate::from_ymd_opt(2025, 11, 16).unwrap()
        );
        assert_eq!(
            calendar.date_of(2, Weekday::Monday),
            NaiveDate::from_ymd_opt(2025, 11, 24).unwrap()
        );
        assert_eq!(calendar.date_of(3, Weekday::Tuesday).weekday(), chrono::Weekday::Tue);
    }

    #[test]
    fn test_week_containing_is_clamped() {
        let start = NaiveDate::from_ymd_opt(2025, 11, 15).unwrap();
        let calendar = TrainingCalendar::new(start);

        assert_eq!(calendar.week_containing(start - Duration::days(3)), 1);
        assert_eq!(calendar.week_containing(start + Duration::days(6)), 1);
        assert_eq!(calendar.week_containing(start + Duration::days(7)), 2);
        assert_eq!(calendar.week_containing(start + Duration::days(1000)), PROGRAM_WEEKS);
    }
}
