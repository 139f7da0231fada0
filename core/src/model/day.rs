use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, Weekday};

use crate::error::AttendanceError;

/// One of the seven weekday names a schedule is keyed by.
///
/// Ordering follows the week, Monday first, so schedules iterate the way
/// a timetable reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    /// Weekday of the current local date.
    pub fn today() -> Self {
        Local::now().weekday().into()
    }

    pub fn succ(&self) -> Self {
        Weekday::from(*self).succ().into()
    }

    pub fn pred(&self) -> Self {
        Weekday::from(*self).pred().into()
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Day::Monday,
            Weekday::Tue => Day::Tuesday,
            Weekday::Wed => Day::Wednesday,
            Weekday::Thu => Day::Thursday,
            Weekday::Fri => Day::Friday,
            Weekday::Sat => Day::Saturday,
            Weekday::Sun => Day::Sunday,
        }
    }
}

impl From<Day> for Weekday {
    fn from(day: Day) -> Self {
        match day {
            Day::Monday => Weekday::Mon,
            Day::Tuesday => Weekday::Tue,
            Day::Wednesday => Weekday::Wed,
            Day::Thursday => Weekday::Thu,
            Day::Friday => Weekday::Fri,
            Day::Saturday => Weekday::Sat,
            Day::Sunday => Weekday::Sun,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Day {
    type Err = AttendanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Day::ALL
            .iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(needle))
            .copied()
            .ok_or_else(|| AttendanceError::InvalidDay(needle.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_names_case_insensitive() {
        assert_eq!("Monday".parse::<Day>().unwrap(), Day::Monday);
        assert_eq!("  sunday ".parse::<Day>().unwrap(), Day::Sunday);
        assert_eq!("WEDNESDAY".parse::<Day>().unwrap(), Day::Wednesday);
        assert!(matches!("Mon".parse::<Day>(), Err(AttendanceError::InvalidDay(_))));
        assert!("".parse::<Day>().is_err());
    }

    #[test]
    fn test_week_order_and_wraparound() {
        assert!(Day::Monday < Day::Sunday);
        assert_eq!(Day::Sunday.succ(), Day::Monday);
        assert_eq!(Day::Monday.pred(), Day::Sunday);
        assert_eq!(Day::from(Weekday::Thu).to_string(), "Thursday");
    }
}
