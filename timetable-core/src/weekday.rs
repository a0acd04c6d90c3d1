//! Weekdays as shown in the day picker.
//!
//! Monday..Saturday are teaching days with zero-based offsets 0..5 from a
//! week's start date. Sunday exists so that "today" can always be
//! represented, but it never has an offset and never has lessons.

use std::fmt;
use std::str::FromStr;

use crate::error::TimetableError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    /// Days that can carry lessons, in display order.
    pub const TEACHING_DAYS: [Weekday; 6] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    /// Days from the week's start date, or None for Sunday.
    pub fn offset(self) -> Option<u32> {
        match self {
            Weekday::Mon => Some(0),
            Weekday::Tue => Some(1),
            Weekday::Wed => Some(2),
            Weekday::Thu => Some(3),
            Weekday::Fri => Some(4),
            Weekday::Sat => Some(5),
            Weekday::Sun => None,
        }
    }

    pub fn is_teaching_day(self) -> bool {
        self.offset().is_some()
    }

    /// Short label used on the day picker.
    pub fn label(self) -> &'static str {
        match self {
            Weekday::Mon => "ПН",
            Weekday::Tue => "ВТ",
            Weekday::Wed => "СР",
            Weekday::Thu => "ЧТ",
            Weekday::Fri => "ПТ",
            Weekday::Sat => "СБ",
            Weekday::Sun => "ВС",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Mon,
            chrono::Weekday::Tue => Weekday::Tue,
            chrono::Weekday::Wed => Weekday::Wed,
            chrono::Weekday::Thu => Weekday::Thu,
            chrono::Weekday::Fri => Weekday::Fri,
            chrono::Weekday::Sat => Weekday::Sat,
            chrono::Weekday::Sun => Weekday::Sun,
        }
    }
}

impl FromStr for Weekday {
    type Err = TimetableError;

    /// Accepts picker labels ("ПН") and English names ("mon", "Monday").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let day = match s.trim().to_lowercase().as_str() {
            "пн" | "mon" | "monday" => Weekday::Mon,
            "вт" | "tue" | "tues" | "tuesday" => Weekday::Tue,
            "ср" | "wed" | "wednesday" => Weekday::Wed,
            "чт" | "thu" | "thurs" | "thursday" => Weekday::Thu,
            "пт" | "fri" | "friday" => Weekday::Fri,
            "сб" | "sat" | "saturday" => Weekday::Sat,
            "вс" | "sun" | "sunday" => Weekday::Sun,
            _ => return Err(TimetableError::InvalidWeekday(s.to_string())),
        };
        Ok(day)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
