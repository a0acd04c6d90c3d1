//! Calendar week descriptors.

use std::fmt;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::weekday::Weekday;

/// Stable ordinal identifier of a week, used as the schedule lookup key.
pub type WeekId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    pub id: WeekId,
    #[serde(alias = "startDate")]
    pub start_date: NaiveDate,
    #[serde(alias = "endDate")]
    pub end_date: NaiveDate,
}

impl Week {
    pub fn new(id: WeekId, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Week {
            id,
            start_date,
            end_date,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Calendar date of `day` within this week.
    ///
    /// None for Sunday and for days that fall past `end_date`.
    pub fn date_for(&self, day: Weekday) -> Option<NaiveDate> {
        let offset = day.offset()?;
        let date = self
            .start_date
            .checked_add_days(Days::new(u64::from(offset)))?;
        (date <= self.end_date).then_some(date)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Week {} ({} - {})",
            self.id,
            self.start_date.format("%d.%m"),
            self.end_date.format("%d.%m")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn week_one() -> Week {
        Week::new(1, date(2024, 10, 21), date(2024, 10, 26))
    }

    #[test]
    fn monday_is_start_date() {
        assert_eq!(week_one().date_for(Weekday::Mon), Some(date(2024, 10, 21)));
    }

    #[test]
    fn saturday_is_five_days_in() {
        assert_eq!(week_one().date_for(Weekday::Sat), Some(date(2024, 10, 26)));
    }

    #[test]
    fn sunday_has_no_date() {
        assert_eq!(week_one().date_for(Weekday::Sun), None);
    }

    #[test]
    fn days_past_end_date_have_no_date() {
        let short = Week::new(9, date(2024, 12, 30), date(2024, 12, 31));
        assert_eq!(short.date_for(Weekday::Tue), Some(date(2024, 12, 31)));
        assert_eq!(short.date_for(Weekday::Wed), None);
    }

    #[test]
    fn contains_is_inclusive() {
        let week = week_one();
        assert!(week.contains(date(2024, 10, 21)));
        assert!(week.contains(date(2024, 10, 26)));
        assert!(!week.contains(date(2024, 10, 27)));
        assert!(!week.contains(date(2024, 10, 20)));
    }

    #[test]
    fn accepts_camel_case_dates() {
        let week: Week =
            serde_json::from_str(r#"{ "id": 2, "startDate": "2024-10-28", "endDate": "2024-11-02" }"#)
                .unwrap();
        assert_eq!(week.date_for(Weekday::Thu), Some(date(2024, 10, 31)));
    }

    #[test]
    fn displays_short_range() {
        assert_eq!(week_one().to_string(), "Week 1 (21.10 - 26.10)");
    }
}
