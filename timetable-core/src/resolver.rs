//! Turns a `Selection` into the lessons to display.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{TimetableError, TimetableResult};
use crate::lesson::Lesson;
use crate::selection::{Selection, ViewMode};
use crate::store::ScheduleStore;
use crate::week::Week;
use crate::weekday::Weekday;

/// Lessons of one calendar day, sorted by number.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySchedule {
    pub weekday: Weekday,
    pub date: NaiveDate,
    pub lessons: Vec<Lesson>,
}

/// Result of resolving a selection.
///
/// Day view holds at most one day (none for Sunday); week view holds the
/// teaching days Monday..Saturday in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub week: Week,
    pub view_mode: ViewMode,
    pub days: Vec<DaySchedule>,
}

impl Resolution {
    /// All lessons, concatenated in day order.
    pub fn lessons(&self) -> impl Iterator<Item = &Lesson> {
        self.days.iter().flat_map(|d| d.lessons.iter())
    }

    pub fn into_lessons(self) -> Vec<Lesson> {
        self.days.into_iter().flat_map(|d| d.lessons).collect()
    }

    pub fn len(&self) -> usize {
        self.days.iter().map(|d| d.lessons.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resolve `selection` against `store`.
///
/// An empty result means "no classes". A selection whose week does not
/// exist fails with `WeekNotFound` instead.
pub fn resolve(store: &ScheduleStore, selection: &Selection) -> TimetableResult<Resolution> {
    let week = store
        .get_week(selection.week_id)
        .ok_or(TimetableError::WeekNotFound(selection.week_id))?;

    let days: Vec<DaySchedule> = match selection.view_mode {
        ViewMode::Day => resolve_day(store, selection, week, selection.active_day)
            .into_iter()
            .collect(),
        ViewMode::Week => Weekday::TEACHING_DAYS
            .iter()
            .filter_map(|&day| resolve_day(store, selection, week, day))
            .collect(),
    };

    let resolution = Resolution {
        week: week.clone(),
        view_mode: selection.view_mode,
        days,
    };

    debug!(
        week_id = week.id,
        view = %selection.view_mode,
        lessons = resolution.len(),
        "Resolved selection"
    );

    Ok(resolution)
}

fn resolve_day(
    store: &ScheduleStore,
    selection: &Selection,
    week: &Week,
    weekday: Weekday,
) -> Option<DaySchedule> {
    let date = week.date_for(weekday)?;

    let mut lessons =
        store.lessons_for_group_date(selection.group_id.as_deref(), week.id, date).to_vec();
    lessons.sort_by_key(|l| l.number);

    Some(DaySchedule {
        weekday,
        date,
        lessons,
    })
}
