//! The user's current choice of group, week, view and day.
//!
//! A `Selection` is a plain value. Actions never mutate it in place; `apply`
//! returns the next selection, so any past selection can be resolved again.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::TimetableError;
use crate::group::GroupId;
use crate::store::ScheduleStore;
use crate::week::WeekId;
use crate::weekday::Weekday;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Day,
    Week,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Day => ViewMode::Week,
            ViewMode::Week => ViewMode::Day,
        }
    }
}

impl FromStr for ViewMode {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" => Ok(ViewMode::Day),
            "week" => Ok(ViewMode::Week),
            _ => Err(TimetableError::InvalidViewMode(s.to_string())),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ViewMode::Day => write!(f, "day"),
            ViewMode::Week => write!(f, "week"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Discrete user interactions reported by the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectGroup(GroupId),
    SelectWeek(WeekId),
    PageWeek(Direction),
    SetViewMode(ViewMode),
    SelectDay(Weekday),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Partition key for multi-group datasets; None reads the shared schedule
    pub group_id: Option<GroupId>,
    pub week_id: WeekId,
    pub view_mode: ViewMode,
    /// Only meaningful in day view
    pub active_day: Weekday,
}

impl Selection {
    /// Default selection for `today`: its week (or the nearest one), day view,
    /// and today's weekday.
    ///
    /// Returns None when the store has no weeks at all.
    pub fn initial(store: &ScheduleStore, today: NaiveDate, group_id: Option<GroupId>) -> Option<Self> {
        let week = store.nearest_week(today)?;

        Some(Selection {
            group_id,
            week_id: week.id,
            view_mode: ViewMode::Day,
            active_day: Weekday::from(today.weekday()),
        })
    }

    /// Produce the selection that follows `action`.
    ///
    /// Selecting an unknown week or paging past the first/last week leaves
    /// the week unchanged.
    pub fn apply(&self, action: Action, store: &ScheduleStore) -> Selection {
        let mut next = self.clone();

        match action {
            Action::SelectGroup(group_id) => next.group_id = Some(group_id),
            Action::SelectWeek(week_id) => {
                if store.get_week(week_id).is_some() {
                    next.week_id = week_id;
                } else {
                    warn!(week_id, "Ignoring selection of unknown week");
                }
            }
            Action::PageWeek(direction) => {
                let target = match direction {
                    Direction::Previous => store.previous_week_id(self.week_id),
                    Direction::Next => store.next_week_id(self.week_id),
                };
                match target {
                    Some(week_id) => next.week_id = week_id,
                    None => warn!(week_id = self.week_id, ?direction, "No week to page to"),
                }
            }
            Action::SetViewMode(mode) => next.view_mode = mode,
            Action::SelectDay(day) => next.active_day = day,
        }

        next
    }
}
