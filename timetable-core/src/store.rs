//! Read-only schedule lookups.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::dataset::{Dataset, WeekTable};
use crate::error::{TimetableError, TimetableResult};
use crate::group::{Group, GroupId};
use crate::lesson::Lesson;
use crate::week::{Week, WeekId};

/// An ingested, validated dataset.
///
/// Weeks are kept sorted by id and every day's lessons sorted by number.
/// Days without lessons are absent; lookups return an empty slice for them.
#[derive(Debug, Clone, Default)]
pub struct ScheduleStore {
    weeks: Vec<Week>,
    groups: Vec<Group>,
    shared: WeekTable,
    partitions: BTreeMap<GroupId, WeekTable>,
}

impl ScheduleStore {
    /// Validate and index a dataset. Fails with every issue found.
    pub fn from_dataset(dataset: Dataset) -> TimetableResult<Self> {
        let issues = dataset.validate();
        if !issues.is_empty() {
            return Err(TimetableError::MalformedData(issues));
        }

        let Dataset {
            mut weeks,
            groups,
            schedule,
            group_schedules,
        } = dataset;

        weeks.sort_by_key(|w| w.id);

        let shared = normalize(schedule);
        let partitions: BTreeMap<GroupId, WeekTable> = group_schedules
            .into_iter()
            .map(|(group, table)| (group, normalize(table)))
            .collect();

        debug!(
            weeks = weeks.len(),
            groups = groups.len(),
            partitions = partitions.len(),
            "Loaded schedule"
        );

        Ok(ScheduleStore {
            weeks,
            groups,
            shared,
            partitions,
        })
    }

    pub fn sample() -> TimetableResult<Self> {
        Self::from_dataset(Dataset::sample()?)
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Find a group by id or display name.
    pub fn group(&self, query: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.matches(query))
    }

    pub fn get_week(&self, id: WeekId) -> Option<&Week> {
        self.weeks
            .binary_search_by_key(&id, |w| w.id)
            .ok()
            .map(|idx| &self.weeks[idx])
    }

    /// Lessons on `date` from the shared schedule, sorted by number.
    ///
    /// An unknown week or a date without classes both give an empty slice.
    pub fn get_lessons_for_date(&self, week_id: WeekId, date: NaiveDate) -> &[Lesson] {
        lookup(&self.shared, week_id, date)
    }

    /// Like `get_lessons_for_date`, but reads the group's own partition when it has one.
    pub fn lessons_for_group_date(
        &self,
        group: Option<&str>,
        week_id: WeekId,
        date: NaiveDate,
    ) -> &[Lesson] {
        let table = group
            .and_then(|g| self.partitions.get(g))
            .unwrap_or(&self.shared);
        lookup(table, week_id, date)
    }

    pub fn week_containing(&self, date: NaiveDate) -> Option<&Week> {
        self.weeks.iter().find(|w| w.contains(date))
    }

    /// The week containing `date`, else the next week to start after it,
    /// else the latest week. Compares start dates, not ids.
    /// None only when there are no weeks.
    pub fn nearest_week(&self, date: NaiveDate) -> Option<&Week> {
        self.week_containing(date)
            .or_else(|| {
                self.weeks
                    .iter()
                    .filter(|w| w.start_date > date)
                    .min_by_key(|w| w.start_date)
            })
            .or_else(|| self.weeks.iter().max_by_key(|w| w.start_date))
    }

    /// Smallest known week id greater than `id`.
    pub fn next_week_id(&self, id: WeekId) -> Option<WeekId> {
        self.weeks.iter().map(|w| w.id).find(|&w| w > id)
    }

    /// Largest known week id less than `id`.
    pub fn previous_week_id(&self, id: WeekId) -> Option<WeekId> {
        self.weeks.iter().rev().map(|w| w.id).find(|&w| w < id)
    }
}

fn lookup(table: &WeekTable, week_id: WeekId, date: NaiveDate) -> &[Lesson] {
    table
        .get(&week_id)
        .and_then(|days| days.get(&date))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Drop empty days and weeks, and order each day by lesson number.
fn normalize(table: WeekTable) -> WeekTable {
    table
        .into_iter()
        .filter_map(|(week_id, days)| {
            let days: BTreeMap<_, _> = days
                .into_iter()
                .filter(|(_, lessons)| !lessons.is_empty())
                .map(|(date, mut lessons)| {
                    if !lessons.is_sorted_by_key(|l| l.number) {
                        debug!(%date, "Re-sorting lessons by number");
                        lessons.sort_by_key(|l| l.number);
                    }
                    (date, lessons)
                })
                .collect();
            (!days.is_empty()).then_some((week_id, days))
        })
        .collect()
}
