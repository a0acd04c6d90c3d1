//! Schedule payloads and their validation.
//!
//! A dataset is the serialized form of everything the viewer shows:
//!
//! ```json
//! {
//!   "weeks": [{ "id": 1, "start_date": "2024-10-21", "end_date": "2024-10-26" }],
//!   "schedule": { "1": { "2024-10-21": [{ "subject": "...", "type": "ЛК", "time": "08:30-10:00", "number": 1 }] } }
//! }
//! ```
//!
//! `groups` and `group_schedules` are optional. A group with its own entry in
//! `group_schedules` sees only that partition; everyone else sees `schedule`.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{TimetableError, TimetableResult, ValidationIssue};
use crate::group::{Group, GroupId};
use crate::lesson::Lesson;
use crate::week::{Week, WeekId};

/// Lessons of one week, keyed by calendar date.
pub type DayTable = BTreeMap<NaiveDate, Vec<Lesson>>;

/// Lessons keyed by week id, then date.
pub type WeekTable = BTreeMap<WeekId, DayTable>;

static SAMPLE_DATASET: &str = include_str!("../data/sample.json");

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub weeks: Vec<Week>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<Group>,

    #[serde(default)]
    pub schedule: WeekTable,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub group_schedules: BTreeMap<GroupId, WeekTable>,
}

impl Dataset {
    pub fn from_json(content: &str) -> TimetableResult<Self> {
        serde_json::from_str(content).map_err(|e| TimetableError::DatasetParse(e.to_string()))
    }

    pub fn from_path(path: &Path) -> TimetableResult<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            TimetableError::DatasetParse(format!("{}: {}", path.display(), e))
        })
    }

    /// The mock dataset bundled with the viewer.
    pub fn sample() -> TimetableResult<Self> {
        Self::from_json(SAMPLE_DATASET)
    }

    pub fn to_json_pretty(&self) -> TimetableResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| TimetableError::DatasetParse(e.to_string()))
    }

    /// Check every structural rule and report all violations.
    ///
    /// Lessons listed out of `number` order are not reported; ingestion sorts them.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        let mut seen_weeks = HashSet::new();
        for week in &self.weeks {
            if !seen_weeks.insert(week.id) {
                issues.push(ValidationIssue::DuplicateWeek(week.id));
            }
            if week.start_date > week.end_date {
                issues.push(ValidationIssue::InvertedWeek {
                    week: week.id,
                    start: week.start_date,
                    end: week.end_date,
                });
            }
        }

        let mut seen_groups = HashSet::new();
        for group in &self.groups {
            if !seen_groups.insert(group.id.as_str()) {
                issues.push(ValidationIssue::DuplicateGroup(group.id.clone()));
            }
        }

        self.check_table(&self.schedule, &mut issues);

        for (group_id, table) in &self.group_schedules {
            if !self.groups.is_empty() && !seen_groups.contains(group_id.as_str()) {
                issues.push(ValidationIssue::UnknownGroup(group_id.clone()));
            }
            self.check_table(table, &mut issues);
        }

        issues
    }

    fn week(&self, id: WeekId) -> Option<&Week> {
        self.weeks.iter().find(|w| w.id == id)
    }

    fn check_table(&self, table: &WeekTable, issues: &mut Vec<ValidationIssue>) {
        for (&week_id, days) in table {
            let Some(week) = self.week(week_id) else {
                issues.push(ValidationIssue::UnknownWeek(week_id));
                continue;
            };

            for (&date, lessons) in days {
                if !week.contains(date) {
                    issues.push(ValidationIssue::DateOutsideWeek {
                        week: week_id,
                        date,
                    });
                }
                check_day(date, lessons, issues);
            }
        }
    }
}

fn check_day(date: NaiveDate, lessons: &[Lesson], issues: &mut Vec<ValidationIssue>) {
    let mut numbers = HashSet::new();

    for lesson in lessons {
        if lesson.subject.trim().is_empty() {
            issues.push(ValidationIssue::EmptySubject {
                date,
                number: lesson.number,
            });
        }
        if lesson.number == 0 {
            issues.push(ValidationIssue::ZeroNumber {
                date,
                subject: lesson.subject.clone(),
            });
        } else if !numbers.insert(lesson.number) {
            issues.push(ValidationIssue::DuplicateNumber {
                date,
                number: lesson.number,
            });
        }
        if !lesson.time.is_well_formed() {
            issues.push(ValidationIssue::InvertedTime {
                date,
                number: lesson.number,
            });
        }
    }
}
