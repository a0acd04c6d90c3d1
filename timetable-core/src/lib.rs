//! Core types for the timetable viewer.
//!
//! This crate holds everything that is not presentation:
//! - `lesson`, `week` and `weekday` for the schedule data model
//! - `dataset` for ingesting and validating schedule payloads
//! - `store` for read-only lookups over an ingested dataset
//! - `selection` and `resolver` for turning a user's choice into lessons to show

pub mod config;
pub mod dataset;
pub mod error;
pub mod group;
pub mod lesson;
pub mod resolver;
pub mod selection;
pub mod store;
pub mod week;
pub mod weekday;

pub use dataset::Dataset;
pub use error::{TimetableError, TimetableResult, ValidationIssue};
pub use group::{Group, GroupId};
pub use lesson::{Lesson, LessonTime, LessonType};
pub use resolver::{DaySchedule, Resolution, resolve};
pub use selection::{Action, Direction, Selection, ViewMode};
pub use store::ScheduleStore;
pub use week::{Week, WeekId};
pub use weekday::Weekday;
