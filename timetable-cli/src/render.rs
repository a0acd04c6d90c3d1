//! Colored text output for lessons, days and weeks.
//!
//! Each `render` returns the lines `show` and `browse` print.

use chrono::{Local, NaiveDate};
use owo_colors::OwoColorize;
use timetable_core::{DaySchedule, Lesson, LessonType, Resolution, Week, Weekday};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for LessonType {
    fn render(&self) -> String {
        let label = format!("[{}]", self.short_name());
        match self {
            LessonType::Lecture => label.blue().to_string(),
            LessonType::Practice => label.green().to_string(),
            LessonType::Lab => label.yellow().to_string(),
            LessonType::Exam => label.red().bold().to_string(),
        }
    }
}

impl Render for Lesson {
    fn render(&self) -> String {
        let badge = format!("{:>2}", self.number);
        let mut line = format!(
            "{} {}  {} {}",
            badge.bold(),
            self.time.to_string().dimmed(),
            self.subject,
            self.kind.render()
        );

        if let Some(details) = lesson_details(self) {
            line.push_str(&format!("\n{:>19}{}", "", details.dimmed()));
        }

        line
    }
}

impl Render for DaySchedule {
    fn render(&self) -> String {
        let today = Local::now().date_naive();
        let mut lines = vec![day_header(self.weekday, self.date, today).bold().to_string()];

        if self.lessons.is_empty() {
            lines.push(format!("   {}", "No classes".dimmed()));
        } else {
            lines.extend(self.lessons.iter().map(|l| format!("  {}", l.render())));
        }

        lines.join("\n")
    }
}

impl Render for Week {
    fn render(&self) -> String {
        format!("🗓  {}", self)
    }
}

impl Render for Resolution {
    fn render(&self) -> String {
        let mut sections = vec![self.week.render()];
        sections.extend(self.days.iter().map(|d| d.render()));
        sections.join("\n\n")
    }
}

/// Location and instructor joined for the second line of a lesson
fn lesson_details(lesson: &Lesson) -> Option<String> {
    let parts: Vec<&str> = [lesson.location.as_deref(), lesson.instructor.as_deref()]
        .into_iter()
        .flatten()
        .collect();

    (!parts.is_empty()).then(|| parts.join(" · "))
}

/// Day label such as "ПН 21.10", with a marker for today.
fn day_header(weekday: Weekday, date: NaiveDate, today: NaiveDate) -> String {
    let label = format!("{} {}", weekday.label(), date.format("%d.%m"));
    if date == today {
        format!("{} (today)", label)
    } else {
        label
    }
}
