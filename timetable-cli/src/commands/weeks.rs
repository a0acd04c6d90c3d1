use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;
use timetable_core::config::TimetableConfig;
use timetable_core::{ScheduleStore, Selection, ViewMode, Weekday, resolve};

use super::resolve_group;

pub fn run(store: &ScheduleStore, config: &TimetableConfig, group: Option<&str>) -> Result<()> {
    let group_id = resolve_group(store, group.or(config.default_group.as_deref()))?;
    let today = Local::now().date_naive();

    if store.weeks().is_empty() {
        println!("{}", "No weeks in the schedule".dimmed());
        return Ok(());
    }

    for week in store.weeks() {
        let selection = Selection {
            group_id: group_id.clone(),
            week_id: week.id,
            view_mode: ViewMode::Week,
            active_day: Weekday::Mon,
        };
        let lessons = resolve(store, &selection)?.len();

        let label = format!("{:>3}  {} - {}", week.id, week.start_date, week.end_date);
        let count = format!("{} {}", lessons, pluralize("lesson", lessons));

        if week.contains(today) {
            println!("{} {}  {}", "•".green(), label.bold(), count.dimmed());
        } else {
            println!("  {}  {}", label, count.dimmed());
        }
    }

    Ok(())
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
