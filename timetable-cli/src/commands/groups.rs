use anyhow::Result;
use owo_colors::OwoColorize;
use timetable_core::ScheduleStore;
use timetable_core::config::TimetableConfig;

pub fn run(store: &ScheduleStore, config: &TimetableConfig) -> Result<()> {
    if store.groups().is_empty() {
        println!("{}", "No groups listed in the schedule".dimmed());
        return Ok(());
    }

    for group in store.groups() {
        let is_default = config
            .default_group
            .as_deref()
            .is_some_and(|query| group.matches(query));

        let department = group
            .department
            .as_deref()
            .map(|d| format!("({})", d))
            .unwrap_or_default();

        let marker = if is_default {
            "default".green().to_string()
        } else {
            String::new()
        };

        println!("  {:<12} {} {}", group.name.bold(), department.dimmed(), marker);
    }

    Ok(())
}
