use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;
use timetable_core::config::TimetableConfig;
use timetable_core::{ScheduleStore, TimetableError, ViewMode, resolve};

use super::{SelectionArgs, build_selection};
use crate::render::Render;

pub fn run(store: &ScheduleStore, config: &TimetableConfig, args: &SelectionArgs) -> Result<()> {
    let today = Local::now().date_naive();
    let selection = build_selection(store, config, args, today)?;

    let resolution = match resolve(store, &selection) {
        Ok(resolution) => resolution,
        Err(TimetableError::WeekNotFound(week_id)) => {
            println!("{}", format!("No data for week {}", week_id).dimmed());
            anyhow::bail!("Week {} is not in the schedule", week_id);
        }
        Err(e) => return Err(e.into()),
    };

    // Day view of a non-teaching day has nothing to list
    if selection.view_mode == ViewMode::Day && resolution.days.is_empty() {
        println!("{}", resolution.week.render());
        println!();
        println!("   {}", format!("No classes on {}", selection.active_day).dimmed());
        return Ok(());
    }

    println!("{}", resolution.render());

    Ok(())
}
