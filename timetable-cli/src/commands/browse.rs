use anyhow::Result;
use chrono::Local;
use dialoguer::Select;
use owo_colors::OwoColorize;
use timetable_core::config::TimetableConfig;
use timetable_core::{
    Action, Direction, ScheduleStore, Selection, TimetableError, ViewMode, Weekday, resolve,
};

use super::{SelectionArgs, build_selection};
use crate::render::Render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    PreviousWeek,
    NextWeek,
    PickDay,
    ToggleView,
    PickGroup,
    Quit,
}

pub fn run(store: &ScheduleStore, config: &TimetableConfig, args: &SelectionArgs) -> Result<()> {
    let today = Local::now().date_naive();
    let mut selection = build_selection(store, config, args, today)?;

    loop {
        print_selection(store, &selection)?;

        let items = menu_items(store, &selection);
        let labels: Vec<String> = items.iter().map(|i| menu_label(*i, &selection)).collect();

        let choice = Select::new()
            .with_prompt("  Next")
            .items(&labels)
            .default(0)
            .interact()?;

        let action = match items[choice] {
            MenuItem::PreviousWeek => Action::PageWeek(Direction::Previous),
            MenuItem::NextWeek => Action::PageWeek(Direction::Next),
            MenuItem::ToggleView => Action::SetViewMode(selection.view_mode.toggled()),
            MenuItem::PickDay => Action::SelectDay(pick_day(selection.active_day)?),
            MenuItem::PickGroup => match pick_group(store, &selection)? {
                Some(group_id) => Action::SelectGroup(group_id),
                None => continue,
            },
            MenuItem::Quit => break,
        };

        selection = selection.apply(action, store);
        println!();
    }

    Ok(())
}

fn print_selection(store: &ScheduleStore, selection: &Selection) -> Result<()> {
    if let Some(group) = &selection.group_id {
        println!("{}", group.dimmed());
    }

    match resolve(store, selection) {
        Ok(resolution) => {
            println!("{}", resolution.render());
            if selection.view_mode == ViewMode::Day && resolution.days.is_empty() {
                println!();
                println!("   {}", format!("No classes on {}", selection.active_day).dimmed());
            }
        }
        Err(TimetableError::WeekNotFound(week_id)) => {
            println!("{}", format!("No data for week {}", week_id).dimmed());
        }
        Err(e) => return Err(e.into()),
    }

    println!();
    Ok(())
}

/// Menu entries that make sense for the current selection.
fn menu_items(store: &ScheduleStore, selection: &Selection) -> Vec<MenuItem> {
    let mut items = Vec::new();

    if store.next_week_id(selection.week_id).is_some() {
        items.push(MenuItem::NextWeek);
    }
    if store.previous_week_id(selection.week_id).is_some() {
        items.push(MenuItem::PreviousWeek);
    }
    if selection.view_mode == ViewMode::Day {
        items.push(MenuItem::PickDay);
    }
    items.push(MenuItem::ToggleView);
    if store.groups().len() > 1 {
        items.push(MenuItem::PickGroup);
    }
    items.push(MenuItem::Quit);

    items
}

fn menu_label(item: MenuItem, selection: &Selection) -> String {
    match item {
        MenuItem::PreviousWeek => "← Previous week".to_string(),
        MenuItem::NextWeek => "Next week →".to_string(),
        MenuItem::PickDay => format!("Pick day ({})", selection.active_day),
        MenuItem::ToggleView => format!("Switch to {} view", selection.view_mode.toggled()),
        MenuItem::PickGroup => "Pick group".to_string(),
        MenuItem::Quit => "Quit".to_string(),
    }
}

fn pick_day(current: Weekday) -> Result<Weekday> {
    let labels: Vec<&str> = Weekday::TEACHING_DAYS.iter().map(|d| d.label()).collect();
    let default = Weekday::TEACHING_DAYS
        .iter()
        .position(|&d| d == current)
        .unwrap_or(0);

    let choice = Select::new()
        .with_prompt("  Day")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(Weekday::TEACHING_DAYS[choice])
}

fn pick_group(store: &ScheduleStore, selection: &Selection) -> Result<Option<String>> {
    let groups = store.groups();
    let labels: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
    let default = selection
        .group_id
        .as_deref()
        .and_then(|id| groups.iter().position(|g| g.id == id))
        .unwrap_or(0);

    let choice = Select::new()
        .with_prompt("  Group")
        .items(&labels)
        .default(default)
        .interact_opt()?;

    Ok(choice.map(|idx| groups[idx].id.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(week_id: u32, view_mode: ViewMode) -> Selection {
        Selection {
            group_id: None,
            week_id,
            view_mode,
            active_day: Weekday::Wed,
        }
    }

    #[test]
    fn first_week_cannot_page_back() {
        let store = ScheduleStore::sample().unwrap();
        let items = menu_items(&store, &selection(1, ViewMode::Day));
        assert!(items.contains(&MenuItem::NextWeek));
        assert!(!items.contains(&MenuItem::PreviousWeek));
    }

    #[test]
    fn last_week_cannot_page_forward() {
        let store = ScheduleStore::sample().unwrap();
        let items = menu_items(&store, &selection(4, ViewMode::Day));
        assert!(!items.contains(&MenuItem::NextWeek));
        assert!(items.contains(&MenuItem::PreviousWeek));
    }

    #[test]
    fn day_picker_only_in_day_view() {
        let store = ScheduleStore::sample().unwrap();
        assert!(menu_items(&store, &selection(2, ViewMode::Day)).contains(&MenuItem::PickDay));
        assert!(!menu_items(&store, &selection(2, ViewMode::Week)).contains(&MenuItem::PickDay));
    }

    #[test]
    fn no_group_list_hides_group_picker() {
        let store = ScheduleStore::sample().unwrap();
        let items = menu_items(&store, &selection(2, ViewMode::Day));
        assert!(!items.contains(&MenuItem::PickGroup));
        assert_eq!(items.last(), Some(&MenuItem::Quit));
    }

    #[test]
    fn toggle_label_names_the_other_view() {
        assert_eq!(
            menu_label(MenuItem::ToggleView, &selection(1, ViewMode::Day)),
            "Switch to week view"
        );
        assert_eq!(
            menu_label(MenuItem::PickDay, &selection(1, ViewMode::Day)),
            "Pick day (СР)"
        );
    }
}
