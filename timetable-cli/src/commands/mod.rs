pub mod browse;
pub mod config;
pub mod groups;
pub mod show;
pub mod validate;
pub mod weeks;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use timetable_core::config::TimetableConfig;
use timetable_core::{Action, GroupId, ScheduleStore, Selection, ViewMode, WeekId, Weekday};

/// Flags that pick what to look at.
#[derive(Args, Debug, Default, Clone)]
pub struct SelectionArgs {
    /// Study group (id or name)
    #[arg(short, long)]
    pub group: Option<String>,

    /// Week id (see `timetable weeks`)
    #[arg(short, long)]
    pub week: Option<WeekId>,

    /// Start from the week and weekday of this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Weekday to show in day view (ПН..СБ or mon..sat)
    #[arg(short, long)]
    pub day: Option<Weekday>,

    /// "day" or "week"
    #[arg(long)]
    pub view: Option<ViewMode>,
}

/// Build the selection described by `args`, falling back to config and today.
pub fn build_selection(
    store: &ScheduleStore,
    config: &TimetableConfig,
    args: &SelectionArgs,
    today: NaiveDate,
) -> Result<Selection> {
    let group_query = args.group.as_deref().or(config.default_group.as_deref());
    let group = resolve_group(store, group_query)?;

    let anchor = args.date.unwrap_or(today);
    let mut selection =
        Selection::initial(store, anchor, group).context("The schedule has no weeks")?;

    let view = args.view.unwrap_or(config.default_view);
    selection = selection.apply(Action::SetViewMode(view), store);

    if let Some(day) = args.day {
        selection = selection.apply(Action::SelectDay(day), store);
    }

    // Assigned directly so an unknown id reaches the resolver and is reported.
    if let Some(week_id) = args.week {
        selection.week_id = week_id;
    }

    Ok(selection)
}

/// Map a group id or name to a known group id.
///
/// Without a query, the first listed group is used. Datasets that list no
/// groups accept any id as-is.
pub fn resolve_group(store: &ScheduleStore, query: Option<&str>) -> Result<Option<GroupId>> {
    let Some(query) = query else {
        return Ok(store.groups().first().map(|g| g.id.clone()));
    };

    if store.groups().is_empty() {
        return Ok(Some(query.to_string()));
    }

    match store.group(query) {
        Some(group) => Ok(Some(group.id.clone())),
        None => {
            let available: Vec<_> = store.groups().iter().map(|g| g.id.as_str()).collect();
            anyhow::bail!(
                "Group '{}' not found. Available: {}",
                query,
                available.join(", ")
            );
        }
    }
}
