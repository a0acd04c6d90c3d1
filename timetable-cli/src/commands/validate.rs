use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use timetable_core::Dataset;

pub fn run(path: &Path) -> Result<()> {
    let dataset = Dataset::from_path(path)
        .with_context(|| format!("Could not read dataset {}", path.display()))?;

    let issues = dataset.validate();

    if issues.is_empty() {
        println!(
            "{} {} weeks, {} lessons",
            "✓".green(),
            dataset.weeks.len(),
            lesson_count(&dataset)
        );
        return Ok(());
    }

    for issue in &issues {
        println!("  {} {}", "✗".red(), issue);
    }

    anyhow::bail!("{} issue(s) found in {}", issues.len(), path.display())
}

fn lesson_count(dataset: &Dataset) -> usize {
    std::iter::once(&dataset.schedule)
        .chain(dataset.group_schedules.values())
        .flat_map(|table| table.values())
        .flat_map(|days| days.values())
        .map(Vec::len)
        .sum()
}
