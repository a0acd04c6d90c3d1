use anyhow::Result;
use owo_colors::OwoColorize;
use timetable_core::config::TimetableConfig;

pub fn run() -> Result<()> {
    let config_path = TimetableConfig::config_path()?;
    let config = TimetableConfig::load()?;

    let dataset = config
        .dataset_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in sample".to_string());

    println!("{}", "Paths".bold());
    println!("  Config:   {}", config_path.display());
    println!("  Dataset:  {}", dataset);
    println!();
    println!("{}", "Defaults".bold());
    println!(
        "  Group:    {}",
        config.default_group.as_deref().unwrap_or("(first listed)")
    );
    println!("  View:     {}", config.default_view);

    Ok(())
}
