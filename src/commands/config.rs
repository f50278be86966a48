use anyhow::Result;
use datebook_core::config::DatebookConfig;
use datebook_core::month::WeekStart;
use owo_colors::OwoColorize;

/// Show the current configuration, optionally setting the week start first.
pub fn run(week_start: Option<&str>) -> Result<()> {
    let mut config = DatebookConfig::load()?;

    if let Some(value) = week_start {
        config.week_start = value.parse::<WeekStart>()?;
        config.save()?;
        println!("{}", format!("Week now starts on {}", config.week_start).green());
        println!();
    }

    println!("{}", "Paths".bold());
    println!("  Config:    {}", DatebookConfig::config_path()?.display());
    println!("  Snapshot:  {}", config.snapshot_path().display());
    println!();
    println!("{}", "Settings".bold());
    println!("  Week start:  {}", config.week_start);
    Ok(())
}
