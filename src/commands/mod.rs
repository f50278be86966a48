pub mod add;
pub mod browse;
pub mod config;
pub mod events;
pub mod remove;
pub mod show;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use datebook_core::config::DatebookConfig;
use datebook_core::snapshot::Snapshot;
use datebook_core::store::EventStore;

/// Load the config and the snapshot-backed store in one go. Commands that
/// mutate the store save back through the returned [`Snapshot`].
pub fn open_store() -> Result<(DatebookConfig, Snapshot, EventStore)> {
    let config = DatebookConfig::load().context("Could not load configuration")?;
    let snapshot = Snapshot::at(config.snapshot_path());
    let store = snapshot.load();
    Ok((config, snapshot, store))
}

/// Parse a date argument: the DD-MM-YYYY key form, ISO YYYY-MM-DD, or
/// natural language via fuzzydate ("today", "tomorrow", "march 20").
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%d-%m-%Y") {
        return Ok(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }
    fuzzydate::parse(input)
        .map(|dt| dt.date())
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{input}\""))
}
