use anyhow::{Context, Result};
use datebook_core::date_key::DateKey;
use datebook_core::error::DatebookError;
use datebook_core::event::parse_hhmm;
use owo_colors::OwoColorize;

use crate::commands::{open_store, parse_date};

/// Remove the event starting at the given time on a date. Start times are
/// unique within a date, so that pair pins down exactly one event.
pub fn run(date: &str, start: &str) -> Result<()> {
    let (_config, snapshot, mut store) = open_store()?;
    let date = parse_date(date)?;
    let key = DateKey::from_date(date);

    let Some(start) = parse_hhmm(start) else {
        anyhow::bail!("Not a HH:MM time: \"{start}\"");
    };

    match store.remove_event(&key, start) {
        Ok(removed) => {
            snapshot
                .save(&store)
                .context("Could not write the events snapshot")?;
            println!("{}", format!("Removed from {key}: {removed}").green());
            Ok(())
        }
        Err(err @ DatebookError::EventNotFound { .. }) => {
            eprintln!("{}", err.to_string().red());
            anyhow::bail!("Nothing removed");
        }
        Err(other) => Err(other.into()),
    }
}
