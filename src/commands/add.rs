use anyhow::{Context, Result};
use datebook_core::date_key::DateKey;
use datebook_core::error::DatebookError;
use datebook_core::event::EventDraft;
use dialoguer::Input;
use owo_colors::OwoColorize;

use crate::commands::{open_store, parse_date};

/// Add an event to a date, prompting for any field not given as a flag.
///
/// Field problems are printed one per line so every mistake shows at once;
/// an overlap names the stored event it clashed with. The snapshot is only
/// written after the store accepted the event.
pub fn run(
    date: Option<&str>,
    name: Option<String>,
    start: Option<String>,
    end: Option<String>,
    desc: Option<String>,
) -> Result<()> {
    let (_config, snapshot, mut store) = open_store()?;

    let date = match date {
        Some(raw) => parse_date(raw)?,
        None => chrono::Local::now().date_naive(),
    };
    let key = DateKey::from_date(date);

    let name = prompt_if_missing(name, "  Name")?;
    let start = prompt_if_missing(start, "  Start (HH:MM)")?;
    let end = prompt_if_missing(end, "  End (HH:MM)")?;
    let desc = prompt_if_missing(desc, "  Description")?;

    let draft = EventDraft::new(&name, &start, &end, &desc);

    match store.add_event(key.clone(), draft) {
        Ok(()) => {
            snapshot
                .save(&store)
                .context("Could not write the events snapshot")?;
            println!("{}", format!("Added to {key}: {start}-{end} {name}").green());
            Ok(())
        }
        Err(DatebookError::Validation(validation)) => {
            eprintln!("{}", "Please fix the event and try again:".red());
            for error in &validation.errors {
                eprintln!("  {}", error.to_string().red());
            }
            anyhow::bail!("Event was not added");
        }
        Err(DatebookError::Conflict(conflict)) => {
            eprintln!("{}", conflict.to_string().red());
            eprintln!("{}", "Pick a free time range and try again".dimmed());
            anyhow::bail!("Event was not added");
        }
        Err(other) => Err(other.into()),
    }
}

/// Use the flag value when present, otherwise ask interactively.
fn prompt_if_missing(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Input::new().with_prompt(prompt).interact_text()?),
    }
}
