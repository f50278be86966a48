use anyhow::Result;
use datebook_core::date_key::DateKey;
use datebook_core::event::Event;
use owo_colors::OwoColorize;

use crate::commands::{open_store, parse_date};
use crate::render::Render;

/// Minimum characters before the name filter kicks in; shorter terms list
/// everything.
const MIN_FILTER_CHARS: usize = 2;

/// List a date's events, optionally filtered by name.
pub fn run(date: &str, filter: Option<&str>) -> Result<()> {
    let (_config, _snapshot, store) = open_store()?;
    let date = parse_date(date)?;
    let key = DateKey::from_date(date);

    let filter = filter.unwrap_or("");
    let filtering = filter.chars().count() >= MIN_FILTER_CHARS;
    if !filter.is_empty() && !filtering {
        println!(
            "{}",
            format!("Filter needs at least {MIN_FILTER_CHARS} characters, listing everything").dimmed()
        );
    }

    let events: Vec<&Event> = if filtering {
        store.filter_by_name(&key, filter)
    } else {
        store.events_on(&key).iter().collect()
    };

    if events.is_empty() {
        println!("{}", format!("No events on {key}").dimmed());
        return Ok(());
    }

    println!("{}", format!("Events on {key}").bold());
    for event in &events {
        println!("  {}", event.render());
    }
    Ok(())
}
