use anyhow::Result;
use chrono::Datelike;
use datebook_core::date_key::DateKey;
use datebook_core::month::Month;
use datebook_core::store::EventStore;
use dialoguer::Input;
use owo_colors::OwoColorize;

use crate::commands::open_store;
use crate::render;
use crate::render::Render;

/// Interactive month browser: step between months, jump back to today, or
/// type a day number to list that day's events.
pub fn run(start: Option<Month>) -> Result<()> {
    let (config, _snapshot, store) = open_store()?;
    let mut month = start.unwrap_or_else(Month::current);

    loop {
        let today = chrono::Local::now().date_naive();
        println!();
        println!("{}", render::month_grid(&month, &store, config.week_start, today));
        println!("{}", "n=next  p=previous  t=today  <day>=events  q=quit".dimmed());

        let command: String = Input::new().with_prompt("datebook").interact_text()?;
        match command.trim() {
            "n" => month = month.next(),
            "p" => month = month.prev(),
            "t" => month = Month::current(),
            "q" => break,
            other => match other.parse::<u32>() {
                Ok(day) => show_day(&month, day, &store),
                Err(_) => println!("{}", format!("Unknown command \"{other}\"").red()),
            },
        }
    }
    Ok(())
}

fn show_day(month: &Month, day: u32, store: &EventStore) {
    let Some(date) = month.days().into_iter().find(|d| d.day() == day) else {
        println!("{}", format!("No day {day} in {}", month.label()).red());
        return;
    };

    let key = DateKey::from_date(date);
    let events = store.events_on(&key);
    if events.is_empty() {
        println!("{}", format!("No events on {key}").dimmed());
        return;
    }

    println!("{}", format!("Events on {key}").bold());
    for event in events {
        println!("  {}", event.render());
    }
}
