use anyhow::Result;
use datebook_core::month::Month;

use crate::commands::open_store;
use crate::render;

/// Render one month's grid and exit.
pub fn run(month: Option<Month>) -> Result<()> {
    let (config, _snapshot, store) = open_store()?;
    let month = month.unwrap_or_else(Month::current);
    let today = chrono::Local::now().date_naive();

    println!("{}", render::month_grid(&month, &store, config.week_start, today));
    Ok(())
}
