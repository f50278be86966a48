//! Terminal rendering for the month grid and event listings.

use chrono::{Datelike, NaiveDate};
use datebook_core::date_key::DateKey;
use datebook_core::event::Event;
use datebook_core::month::{Month, WeekStart};
use datebook_core::store::EventStore;
use owo_colors::OwoColorize;

/// Types that render to a colored terminal line.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        format!(
            "{} {}  {}",
            self.time_span(),
            self.name().bold(),
            self.description().dimmed()
        )
    }
}

/// The full month view: header label, weekday labels, the day grid, and a
/// footer listing which days hold how many events.
///
/// Days with events carry a `*` marker and today is shown inverted. Cells
/// are colored only after padding, so columns stay aligned.
pub fn month_grid(
    month: &Month,
    store: &EventStore,
    week_start: WeekStart,
    today: NaiveDate,
) -> String {
    let mut lines = Vec::new();

    lines.push(format!("{:^34}", month.label()).bold().to_string());

    let labels: Vec<String> = week_start.labels().iter().map(|l| format!("{l:>4}")).collect();
    lines.push(labels.join(" "));

    for row in grid_rows(month, week_start) {
        let cells: Vec<String> = row.iter().map(|day| day_cell(*day, store, today)).collect();
        lines.push(cells.join(" "));
    }

    let marked = marked_days(month, store);
    if !marked.is_empty() {
        let listed: Vec<String> = marked
            .iter()
            .map(|(day, count)| format!("{day:02} ({count})"))
            .collect();
        lines.push(String::new());
        lines.push(format!("With events: {}", listed.join(", ")).dimmed().to_string());
    }

    lines.join("\n")
}

/// The grid as 7-wide rows of days, `None` for leading and trailing blanks.
fn grid_rows(month: &Month, week_start: WeekStart) -> Vec<Vec<Option<NaiveDate>>> {
    let mut cells: Vec<Option<NaiveDate>> = vec![None; month.leading_blanks(week_start)];
    cells.extend(month.days().into_iter().map(Some));
    while cells.len() % 7 != 0 {
        cells.push(None);
    }
    cells.chunks(7).map(|row| row.to_vec()).collect()
}

fn day_cell(day: Option<NaiveDate>, store: &EventStore, today: NaiveDate) -> String {
    let Some(date) = day else {
        return "    ".to_string();
    };

    let marked = store.event_count(&DateKey::from_date(date)) > 0;
    let cell = format!("{:>3}{}", date.day(), if marked { "*" } else { " " });

    if date == today {
        cell.reversed().to_string()
    } else if marked {
        cell.bold().to_string()
    } else {
        cell
    }
}

/// Days of the month that hold events, with their counts, ascending.
fn marked_days(month: &Month, store: &EventStore) -> Vec<(u32, usize)> {
    month
        .days()
        .iter()
        .filter_map(|date| {
            let count = store.event_count(&DateKey::from_date(*date));
            (count > 0).then_some((date.day(), count))
        })
        .collect()
}
