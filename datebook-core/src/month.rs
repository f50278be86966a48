//! Month arithmetic for the calendar grid.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{DatebookError, DatebookResult};

/// First day of the week shown in the grid.
///
/// Drives both the weekday header labels and the leading blank count, so
/// the two can never disagree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Weekday header labels, in grid column order.
    pub fn labels(self) -> [&'static str; 7] {
        match self {
            WeekStart::Sunday => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            WeekStart::Monday => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        }
    }

    /// Grid column (0-6) a date lands in under this convention.
    fn column(self, date: NaiveDate) -> usize {
        match self {
            WeekStart::Sunday => date.weekday().num_days_from_sunday() as usize,
            WeekStart::Monday => date.weekday().num_days_from_monday() as usize,
        }
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekStart::Sunday => write!(f, "sunday"),
            WeekStart::Monday => write!(f, "monday"),
        }
    }
}

impl FromStr for WeekStart {
    type Err = DatebookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            "monday" | "mon" => Ok(WeekStart::Monday),
            other => Err(DatebookError::Config(format!(
                "Unknown week start \"{other}\" (expected \"sunday\" or \"monday\")"
            ))),
        }
    }
}

/// A displayed year and month pair.
///
/// Deliberately carries no day-of-month, so stepping between months has
/// nothing to roll over: from any day in March the previous month is
/// February with the position clamped to the 1st ([`first_day`]).
///
/// [`first_day`]: Self::first_day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// A month in `year`, with `month` given as 1-12.
    pub fn new(year: i32, month: u32) -> DatebookResult<Self> {
        // Rejects month 0/13 and years outside chrono's range.
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(DatebookError::InvalidMonth(format!("{year:04}-{month:02}")));
        }
        Ok(Month { year, month })
    }

    /// The month a date falls in.
    pub fn containing(date: NaiveDate) -> Self {
        Month {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month of today's local date.
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month, the clamp target for navigation.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("month is within chrono's range")
    }

    /// Every day of the month, ascending and gap-free.
    pub fn days(&self) -> Vec<NaiveDate> {
        let mut days = Vec::with_capacity(31);
        let mut date = self.first_day();
        while date.month() == self.month && date.year() == self.year {
            days.push(date);
            match date.succ_opt() {
                Some(next) => date = next,
                None => break,
            }
        }
        days
    }

    /// Grid cells to leave blank before day 1 so weekday columns line up:
    /// the column of the month's first day. Always 0-6.
    pub fn leading_blanks(&self, week_start: WeekStart) -> usize {
        week_start.column(self.first_day())
    }

    /// The previous calendar month, crossing the year boundary when needed.
    pub fn prev(self) -> Month {
        if self.month == 1 {
            Month { year: self.year - 1, month: 12 }
        } else {
            Month { year: self.year, month: self.month - 1 }
        }
    }

    /// The next calendar month, crossing the year boundary when needed.
    pub fn next(self) -> Month {
        if self.month == 12 {
            Month { year: self.year + 1, month: 1 }
        } else {
            Month { year: self.year, month: self.month + 1 }
        }
    }

    /// Header label, e.g. `January 2025`.
    pub fn label(&self) -> String {
        format!("{} {}", self.first_day().format("%B"), self.year)
    }
}

impl fmt::Display for Month {
    /// The `YYYY-MM` form accepted back by [`FromStr`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = DatebookError;

    /// Parses the `YYYY-MM` argument form, e.g. `2025-01`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DatebookError::InvalidMonth(format!("\"{s}\" (expected YYYY-MM)"));

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Month::new(year, month).map_err(|_| invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(year: i32, month: u32) -> Month {
        Month::new(year, month).unwrap()
    }

    // --- days ---

    #[test]
    fn day_counts_match_the_calendar() {
        assert_eq!(month(2025, 1).days().len(), 31);
        assert_eq!(month(2025, 4).days().len(), 30);
        assert_eq!(month(2023, 2).days().len(), 28);
    }

    #[test]
    fn leap_years_give_february_29_days() {
        assert_eq!(month(2024, 2).days().len(), 29);
        // Century rule: 1900 is not a leap year, 2000 is.
        assert_eq!(month(1900, 2).days().len(), 28);
        assert_eq!(month(2000, 2).days().len(), 29);
    }

    #[test]
    fn days_are_ascending_and_gap_free() {
        let days = month(2025, 3).days();
        assert_eq!(days[0], month(2025, 3).first_day());
        for pair in days.windows(2) {
            assert_eq!(pair[1], pair[0].succ_opt().unwrap());
        }
        assert_eq!(days.last().unwrap().day(), 31);
    }

    // --- leading blanks ---

    #[test]
    fn blanks_put_day_one_in_its_weekday_column() {
        // 2025-01-01 is a Wednesday.
        assert_eq!(month(2025, 1).leading_blanks(WeekStart::Sunday), 3);
        assert_eq!(month(2025, 1).leading_blanks(WeekStart::Monday), 2);
    }

    #[test]
    fn month_starting_on_the_week_start_has_no_blanks() {
        // 2025-06-01 is a Sunday.
        assert_eq!(month(2025, 6).leading_blanks(WeekStart::Sunday), 0);
        assert_eq!(month(2025, 6).leading_blanks(WeekStart::Monday), 6);
    }

    #[test]
    fn blanks_stay_under_seven_all_year() {
        for m in 1..=12 {
            for week_start in [WeekStart::Sunday, WeekStart::Monday] {
                assert!(month(2025, m).leading_blanks(week_start) < 7);
            }
        }
    }

    #[test]
    fn labels_lead_with_the_week_start() {
        assert_eq!(WeekStart::Sunday.labels()[0], "Sun");
        assert_eq!(WeekStart::Monday.labels()[0], "Mon");
        assert_eq!(WeekStart::Monday.labels()[6], "Sun");
    }

    // --- navigation ---

    #[test]
    fn prev_crosses_the_year_boundary() {
        assert_eq!(month(2025, 1).prev(), month(2024, 12));
    }

    #[test]
    fn next_crosses_the_year_boundary() {
        assert_eq!(month(2024, 12).next(), month(2025, 1));
    }

    #[test]
    fn stepping_from_a_long_month_clamps_to_day_one() {
        // From March 31 there is no February 31 to land on; navigation
        // always resolves to the first of the target month.
        let march_31 = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
        let here = Month::containing(march_31);
        assert_eq!(here.prev().first_day(), NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        assert_eq!(here.next().first_day(), NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
    }

    #[test]
    fn prev_then_next_returns_to_the_start() {
        let start = month(2025, 7);
        assert_eq!(start.prev().next(), start);
        assert_eq!(start.next().prev(), start);
    }

    // --- parsing and display ---

    #[test]
    fn parses_the_yyyy_mm_form() {
        let parsed: Month = "2025-03".parse().unwrap();
        assert_eq!(parsed, month(2025, 3));
        assert_eq!("2025-3".parse::<Month>().unwrap(), month(2025, 3));
    }

    #[test]
    fn rejects_malformed_month_arguments() {
        for bad in ["2025", "2025-13", "2025-00", "hello", "03-2025x", ""] {
            assert!(bad.parse::<Month>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        let original = month(2024, 11);
        assert_eq!(original.to_string(), "2024-11");
        assert_eq!(original.to_string().parse::<Month>().unwrap(), original);
    }

    #[test]
    fn label_spells_out_the_month() {
        assert_eq!(month(2025, 1).label(), "January 2025");
    }

    #[test]
    fn month_rejects_out_of_range_values() {
        assert!(Month::new(2025, 0).is_err());
        assert!(Month::new(2025, 13).is_err());
    }

    #[test]
    fn week_start_parses_leniently_but_rejects_garbage() {
        assert_eq!("Sunday".parse::<WeekStart>().unwrap(), WeekStart::Sunday);
        assert_eq!("mon".parse::<WeekStart>().unwrap(), WeekStart::Monday);
        assert!("wednesday".parse::<WeekStart>().is_err());
    }
}
