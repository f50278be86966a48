//! Stable string keys for calendar dates.
//!
//! Events are grouped under the `DD-MM-YYYY` rendering of their date. The
//! encoding is one-way: nothing in the crate parses a key back into a date,
//! a key only has to be stable and collision-free per calendar day.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A calendar date rendered as `DD-MM-YYYY`, e.g. `05-01-2025`.
///
/// Two dates produce the same key exactly when they fall on the same day;
/// day and month are always zero-padded to two digits. Keys order
/// lexicographically (day first), not chronologically, which is fine for the
/// store: it only needs a deterministic order within one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct DateKey(String);

impl DateKey {
    /// Encode a date as its snapshot key.
    pub fn from_date(date: NaiveDate) -> Self {
        DateKey(date.format("%d-%m-%Y").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        DateKey::from_date(date)
    }
}

impl TryFrom<String> for DateKey {
    type Error = String;

    /// Accepts only strings already in the `DD-MM-YYYY` shape. This is a
    /// shape check, not a date parse: it keeps foreign snapshot keys out
    /// without ever decoding a key back into a date.
    fn try_from(value: String) -> Result<Self, Self::Error> {
        let bytes = value.as_bytes();
        let shaped = bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                2 | 5 => *b == b'-',
                _ => b.is_ascii_digit(),
            });
        if shaped {
            Ok(DateKey(value))
        } else {
            Err(format!("Not a DD-MM-YYYY date key: \"{value}\""))
        }
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn pads_day_and_month_to_two_digits() {
        assert_eq!(DateKey::from_date(date(2025, 1, 5)).as_str(), "05-01-2025");
    }

    #[test]
    fn keeps_two_digit_parts_as_is() {
        assert_eq!(DateKey::from_date(date(2024, 12, 31)).as_str(), "31-12-2024");
    }

    #[test]
    fn same_day_encodes_to_same_key() {
        let morning = date(2025, 3, 14).and_hms_opt(8, 30, 0).unwrap();
        let evening = date(2025, 3, 14).and_hms_opt(22, 15, 0).unwrap();
        assert_eq!(
            DateKey::from_date(morning.date()),
            DateKey::from_date(evening.date())
        );
    }

    #[test]
    fn different_days_encode_to_different_keys() {
        assert_ne!(DateKey::from_date(date(2025, 1, 2)), DateKey::from_date(date(2025, 2, 1)));
    }

    #[test]
    fn displays_as_the_raw_key() {
        assert_eq!(DateKey::from_date(date(2025, 6, 1)).to_string(), "01-06-2025");
    }

    #[test]
    fn serializes_as_a_bare_string() {
        let json = serde_json::to_string(&DateKey::from_date(date(2025, 1, 1))).unwrap();
        assert_eq!(json, "\"01-01-2025\"");
    }

    #[test]
    fn deserializing_accepts_the_key_shape() {
        let key: DateKey = serde_json::from_str("\"31-12-2024\"").unwrap();
        assert_eq!(key.as_str(), "31-12-2024");
    }

    #[test]
    fn deserializing_rejects_foreign_shapes() {
        for bad in ["\"2025-01-01\"", "\"1-1-2025\"", "\"01/01/2025\"", "\"aa-bb-cccc\"", "\"01-01-25\""] {
            assert!(serde_json::from_str::<DateKey>(bad).is_err(), "accepted {bad}");
        }
    }
}
