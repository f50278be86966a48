//! Event model and validation.
//!
//! Submitted event data arrives as an [`EventDraft`] with raw string fields.
//! Converting a draft into an [`Event`] runs the full field validation and
//! reports every problem at once; an `Event` in hand therefore always
//! satisfies the field rules and `start_time < end_time`.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{EventField, FieldError, ValidationError};

pub const NAME_MIN_CHARS: usize = 3;
pub const NAME_MAX_CHARS: usize = 40;
pub const DESCRIPTION_MIN_CHARS: usize = 3;
pub const DESCRIPTION_MAX_CHARS: usize = 150;

/// Unvalidated event fields, as collected from a form or read back from a
/// snapshot. Times are raw strings here; [`Event`] is the validated form.
///
/// This is also the wire shape: snapshots store events with camelCase field
/// names (`startTime`, `endTime`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub description: String,
}

impl EventDraft {
    pub fn new(name: &str, start_time: &str, end_time: &str, description: &str) -> Self {
        EventDraft {
            name: name.to_string(),
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            description: description.to_string(),
        }
    }
}

/// A validated calendar event: a named, described activity spanning the
/// half-open range `[start_time, end_time)` within a single day.
///
/// Fields stay private so the only way to build one is through draft
/// validation. Editing means building a fresh draft and validating again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EventDraft", into = "EventDraft")]
pub struct Event {
    name: String,
    start_time: NaiveTime,
    end_time: NaiveTime,
    description: String,
}

impl Event {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Half-open interval test: an event ending at 10:00 does not overlap
    /// one starting at 10:00.
    pub fn overlaps(&self, other: &Event) -> bool {
        self.start_time < other.end_time && other.start_time < self.end_time
    }

    /// The `HH:MM-HH:MM` span shown in listings.
    pub fn time_span(&self) -> String {
        format!(
            "{}-{}",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.time_span(), self.name)
    }
}

impl TryFrom<EventDraft> for Event {
    type Error = ValidationError;

    /// Validates every field and collects all failures in field order
    /// (name, start time, end time, description), then checks that the
    /// start precedes the end. The ordering rule only runs once both times
    /// parse, and is reported against the end time field.
    fn try_from(draft: EventDraft) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();

        check_length(EventField::Name, &draft.name, NAME_MIN_CHARS, NAME_MAX_CHARS, &mut errors);
        let start = check_time(EventField::StartTime, &draft.start_time, &mut errors);
        let end = check_time(EventField::EndTime, &draft.end_time, &mut errors);
        check_length(
            EventField::Description,
            &draft.description,
            DESCRIPTION_MIN_CHARS,
            DESCRIPTION_MAX_CHARS,
            &mut errors,
        );

        if let (Some(start), Some(end)) = (start, end) {
            if start >= end {
                errors.push(FieldError {
                    field: EventField::EndTime,
                    reason: "End time must be after start time".to_string(),
                });
            }
        }

        match (start, end) {
            (Some(start_time), Some(end_time)) if errors.is_empty() => Ok(Event {
                name: draft.name,
                start_time,
                end_time,
                description: draft.description,
            }),
            _ => Err(ValidationError { errors }),
        }
    }
}

impl From<Event> for EventDraft {
    fn from(event: Event) -> Self {
        EventDraft {
            name: event.name,
            start_time: event.start_time.format("%H:%M").to_string(),
            end_time: event.end_time.format("%H:%M").to_string(),
            description: event.description,
        }
    }
}

fn check_length(
    field: EventField,
    value: &str,
    min: usize,
    max: usize,
    errors: &mut Vec<FieldError>,
) {
    let chars = value.chars().count();
    if chars < min {
        errors.push(FieldError {
            field,
            reason: format!("Must be at least {min} characters"),
        });
    } else if chars > max {
        errors.push(FieldError {
            field,
            reason: format!("Must be at most {max} characters"),
        });
    }
}

fn check_time(field: EventField, value: &str, errors: &mut Vec<FieldError>) -> Option<NaiveTime> {
    let parsed = parse_hhmm(value);
    if parsed.is_none() {
        errors.push(FieldError {
            field,
            reason: format!("Must be a time in HH:MM form, got \"{value}\""),
        });
    }
    parsed
}

/// Strict `HH:MM` parse: exactly five characters, zero-padded, 00-23 hours.
///
/// Stricter than [`NaiveTime::parse_from_str`] alone, which also accepts
/// un-padded forms like `9:30`.
pub fn parse_hhmm(value: &str) -> Option<NaiveTime> {
    let bytes = value.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }
    if ![0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit()) {
        return None;
    }
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}
