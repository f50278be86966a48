//! Error types shared across the datebook crates.

use std::fmt;

use chrono::NaiveTime;
use thiserror::Error;

use crate::date_key::DateKey;
use crate::event::Event;

pub type DatebookResult<T> = Result<T, DatebookError>;

/// Errors that can occur in datebook operations
#[derive(Error, Debug)]
pub enum DatebookError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Conflict(#[from] ConflictError),

    #[error("No event starting at {} on {}", .start.format("%H:%M"), .date)]
    EventNotFound { date: DateKey, start: NaiveTime },

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// A submitted event was rejected. Carries one entry per offending field,
/// so a form can mark every problem at once instead of the first found.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid event: {}", list_reasons(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

fn list_reasons(errors: &[FieldError]) -> String {
    let reasons: Vec<String> = errors.iter().map(FieldError::to_string).collect();
    reasons.join("; ")
}

/// A single field-level rejection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {reason}")]
pub struct FieldError {
    pub field: EventField,
    pub reason: String,
}

/// The event fields that validation can reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventField {
    Name,
    StartTime,
    EndTime,
    Description,
}

impl fmt::Display for EventField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EventField::Name => "name",
            EventField::StartTime => "start time",
            EventField::EndTime => "end time",
            EventField::Description => "description",
        };
        write!(f, "{label}")
    }
}

/// The submitted time range overlaps an event already stored on that date.
/// Carries the clashing event so callers can name it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Time slot overlaps an existing event: {existing}")]
pub struct ConflictError {
    pub existing: Event,
}
