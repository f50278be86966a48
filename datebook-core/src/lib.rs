//! Core types for the datebook calendar.
//!
//! Everything here is synchronous, single-user state: a date-keyed
//! [`EventStore`] with validation and overlap rules, [`Month`] arithmetic
//! for the grid view, and a JSON [`Snapshot`] adapter that persists the
//! store between runs. The CLI in the workspace root is the presentation
//! layer on top.

pub mod config;
pub mod date_key;
pub mod error;
pub mod event;
pub mod month;
pub mod snapshot;
pub mod store;

pub use config::DatebookConfig;
pub use date_key::DateKey;
pub use error::{
    ConflictError, DatebookError, DatebookResult, EventField, FieldError, ValidationError,
};
pub use event::{Event, EventDraft};
pub use month::{Month, WeekStart};
pub use snapshot::Snapshot;
pub use store::EventStore;
