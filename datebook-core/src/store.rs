//! The event store: date-keyed, ordered, conflict-checked event lists.

use std::collections::BTreeMap;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::date_key::DateKey;
use crate::error::{ConflictError, DatebookError, DatebookResult};
use crate::event::{Event, EventDraft};

/// All stored events, keyed by [`DateKey`].
///
/// Within one date, events keep insertion order (which is also display
/// order) and no two half-open `[start, end)` ranges overlap. Keys always
/// map to non-empty lists: removing a date's last event drops the key.
///
/// Serializes as the bare `{ "DD-MM-YYYY": [event, ...] }` object that the
/// snapshot file holds.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventStore {
    days: BTreeMap<DateKey, Vec<Event>>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The events stored on a date, in insertion order. Empty if none.
    pub fn events_on(&self, date: &DateKey) -> &[Event] {
        self.days.get(date).map(Vec::as_slice).unwrap_or_default()
    }

    /// Validate a submitted event and append it on the given date.
    ///
    /// Field validation runs first and reports every offending field in one
    /// [`ValidationError`](crate::error::ValidationError); only a fully valid
    /// event is checked for overlap against the date's existing events, and a
    /// clash names the stored event it hit. On any failure the store is left
    /// exactly as it was.
    pub fn add_event(&mut self, date: DateKey, draft: EventDraft) -> DatebookResult<()> {
        let candidate = Event::try_from(draft)?;

        if let Some(existing) = self.events_on(&date).iter().find(|e| e.overlaps(&candidate)) {
            return Err(ConflictError {
                existing: existing.clone(),
            }
            .into());
        }

        self.days.entry(date).or_default().push(candidate);
        Ok(())
    }

    /// Remove the event starting at `start` on the given date and return it.
    ///
    /// Start times identify events within a date: stored ranges are
    /// non-empty and never overlap, so no two can share a start. Removing a
    /// date's last event drops the key, keeping [`dates`](Self::dates) free
    /// of empty days.
    pub fn remove_event(&mut self, date: &DateKey, start: NaiveTime) -> DatebookResult<Event> {
        let not_found = || DatebookError::EventNotFound {
            date: date.clone(),
            start,
        };

        let events = self.days.get_mut(date).ok_or_else(not_found)?;
        let index = events
            .iter()
            .position(|e| e.start_time() == start)
            .ok_or_else(not_found)?;

        let removed = events.remove(index);
        if events.is_empty() {
            self.days.remove(date);
        }
        Ok(removed)
    }

    /// Case-insensitive substring filter over a date's event names,
    /// preserving stored order. An empty needle matches everything;
    /// minimum-length policies belong to callers.
    pub fn filter_by_name(&self, date: &DateKey, needle: &str) -> Vec<&Event> {
        let needle = needle.to_lowercase();
        self.events_on(date)
            .iter()
            .filter(|e| e.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// The dates that currently hold events, ascending by key string.
    pub fn dates(&self) -> impl Iterator<Item = &DateKey> {
        self.days.keys()
    }

    /// How many events a date holds.
    pub fn event_count(&self, date: &DateKey) -> usize {
        self.days.get(date).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
