//! Event domain model.
//!
//! # Responsibility
//! - Define the shared event record and its closed set of variants.
//! - Render the per-variant detail line consumed by display layers.
//! - Own the append-only RSVP ledger.
//!
//! # Invariants
//! - `date` is a valid calendar date for the whole event lifetime.
//! - `id` is stable and never reused for another event.
//! - RSVP entries keep insertion order; duplicates and empty names are kept.

use crate::model::date::EventDate;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier assigned to every event at construction.
pub type EventId = Uuid;

/// Construction-time failure for event values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    /// Date text is not a real `YYYY-MM-DD` calendar date.
    InvalidDateFormat { value: String },
}

impl EventError {
    pub(crate) fn invalid_date(value: &str) -> Self {
        Self::InvalidDateFormat {
            value: value.to_string(),
        }
    }
}

impl Display for EventError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateFormat { value } => {
                write!(f, "invalid event date `{value}`; expected YYYY-MM-DD")
            }
        }
    }
}

impl Error for EventError {}

/// Variant tag used by type-based search and factory selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    Workshop,
    Concert,
    Conference,
}

impl EventType {
    /// All variants in menu order.
    pub const ALL: [EventType; 3] = [Self::Workshop, Self::Concert, Self::Conference];

    /// Resolves an exact, case-sensitive tag such as `"Concert"`.
    ///
    /// Returns `None` for anything else; callers treat that as "no match".
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Workshop" => Some(Self::Workshop),
            "Concert" => Some(Self::Concert),
            "Conference" => Some(Self::Conference),
            _ => None,
        }
    }

    /// Returns the canonical tag text.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Workshop => "Workshop",
            Self::Concert => "Concert",
            Self::Conference => "Conference",
        }
    }
}

impl Display for EventType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant-specific payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EventKind {
    Workshop {
        duration: String,
        instructor: String,
    },
    Concert {
        band_name: String,
        genre: String,
    },
    Conference {
        speakers: String,
        topics: String,
    },
}

impl EventKind {
    /// Returns the tag of this payload.
    pub fn event_type(&self) -> EventType {
        match self {
            Self::Workshop { .. } => EventType::Workshop,
            Self::Concert { .. } => EventType::Concert,
            Self::Conference { .. } => EventType::Conference,
        }
    }
}

/// A scheduled occurrence with shared fields plus a variant payload.
///
/// Name, date, location and payload are plain fields; the RSVP ledger is
/// only reachable through [`Event::add_rsvp`] so it stays append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub date: EventDate,
    pub location: String,
    pub kind: EventKind,
    rsvps: Vec<String>,
}

impl Event {
    /// Creates an event with a generated id and an empty RSVP ledger.
    pub fn new(
        name: impl Into<String>,
        date: EventDate,
        location: impl Into<String>,
        kind: EventKind,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), name, date, location, kind)
    }

    /// Creates an event with a caller-provided id.
    pub fn with_id(
        id: EventId,
        name: impl Into<String>,
        date: EventDate,
        location: impl Into<String>,
        kind: EventKind,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            date,
            location: location.into(),
            kind,
            rsvps: Vec::new(),
        }
    }

    /// Returns the variant tag.
    pub fn event_type(&self) -> EventType {
        self.kind.event_type()
    }

    /// Human-readable one-line summary.
    ///
    /// The layout is fixed per variant and consumed verbatim by display code.
    pub fn details(&self) -> String {
        let Self {
            name,
            date,
            location,
            ..
        } = self;
        match &self.kind {
            EventKind::Workshop {
                duration,
                instructor,
            } => format!("Workshop: {name} on {date} at {location} in {duration} by {instructor}"),
            EventKind::Concert { band_name, genre } => format!(
                "Concert: {name} on {date} at {location} with genre {genre} by {band_name}"
            ),
            EventKind::Conference { speakers, topics } => {
                format!("Conference: {name} on {date} at {location} by {speakers} about {topics}")
            }
        }
    }

    /// Returns whether the event happens strictly after `today`.
    ///
    /// An event dated `today` is not upcoming.
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.date.as_naive() > today
    }

    /// Appends one attendee to the ledger.
    pub fn add_rsvp(&mut self, attendee: impl Into<String>) {
        self.rsvps.push(attendee.into());
    }

    /// Attendees in RSVP order.
    pub fn rsvps(&self) -> &[String] {
        &self.rsvps
    }

    pub fn rsvp_count(&self) -> usize {
        self.rsvps.len()
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.details())
    }
}
