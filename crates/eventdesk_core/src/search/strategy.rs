//! In-memory event filters.
//!
//! # Responsibility
//! - Select events by date, variant tag or location.
//!
//! # Invariants
//! - Results keep the input order; nothing is sorted or deduplicated.
//! - Filters never mutate the events they read.
//! - Unknown type tags produce an empty result, not an error.

use crate::model::date::EventDate;
use crate::model::event::{Event, EventType};
use log::debug;

/// Filter over a borrowed slice of events.
pub trait SearchStrategy {
    /// Returns whether a single event passes the filter.
    fn matches(&self, event: &Event) -> bool;

    /// Returns matching events in their original relative order.
    fn search<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        events.iter().filter(|event| self.matches(event)).collect()
    }
}

/// Search by exact calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSearch(pub EventDate);

impl SearchStrategy for DateSearch {
    fn matches(&self, event: &Event) -> bool {
        event.date == self.0
    }
}

/// Search by variant tag text (`Workshop|Concert|Conference`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSearch {
    wanted: Option<EventType>,
}

impl TypeSearch {
    /// Builds a type filter from raw, case-sensitive tag text.
    pub fn new(tag: &str) -> Self {
        Self {
            wanted: EventType::from_tag(tag),
        }
    }
}

impl SearchStrategy for TypeSearch {
    fn matches(&self, event: &Event) -> bool {
        self.wanted == Some(event.event_type())
    }
}

/// Search by exact location text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationSearch(pub String);

impl SearchStrategy for LocationSearch {
    fn matches(&self, event: &Event) -> bool {
        event.location == self.0
    }
}

/// Tagged search request accepted by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCriterion {
    ByDate(EventDate),
    /// Raw tag text; unrecognized tags match nothing.
    ByType(String),
    ByLocation(String),
}

impl SearchStrategy for SearchCriterion {
    fn matches(&self, event: &Event) -> bool {
        match self {
            Self::ByDate(date) => DateSearch(*date).matches(event),
            Self::ByType(tag) => TypeSearch::new(tag).matches(event),
            Self::ByLocation(location) => event.location == *location,
        }
    }

    fn search<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        // Resolve the tag once instead of per event.
        match self {
            Self::ByType(tag) => TypeSearch::new(tag).search(events),
            _ => events.iter().filter(|event| self.matches(event)).collect(),
        }
    }
}

/// Runs `criterion` over `events`.
pub fn search_events<'a>(events: &'a [Event], criterion: &SearchCriterion) -> Vec<&'a Event> {
    let hits = criterion.search(events);
    debug!(
        "event=search module=search status=ok criterion={} scanned={} hits={}",
        criterion_label(criterion),
        events.len(),
        hits.len()
    );
    hits
}

fn criterion_label(criterion: &SearchCriterion) -> &'static str {
    match criterion {
        SearchCriterion::ByDate(_) => "date",
        SearchCriterion::ByType(_) => "type",
        SearchCriterion::ByLocation(_) => "location",
    }
}
