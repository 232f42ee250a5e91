//! Per-variant event constructors.
//!
//! # Responsibility
//! - Build events from raw field text collected by an outer layer.
//! - Let callers pick a constructor from an [`EventType`] at runtime.
//!
//! # Invariants
//! - Factories do no I/O and validate nothing beyond the date.

use crate::model::date::EventDate;
use crate::model::event::{Event, EventError, EventKind, EventType};

/// Constructor for one event variant.
///
/// `extra1`/`extra2` map to the variant's own fields in declaration order
/// (duration/instructor, band name/genre, speakers/topics).
pub trait EventFactory {
    /// Variant produced by this factory.
    fn event_type(&self) -> EventType;

    /// Builds a new event.
    ///
    /// # Errors
    /// - Returns [`EventError::InvalidDateFormat`] when `date` does not parse.
    fn create(
        &self,
        name: &str,
        date: &str,
        location: &str,
        extra1: &str,
        extra2: &str,
    ) -> Result<Event, EventError> {
        let date = EventDate::parse(date)?;
        Ok(Event::new(
            name,
            date,
            location,
            self.payload(extra1.to_string(), extra2.to_string()),
        ))
    }

    /// Wraps the two variant-specific values into a payload.
    fn payload(&self, extra1: String, extra2: String) -> EventKind;
}

pub struct WorkshopFactory;

impl EventFactory for WorkshopFactory {
    fn event_type(&self) -> EventType {
        EventType::Workshop
    }

    fn payload(&self, duration: String, instructor: String) -> EventKind {
        EventKind::Workshop {
            duration,
            instructor,
        }
    }
}

pub struct ConcertFactory;

impl EventFactory for ConcertFactory {
    fn event_type(&self) -> EventType {
        EventType::Concert
    }

    fn payload(&self, band_name: String, genre: String) -> EventKind {
        EventKind::Concert { band_name, genre }
    }
}

pub struct ConferenceFactory;

impl EventFactory for ConferenceFactory {
    fn event_type(&self) -> EventType {
        EventType::Conference
    }

    fn payload(&self, speakers: String, topics: String) -> EventKind {
        EventKind::Conference { speakers, topics }
    }
}

/// Returns the factory registered for `event_type`.
pub fn factory_for(event_type: EventType) -> &'static dyn EventFactory {
    match event_type {
        EventType::Workshop => &WorkshopFactory,
        EventType::Concert => &ConcertFactory,
        EventType::Conference => &ConferenceFactory,
    }
}

#[cfg(test)]
mod tests {
    use super::factory_for;
    use crate::model::event::EventType;

    #[test]
    fn registry_returns_matching_factory() {
        for event_type in EventType::ALL {
            assert_eq!(factory_for(event_type).event_type(), event_type);
        }
    }
}
