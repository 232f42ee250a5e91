//! Event catalog use-case service.
//!
//! # Responsibility
//! - Own the in-memory event collection and the notification preference.
//! - Delegate construction, search and reminder computation to core modules.
//!
//! # Invariants
//! - The catalog is the only owner of its events; callers get borrows.
//! - Events are kept in insertion order and never removed.
//! - Name lookups are exact matches; the first match wins on collisions.

use crate::config::CoreConfig;
use crate::model::event::{Event, EventError, EventId, EventType};
use crate::model::factory::factory_for;
use crate::notify::scheduler::{self, Notification, NotificationPreference};
use crate::search::strategy::{search_events, SearchCriterion};
use chrono::{NaiveDate, Utc};
use log::{debug, info};

/// Attendance snapshot for one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attendance {
    pub count: usize,
    /// Attendees in RSVP order.
    pub attendees: Vec<String>,
}

/// In-memory catalog of scheduled events.
#[derive(Debug, Default)]
pub struct EventCatalog {
    events: Vec<Event>,
    preference: NotificationPreference,
}

impl EventCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty catalog seeded with the configured preference.
    pub fn from_config(config: &CoreConfig) -> Self {
        Self {
            events: Vec::new(),
            preference: config.notification_preference,
        }
    }

    /// Stores an already-built event and returns its id.
    pub fn add(&mut self, event: Event) -> EventId {
        let id = event.id;
        info!(
            "event=event_added module=catalog status=ok kind={} total={}",
            event.event_type(),
            self.events.len() + 1
        );
        self.events.push(event);
        id
    }

    /// Builds an event through the factory for `event_type` and stores it.
    ///
    /// # Errors
    /// - Returns [`EventError::InvalidDateFormat`] when `date` does not parse;
    ///   the catalog is left unchanged.
    pub fn create(
        &mut self,
        event_type: EventType,
        name: &str,
        date: &str,
        location: &str,
        extra1: &str,
        extra2: &str,
    ) -> Result<EventId, EventError> {
        let event = factory_for(event_type)
            .create(name, date, location, extra1, extra2)
            .map_err(|err| {
                debug!(
                    "event=event_create module=catalog status=error kind={}",
                    event_type
                );
                err
            })?;
        Ok(self.add(event))
    }

    /// All events in insertion order.
    pub fn all(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    /// First event whose name equals `name` exactly.
    pub fn find_by_name(&self, name: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.name == name)
    }

    fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Event> {
        self.events.iter_mut().find(|event| event.name == name)
    }

    /// Records `attendee` on the first event named `event_name`.
    ///
    /// Returns `false` when no event has that name.
    pub fn rsvp(&mut self, event_name: &str, attendee: &str) -> bool {
        match self.find_by_name_mut(event_name) {
            Some(event) => {
                event.add_rsvp(attendee);
                debug!(
                    "event=rsvp module=catalog status=ok event_id={} count={}",
                    event.id,
                    event.rsvp_count()
                );
                true
            }
            None => {
                debug!("event=rsvp module=catalog status=not_found");
                false
            }
        }
    }

    /// Attendance for the first event named `event_name`.
    pub fn attendance_of(&self, event_name: &str) -> Option<Attendance> {
        self.find_by_name(event_name).map(|event| Attendance {
            count: event.rsvp_count(),
            attendees: event.rsvps().to_vec(),
        })
    }

    pub fn preference(&self) -> NotificationPreference {
        self.preference
    }

    pub fn set_preference(&mut self, preference: NotificationPreference) {
        info!(
            "event=preference_set module=catalog status=ok preference={}",
            preference.as_str()
        );
        self.preference = preference;
    }

    /// Events dated strictly after `today`, in insertion order.
    pub fn upcoming(&self, today: NaiveDate) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| event.is_upcoming(today))
            .collect()
    }

    pub fn search(&self, criterion: &SearchCriterion) -> Vec<&Event> {
        search_events(&self.events, criterion)
    }

    /// Reminders for `today` under the current preference.
    pub fn due(&self, today: NaiveDate) -> Vec<Notification<'_>> {
        scheduler::due(&self.events, today, self.preference)
    }

    /// Reminders using the current UTC calendar day as `today`.
    pub fn due_now(&self) -> Vec<Notification<'_>> {
        self.due(today_utc())
    }
}

/// Current calendar day in UTC.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}
