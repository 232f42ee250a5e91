//! Core domain logic for EventDesk.
//! This crate is the single source of truth for event, search and reminder rules.

pub mod config;
pub mod logging;
pub mod model;
pub mod notify;
pub mod search;
pub mod service;

pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::date::EventDate;
pub use model::event::{Event, EventError, EventId, EventKind, EventType};
pub use model::factory::{
    factory_for, ConcertFactory, ConferenceFactory, EventFactory, WorkshopFactory,
};
pub use notify::scheduler::{due, Notification, NotificationPreference, Remaining};
pub use search::strategy::{
    search_events, DateSearch, LocationSearch, SearchCriterion, SearchStrategy, TypeSearch,
};
pub use service::catalog::{today_utc, Attendance, EventCatalog};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
