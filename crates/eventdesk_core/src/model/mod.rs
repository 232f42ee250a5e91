//! Event domain model.
//!
//! # Responsibility
//! - Define the event record, its variants and the calendar date value.
//! - Provide factories that build events from raw field text.
//!
//! # Invariants
//! - Every event is identified by a stable `EventId`.
//! - An event cannot exist with an invalid date.

pub mod date;
pub mod event;
pub mod factory;
