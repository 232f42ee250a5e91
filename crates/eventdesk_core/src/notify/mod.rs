//! Upcoming-event reminders.
//!
//! # Responsibility
//! - Turn the event collection plus a reference day into reminder values.
//! - Leave delivery (printing, pushing) to callers.

pub mod scheduler;
