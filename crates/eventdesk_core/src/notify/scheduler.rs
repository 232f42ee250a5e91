//! Date-driven reminder computation.
//!
//! # Responsibility
//! - Decide which events deserve a reminder for a given day and preference.
//! - Produce the remaining-time message for each reminder.
//!
//! # Invariants
//! - Only upcoming events (strictly after `today`) are announced.
//! - `Weekly` fires only when the remaining days are an exact multiple of 7.
//! - `None` never produces reminders.
//! - One pass is a pure computation; nothing is scheduled or stored.

use crate::model::event::Event;
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

const DAYS_PER_WEEK: i64 = 7;

/// How often upcoming-event reminders are produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationPreference {
    #[default]
    None,
    Daily,
    Weekly,
}

impl NotificationPreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }
}

/// Time left until an announced event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remaining {
    Days(i64),
    Weeks(i64),
}

/// One reminder produced by a scheduler pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification<'a> {
    pub event: &'a Event,
    pub remaining: Remaining,
}

impl Notification<'_> {
    /// Display text for this reminder.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl Display for Notification<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.remaining {
            Remaining::Days(days) => {
                write!(f, "Remain {days} days for event: {}", self.event.name)
            }
            Remaining::Weeks(weeks) => {
                write!(f, "Upcoming event: {} within {weeks} weeks.", self.event.name)
            }
        }
    }
}

/// Computes reminders for `today` under `preference`.
///
/// Events are visited in order and the output keeps that order.
pub fn due<'a>(
    events: &'a [Event],
    today: NaiveDate,
    preference: NotificationPreference,
) -> Vec<Notification<'a>> {
    if preference == NotificationPreference::None {
        return Vec::new();
    }

    let notifications = events
        .iter()
        .filter(|event| event.is_upcoming(today))
        .filter_map(|event| {
            remaining_for(event.date.days_until(today), preference)
                .map(|remaining| Notification { event, remaining })
        })
        .collect::<Vec<_>>();

    debug!(
        "event=notify_pass module=notify status=ok preference={} today={} scanned={} due={}",
        preference.as_str(),
        today,
        events.len(),
        notifications.len()
    );
    notifications
}

fn remaining_for(delta_days: i64, preference: NotificationPreference) -> Option<Remaining> {
    match preference {
        NotificationPreference::None => None,
        NotificationPreference::Daily => Some(Remaining::Days(delta_days)),
        NotificationPreference::Weekly if delta_days % DAYS_PER_WEEK == 0 => {
            Some(Remaining::Weeks(delta_days / DAYS_PER_WEEK))
        }
        NotificationPreference::Weekly => None,
    }
}
