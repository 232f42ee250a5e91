//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `eventdesk_core` linkage without the interactive menu.
//! - Run one deterministic reminder pass against a fixed "today".

use chrono::NaiveDate;
use eventdesk_core::{EventCatalog, EventType, NotificationPreference};

fn main() {
    println!("eventdesk_core version={}", eventdesk_core::core_version());

    let Some(today) = NaiveDate::from_ymd_opt(2025, 3, 7) else {
        return;
    };
    let mut catalog = EventCatalog::new();
    if let Err(err) = catalog.create(
        EventType::Workshop,
        "Intro",
        "2025-03-14",
        "Hall A",
        "2h",
        "Ada",
    ) {
        eprintln!("smoke event rejected: {err}");
        return;
    }
    catalog.set_preference(NotificationPreference::Weekly);

    for notification in catalog.due(today) {
        println!("{notification}");
    }
}
