use eventdesk_core::{
    factory_for, ConcertFactory, ConferenceFactory, EventError, EventFactory, EventKind,
    EventType, WorkshopFactory,
};

#[test]
fn workshop_factory_maps_extra_fields() {
    let event = WorkshopFactory
        .create("Intro", "2025-03-14", "Lab 3", "2 hours", "Grace")
        .unwrap();

    assert_eq!(event.event_type(), EventType::Workshop);
    assert_eq!(
        event.kind,
        EventKind::Workshop {
            duration: "2 hours".to_string(),
            instructor: "Grace".to_string(),
        }
    );
    assert!(event.details().contains("2025-03-14"));
}

#[test]
fn concert_factory_maps_band_then_genre() {
    let event = ConcertFactory
        .create("Night Out", "2025-06-01", "Arena", "The Band", "rock")
        .unwrap();

    assert_eq!(
        event.kind,
        EventKind::Concert {
            band_name: "The Band".to_string(),
            genre: "rock".to_string(),
        }
    );
}

#[test]
fn conference_factory_maps_speakers_then_topics() {
    let event = ConferenceFactory
        .create("RustConf", "2025-09-10", "Portland", "Ferris", "ownership")
        .unwrap();

    assert_eq!(
        event.details(),
        "Conference: RustConf on 2025-09-10 at Portland by Ferris about ownership"
    );
}

#[test]
fn factories_reject_invalid_dates() {
    for event_type in EventType::ALL {
        let err = factory_for(event_type)
            .create("x", "2025-13-01", "y", "a", "b")
            .unwrap_err();
        assert_eq!(
            err,
            EventError::InvalidDateFormat {
                value: "2025-13-01".to_string()
            }
        );
    }
}

#[test]
fn factories_accept_empty_extra_fields() {
    let event = factory_for(EventType::Concert)
        .create("", "2025-03-14", "", "", "")
        .unwrap();

    assert_eq!(event.details(), "Concert:  on 2025-03-14 at  with genre  by ");
}

#[test]
fn each_factory_yields_a_fresh_id() {
    let a = WorkshopFactory
        .create("same", "2025-03-14", "here", "1h", "me")
        .unwrap();
    let b = WorkshopFactory
        .create("same", "2025-03-14", "here", "1h", "me")
        .unwrap();

    assert_ne!(a.id, b.id);
}
