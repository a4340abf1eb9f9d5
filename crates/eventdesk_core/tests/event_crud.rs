use chrono::{NaiveDate, NaiveTime};
use eventdesk_core::{
    AttendeeSignup, AttendeeStatus, EventDraft, EventPatch, EventStatus, EventStore, StoreError,
};
use std::collections::HashSet;
use uuid::Uuid;

fn draft(title: &str) -> EventDraft {
    EventDraft {
        title: title.to_string(),
        description: "a placeholder description".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
        time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        location: "Community Hall".to_string(),
        category: "Technology".to_string(),
        max_attendees: 40,
        status: EventStatus::Draft,
    }
}

fn signup(name: &str) -> AttendeeSignup {
    AttendeeSignup {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        status: AttendeeStatus::Confirmed,
    }
}

#[test]
fn created_events_get_unique_ids_and_empty_rosters() {
    let mut store = EventStore::new();

    let mut ids = HashSet::new();
    for index in 0..5 {
        let id = store.create_event(draft(&format!("event {index}")));
        assert!(ids.insert(id), "id {id} was issued twice");
    }

    assert_eq!(store.len(), 5);
    for event in store.events() {
        assert!(event.attendees.is_empty());
    }
}

#[test]
fn create_appends_in_order_and_get_event_finds_by_id() {
    let mut store = EventStore::new();
    let first = store.create_event(draft("first"));
    let second = store.create_event(draft("second"));

    assert_eq!(store.events()[0].id, first);
    assert_eq!(store.events()[1].id, second);
    assert_eq!(store.get_event(second).unwrap().title, "second");
    assert!(store.get_event(Uuid::new_v4()).is_none());
}

#[test]
fn update_merges_patch_over_existing_event() {
    let mut store = EventStore::new();
    let id = store.create_event(draft("workshop"));

    store
        .update_event(
            id,
            EventPatch {
                title: Some("workshop v2".to_string()),
                status: Some(EventStatus::Published),
                ..EventPatch::default()
            },
        )
        .unwrap();

    let event = store.get_event(id).unwrap();
    assert_eq!(event.title, "workshop v2");
    assert_eq!(event.status, EventStatus::Published);
    assert_eq!(event.location, "Community Hall");
    assert_eq!(event.max_attendees, 40);
}

#[test]
fn update_with_empty_patch_changes_nothing() {
    let mut store = EventStore::new();
    let id = store.create_event(draft("unchanged"));
    let snapshot = store.get_event(id).unwrap().clone();

    store.update_event(id, EventPatch::default()).unwrap();
    assert_eq!(store.get_event(id).unwrap(), &snapshot);
}

#[test]
fn update_unknown_id_reports_not_found_and_leaves_collection_unchanged() {
    let mut store = EventStore::new();
    store.create_event(draft("only"));
    let snapshot: Vec<_> = store.events().to_vec();

    let unknown = Uuid::new_v4();
    let err = store
        .update_event(
            unknown,
            EventPatch {
                title: Some("never applied".to_string()),
                ..EventPatch::default()
            },
        )
        .unwrap_err();

    assert_eq!(err, StoreError::EventNotFound(unknown));
    assert_eq!(store.events(), snapshot.as_slice());
}

#[test]
fn delete_is_idempotent_in_effect() {
    let mut store = EventStore::new();
    let id = store.create_event(draft("doomed"));

    store.delete_event(id).unwrap();
    assert!(store.is_empty());

    let err = store.delete_event(id).unwrap_err();
    assert_eq!(err, StoreError::EventNotFound(id));
    assert!(store.is_empty());
}

#[test]
fn deleting_the_selected_event_clears_selection() {
    let mut store = EventStore::new();
    let id = store.create_event(draft("focused"));

    store.select_event(Some(id));
    assert_eq!(store.selected_event().unwrap().id, id);

    store.delete_event(id).unwrap();
    assert_eq!(store.selected_id(), None);
    assert!(store.selected_event().is_none());
}

#[test]
fn deleting_another_event_leaves_selection_untouched() {
    let mut store = EventStore::new();
    let kept = store.create_event(draft("kept"));
    let removed = store.create_event(draft("removed"));

    store.select_event(Some(kept));
    store.delete_event(removed).unwrap();

    assert_eq!(store.selected_id(), Some(kept));
    assert_eq!(store.selected_event().unwrap().id, kept);
}

#[test]
fn stale_selection_resolves_to_none_without_error() {
    let mut store = EventStore::new();
    store.select_event(Some(Uuid::new_v4()));

    assert!(store.selected_id().is_some());
    assert!(store.selected_event().is_none());

    store.select_event(None);
    assert!(store.selected_id().is_none());
}

#[test]
fn add_then_remove_attendee_restores_the_roster() {
    let mut store = EventStore::new();
    let event_id = store.create_event(draft("concert"));
    store.add_attendee(event_id, signup("First")).unwrap();
    let before: Vec<_> = store.get_event(event_id).unwrap().attendees.clone();

    let attendee_id = store.add_attendee(event_id, signup("Second")).unwrap();
    assert_eq!(store.get_event(event_id).unwrap().attendees.len(), 2);

    store.remove_attendee(event_id, attendee_id).unwrap();
    assert_eq!(store.get_event(event_id).unwrap().attendees, before);
}

#[test]
fn attendee_ids_are_unique_within_an_event() {
    let mut store = EventStore::new();
    let event_id = store.create_event(draft("meetup"));

    let mut ids = HashSet::new();
    for index in 0..4 {
        let id = store
            .add_attendee(event_id, signup(&format!("guest{index}")))
            .unwrap();
        assert!(ids.insert(id));
    }
}

#[test]
fn add_attendee_ignores_the_capacity_cap() {
    let mut store = EventStore::new();
    let mut tiny = draft("tiny");
    tiny.max_attendees = 1;
    let event_id = store.create_event(tiny);

    for index in 0..3 {
        store
            .add_attendee(event_id, signup(&format!("guest{index}")))
            .unwrap();
    }

    let event = store.get_event(event_id).unwrap();
    assert_eq!(event.attendees.len(), 3);
    assert_eq!(event.max_attendees, 1);
}

#[test]
fn attendee_operations_report_missing_ids_without_mutating() {
    let mut store = EventStore::new();
    let event_id = store.create_event(draft("guarded"));

    let unknown_event = Uuid::new_v4();
    let err = store.add_attendee(unknown_event, signup("ghost")).unwrap_err();
    assert_eq!(err, StoreError::EventNotFound(unknown_event));

    let unknown_attendee = Uuid::new_v4();
    let err = store.remove_attendee(event_id, unknown_attendee).unwrap_err();
    assert_eq!(
        err,
        StoreError::AttendeeNotFound {
            event_id,
            attendee_id: unknown_attendee,
        }
    );
    assert!(store.get_event(event_id).unwrap().attendees.is_empty());
}

#[test]
fn loading_flag_toggles_without_touching_data() {
    let mut store = EventStore::new();
    store.create_event(draft("steady"));
    assert!(!store.is_loading());

    store.set_loading(true);
    assert!(store.is_loading());
    assert_eq!(store.len(), 1);

    store.set_loading(false);
    assert!(!store.is_loading());
}

#[test]
fn seeded_store_starts_with_the_sample_records() {
    let store = EventStore::seeded();
    assert_eq!(store.len(), 2);
    assert_eq!(store.events()[0].title, "Tech Conference 2024");
    assert_eq!(store.events()[1].title, "Digital Marketing Workshop");
    assert!(store.selected_id().is_none());
    assert!(!store.is_loading());
}
