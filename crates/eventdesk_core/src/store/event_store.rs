//! In-memory event registry with selection and busy-flag state.
//!
//! # Responsibility
//! - Provide the complete mutation surface for events and rosters.
//! - Generate ids and timestamps at the moment a record is created.
//!
//! # Invariants
//! - Event ids are unique across the collection (fresh v4 per create).
//! - Every operation is total: unknown ids produce `Err` plus an unchanged
//!   collection, never a panic.
//! - Capacity (`max_attendees`) is never checked here; the cap is soft.

use crate::model::event::{
    Attendee, AttendeeId, AttendeeSignup, Event, EventDraft, EventId, EventPatch,
};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Missing-id outcome of a store operation.
///
/// Callers that want the original UI's fire-and-forget behavior can drop
/// the result; the collection is untouched either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    EventNotFound(EventId),
    AttendeeNotFound {
        event_id: EventId,
        attendee_id: AttendeeId,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventNotFound(id) => write!(f, "event not found: {id}"),
            Self::AttendeeNotFound {
                event_id,
                attendee_id,
            } => write!(f, "attendee {attendee_id} not found on event {event_id}"),
        }
    }
}

impl Error for StoreError {}

/// Sole owner of the event collection, the focused-event id, and the
/// busy flag.
///
/// Constructed explicitly and passed to whoever drives it; there is no
/// process-global instance.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
    selected: Option<EventId>,
    loading: bool,
}

impl EventStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store preloaded with the sample records.
    pub fn seeded() -> Self {
        Self {
            events: crate::store::seed::sample_events(),
            selected: None,
            loading: false,
        }
    }

    /// Read view over the collection, in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns one event by id.
    pub fn get_event(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Creates an event from a draft and appends it to the collection.
    ///
    /// # Contract
    /// - Generates a fresh id and `created_at`, starts with an empty roster.
    /// - Performs no validation; that is the input boundary's job
    ///   ([`EventDraft::validate`]).
    pub fn create_event(&mut self, draft: EventDraft) -> EventId {
        let event = Event::new(draft);
        let id = event.id;
        self.events.push(event);
        debug!("event=event_created module=store status=ok id={id}");
        id
    }

    /// Merges a patch over the event with the given id.
    ///
    /// Unknown ids leave the collection untouched and return
    /// [`StoreError::EventNotFound`]. An empty patch on a known id is `Ok`
    /// and changes nothing.
    pub fn update_event(&mut self, id: EventId, patch: EventPatch) -> StoreResult<()> {
        let Some(event) = self.events.iter_mut().find(|event| event.id == id) else {
            warn!("event=event_update_skipped module=store status=not_found id={id}");
            return Err(StoreError::EventNotFound(id));
        };
        patch.apply(event);
        debug!("event=event_updated module=store status=ok id={id}");
        Ok(())
    }

    /// Removes the event with the given id.
    ///
    /// Clears the selection when the removed event was the selected one;
    /// any other selection is left untouched. A second delete of the same
    /// id is a reported no-op.
    pub fn delete_event(&mut self, id: EventId) -> StoreResult<()> {
        let Some(position) = self.events.iter().position(|event| event.id == id) else {
            warn!("event=event_delete_skipped module=store status=not_found id={id}");
            return Err(StoreError::EventNotFound(id));
        };
        self.events.remove(position);
        if self.selected == Some(id) {
            self.selected = None;
        }
        debug!("event=event_deleted module=store status=ok id={id}");
        Ok(())
    }

    /// Sets or clears the focused event id.
    ///
    /// Pure UI-focus state: the id is not checked against the collection,
    /// so a stale selection simply resolves to nothing.
    pub fn select_event(&mut self, id: Option<EventId>) {
        self.selected = id;
    }

    /// Currently focused event id, if any.
    pub fn selected_id(&self) -> Option<EventId> {
        self.selected
    }

    /// Resolves the focused id against the live collection.
    pub fn selected_event(&self) -> Option<&Event> {
        self.selected.and_then(|id| self.get_event(id))
    }

    /// Registers an attendee on the event with the given id.
    ///
    /// # Contract
    /// - Generates a fresh attendee id and `registered_at`.
    /// - Does NOT check the roster against `max_attendees`; overshooting
    ///   the soft cap is permitted.
    pub fn add_attendee(
        &mut self,
        event_id: EventId,
        signup: AttendeeSignup,
    ) -> StoreResult<AttendeeId> {
        let Some(event) = self.events.iter_mut().find(|event| event.id == event_id) else {
            warn!("event=attendee_add_skipped module=store status=not_found id={event_id}");
            return Err(StoreError::EventNotFound(event_id));
        };
        let attendee = Attendee::new(signup);
        let attendee_id = attendee.id;
        event.attendees.push(attendee);
        debug!(
            "event=attendee_added module=store status=ok id={event_id} attendee={attendee_id}"
        );
        Ok(attendee_id)
    }

    /// Removes one attendee from one event's roster.
    pub fn remove_attendee(
        &mut self,
        event_id: EventId,
        attendee_id: AttendeeId,
    ) -> StoreResult<()> {
        let Some(event) = self.events.iter_mut().find(|event| event.id == event_id) else {
            warn!("event=attendee_remove_skipped module=store status=not_found id={event_id}");
            return Err(StoreError::EventNotFound(event_id));
        };
        let Some(position) = event
            .attendees
            .iter()
            .position(|attendee| attendee.id == attendee_id)
        else {
            warn!(
                "event=attendee_remove_skipped module=store status=not_found \
                 id={event_id} attendee={attendee_id}"
            );
            return Err(StoreError::AttendeeNotFound {
                event_id,
                attendee_id,
            });
        };
        event.attendees.remove(position);
        debug!(
            "event=attendee_removed module=store status=ok id={event_id} attendee={attendee_id}"
        );
        Ok(())
    }

    /// Sets the transient busy flag. Cosmetic only; no operation consults it.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
