//! Domain model for events and their attendee rosters.
//!
//! # Responsibility
//! - Define the canonical data structures used by the store and views.
//! - Keep creation input, partial-update, and validation shapes together
//!   with the records they describe.
//!
//! # Invariants
//! - Every event is identified by a stable `EventId`.
//! - Attendees exist only inside their owning event's roster.

pub mod event;
