//! Event store: the single owner of all mutable dashboard state.
//!
//! # Responsibility
//! - Funnel every mutation of the event collection through one API.
//! - Keep selection and the busy flag next to the data they describe.
//!
//! # Invariants
//! - No other module holds `&mut` access to the collection.
//! - Missing-id conditions surface as `StoreError`, never as panics, and
//!   always leave the collection untouched.

pub mod event_store;
pub mod seed;
