//! Derived, read-only views over the event collection.
//!
//! # Responsibility
//! - Compute presentation-ready aggregates from a collection snapshot.
//! - Keep every computation a pure function: same input, same output,
//!   no mutation of events or rosters.

pub mod analytics;
pub mod dashboard;
pub mod filter;
