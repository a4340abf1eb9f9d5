//! Core domain logic for the eventdesk dashboard.
//! This crate is the single source of truth for event state and the
//! aggregates derived from it.

pub mod logging;
pub mod model;
pub mod store;
pub mod views;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event::{
    Attendee, AttendeeId, AttendeeSignup, AttendeeStatus, DraftValidationError, Event, EventDraft,
    EventId, EventPatch, EventStatus,
};
pub use store::event_store::{EventStore, StoreError, StoreResult};
pub use store::seed::sample_events;
pub use views::analytics::{
    analytics_summary, events_by_category, status_distribution, utilization_rate,
    AnalyticsSummary, CategoryBreakdown, StatusSlice,
};
pub use views::dashboard::{recent_events, summarize, DashboardSummary, RECENT_EVENTS_LIMIT};
pub use views::filter::{filter_events, unique_categories, EventFilter};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
