//! Dashboard summary counters and the recent-events shelf.
//!
//! # Responsibility
//! - Reduce the event collection to the headline numbers the dashboard
//!   shows.
//!
//! # Invariants
//! - An empty collection yields all-zero counters, never a division error.

use crate::model::event::{Event, EventStatus};

/// How many events the dashboard's recent shelf shows.
pub const RECENT_EVENTS_LIMIT: usize = 3;

/// Headline counters for the dashboard view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_events: usize,
    pub published_events: usize,
    /// Sum of roster sizes across all events.
    pub total_attendees: usize,
    /// Integer average, rounded half away from zero; 0 with no events.
    pub avg_attendees_per_event: usize,
}

/// Computes the dashboard counters from a collection snapshot.
pub fn summarize(events: &[Event]) -> DashboardSummary {
    let total_events = events.len();
    let published_events = events
        .iter()
        .filter(|event| event.status == EventStatus::Published)
        .count();
    let total_attendees = events.iter().map(|event| event.attendees.len()).sum();

    let avg_attendees_per_event = if total_events == 0 {
        0
    } else {
        (total_attendees as f64 / total_events as f64).round() as usize
    };

    DashboardSummary {
        total_events,
        published_events,
        total_attendees,
        avg_attendees_per_event,
    }
}

/// Returns up to `limit` events, most recently created first.
///
/// Ties on `created_at` keep their collection order.
pub fn recent_events(events: &[Event], limit: usize) -> Vec<&Event> {
    let mut recent: Vec<&Event> = events.iter().collect();
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent.truncate(limit);
    recent
}
