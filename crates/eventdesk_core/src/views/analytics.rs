//! Analytics aggregates: grouping, distribution, and rate metrics.
//!
//! # Responsibility
//! - Compute the category/status breakdowns and the rate metrics the
//!   analytics view charts.
//!
//! # Invariants
//! - Category groups appear in first-seen collection order.
//! - Status buckets with a zero count are omitted from the result.
//! - Rates are 0.0 whenever their denominator is 0.

use crate::model::event::{Event, EventStatus};

/// One category group with its event and attendee totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBreakdown {
    pub category: String,
    pub event_count: usize,
    /// Sum of roster sizes across the group's events.
    pub attendee_count: usize,
}

/// Groups events by category, preserving first-seen order.
pub fn events_by_category(events: &[Event]) -> Vec<CategoryBreakdown> {
    let mut groups: Vec<CategoryBreakdown> = Vec::new();
    for event in events {
        match groups
            .iter_mut()
            .find(|group| group.category == event.category)
        {
            Some(group) => {
                group.event_count += 1;
                group.attendee_count += event.attendees.len();
            }
            None => groups.push(CategoryBreakdown {
                category: event.category.clone(),
                event_count: 1,
                attendee_count: event.attendees.len(),
            }),
        }
    }
    groups
}

/// One non-empty status bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSlice {
    pub status: EventStatus,
    pub count: usize,
}

/// Counts events per status, in published/draft/cancelled presentation
/// order, omitting empty buckets.
pub fn status_distribution(events: &[Event]) -> Vec<StatusSlice> {
    [
        EventStatus::Published,
        EventStatus::Draft,
        EventStatus::Cancelled,
    ]
    .into_iter()
    .map(|status| StatusSlice {
        status,
        count: events.iter().filter(|event| event.status == status).count(),
    })
    .filter(|slice| slice.count > 0)
    .collect()
}

/// Headline metrics for the analytics view.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsSummary {
    pub total_events: usize,
    pub total_attendees: usize,
    /// Attendees per event, to one decimal place; 0.0 with no events.
    pub average_attendance: f64,
    /// Attendees over total capacity as a percentage, to one decimal
    /// place; 0.0 when total capacity is 0.
    pub utilization_rate: f64,
}

/// Computes the analytics headline metrics from a collection snapshot.
pub fn analytics_summary(events: &[Event]) -> AnalyticsSummary {
    let total_events = events.len();
    let total_attendees: usize = events.iter().map(|event| event.attendees.len()).sum();

    let average_attendance = if total_events == 0 {
        0.0
    } else {
        round_to_tenth(total_attendees as f64 / total_events as f64)
    };

    AnalyticsSummary {
        total_events,
        total_attendees,
        average_attendance,
        utilization_rate: utilization_rate(events),
    }
}

/// Total attendees over total capacity, as a percentage to one decimal
/// place. 0.0 when the collection has no capacity at all.
pub fn utilization_rate(events: &[Event]) -> f64 {
    let total_attendees: usize = events.iter().map(|event| event.attendees.len()).sum();
    let total_capacity: u64 = events
        .iter()
        .map(|event| u64::from(event.max_attendees))
        .sum();

    if total_capacity == 0 {
        return 0.0;
    }
    round_to_tenth(total_attendees as f64 / total_capacity as f64 * 100.0)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
