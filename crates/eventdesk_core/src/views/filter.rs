//! Free-text search and equality filters over the event list.
//!
//! # Responsibility
//! - Decide which events match a search box plus status/category
//!   selectors.
//!
//! # Invariants
//! - All active predicates are AND-combined.
//! - A `None` selector disables that filter dimension entirely.
//! - Result ordering follows the input collection.

use crate::model::event::{Event, EventStatus};

/// Filter state of the events-list view.
///
/// The default value matches every event: blank text and both selectors
/// set to "all" (`None`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    /// Free-text query matched against title, description, and location.
    pub text: String,
    /// `None` means any status.
    pub status: Option<EventStatus>,
    /// `None` means any category. Matching is exact.
    pub category: Option<String>,
}

impl EventFilter {
    /// Creates a text-only filter with both selectors on "all".
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status: None,
            category: None,
        }
    }

    /// Tests one event against every active predicate.
    ///
    /// Text matches case-insensitively as a substring of title,
    /// description, or location; blank text matches everything.
    pub fn matches(&self, event: &Event) -> bool {
        let text = self.text.trim().to_lowercase();
        let matches_text = text.is_empty()
            || event.title.to_lowercase().contains(&text)
            || event.description.to_lowercase().contains(&text)
            || event.location.to_lowercase().contains(&text);

        let matches_status = self
            .status
            .map_or(true, |status| event.status == status);
        let matches_category = self
            .category
            .as_deref()
            .map_or(true, |category| event.category == category);

        matches_text && matches_status && matches_category
    }
}

/// Returns the events matching `filter`, in collection order.
pub fn filter_events<'a>(events: &'a [Event], filter: &EventFilter) -> Vec<&'a Event> {
    events.iter().filter(|event| filter.matches(event)).collect()
}

/// Distinct categories in first-seen collection order.
///
/// Feeds the category selector of the events-list view.
pub fn unique_categories(events: &[Event]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for event in events {
        if !categories.contains(&event.category) {
            categories.push(event.category.clone());
        }
    }
    categories
}
