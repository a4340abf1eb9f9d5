//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `eventdesk_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use eventdesk_core::{status_distribution, summarize, EventStore};

fn main() {
    let store = EventStore::seeded();
    let summary = summarize(store.events());

    println!("eventdesk_core version={}", eventdesk_core::core_version());
    println!(
        "events={} published={} attendees={} avg_attendees={}",
        summary.total_events,
        summary.published_events,
        summary.total_attendees,
        summary.avg_attendees_per_event
    );
    for slice in status_distribution(store.events()) {
        println!("status={} count={}", slice.status, slice.count);
    }
}
