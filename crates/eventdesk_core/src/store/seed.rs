//! Deterministic sample data for demos and smoke checks.
//!
//! # Responsibility
//! - Provide the fixture records a freshly seeded store starts with.
//!
//! # Invariants
//! - Ids and timestamps are fixed so seeded output is reproducible.

use crate::model::event::{Attendee, AttendeeStatus, Event, EventStatus};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use uuid::uuid;

/// Returns the two sample events a seeded store starts with.
pub fn sample_events() -> Vec<Event> {
    vec![
        Event {
            id: uuid!("00000000-0000-4000-8000-000000000001"),
            title: "Tech Conference 2024".to_string(),
            description: "Annual technology conference featuring the latest innovations \
                          in AI, web development, and cloud computing."
                .to_string(),
            date: seed_date(2024, 8, 15),
            time: seed_time(9, 0),
            location: "San Francisco Convention Center".to_string(),
            category: "Technology".to_string(),
            max_attendees: 500,
            attendees: vec![
                Attendee {
                    id: uuid!("00000000-0000-4000-8000-0000000000a1"),
                    name: "John Doe".to_string(),
                    email: "john@example.com".to_string(),
                    registered_at: seed_timestamp("2024-07-01T10:00:00Z"),
                    status: AttendeeStatus::Confirmed,
                },
                Attendee {
                    id: uuid!("00000000-0000-4000-8000-0000000000a2"),
                    name: "Jane Smith".to_string(),
                    email: "jane@example.com".to_string(),
                    registered_at: seed_timestamp("2024-07-05T14:30:00Z"),
                    status: AttendeeStatus::Confirmed,
                },
            ],
            created_at: seed_timestamp("2024-06-15T09:00:00Z"),
            status: EventStatus::Published,
        },
        Event {
            id: uuid!("00000000-0000-4000-8000-000000000002"),
            title: "Digital Marketing Workshop".to_string(),
            description: "Learn the latest digital marketing strategies and tools to \
                          grow your business online."
                .to_string(),
            date: seed_date(2024, 8, 22),
            time: seed_time(14, 0),
            location: "Downtown Business Hub".to_string(),
            category: "Marketing".to_string(),
            max_attendees: 50,
            attendees: vec![Attendee {
                id: uuid!("00000000-0000-4000-8000-0000000000a3"),
                name: "Mike Johnson".to_string(),
                email: "mike@example.com".to_string(),
                registered_at: seed_timestamp("2024-07-10T09:15:00Z"),
                status: AttendeeStatus::Confirmed,
            }],
            created_at: seed_timestamp("2024-06-20T11:00:00Z"),
            status: EventStatus::Published,
        },
    ]
}

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed date literal is valid")
}

fn seed_time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("seed time literal is valid")
}

fn seed_timestamp(rfc3339: &str) -> DateTime<Utc> {
    rfc3339.parse().expect("seed timestamp literal is valid")
}

#[cfg(test)]
mod tests {
    use super::sample_events;
    use std::collections::HashSet;

    #[test]
    fn sample_events_are_deterministic_with_unique_ids() {
        let first = sample_events();
        let second = sample_events();
        assert_eq!(first, second);

        let ids: HashSet<_> = first.iter().map(|event| event.id).collect();
        assert_eq!(ids.len(), first.len());
    }

    #[test]
    fn sample_rosters_stay_under_their_caps() {
        for event in sample_events() {
            assert!(event.attendees.len() <= event.max_attendees as usize);
        }
    }
}
