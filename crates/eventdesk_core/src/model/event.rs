//! Event and attendee domain records.
//!
//! # Responsibility
//! - Define the canonical `Event`/`Attendee` shapes plus their creation
//!   inputs and the partial-update patch.
//! - Provide form-boundary validation for creation input.
//!
//! # Invariants
//! - `id` and `created_at` are immutable after construction; `EventPatch`
//!   cannot touch them.
//! - An event's roster never holds two attendees with the same id.
//! - `attendees.len() <= max_attendees` is deliberately NOT an invariant:
//!   the capacity is a soft cap consumed by utilization reporting only.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for an event.
pub type EventId = Uuid;

/// Identifier for an attendee, unique within its owning event's roster.
pub type AttendeeId = Uuid;

/// Publication lifecycle state of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    /// Created but not visible to attendees yet.
    Draft,
    /// Live and accepting registrations.
    Published,
    /// Called off; kept for the record.
    Cancelled,
}

impl EventStatus {
    /// Presentation label used by status breakdowns and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Cancelled => "cancelled",
        }
    }
}

impl Display for EventStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registration state of a single attendee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendeeStatus {
    Confirmed,
    Pending,
    Cancelled,
}

/// One registered attendee inside an event's roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    /// Unique within the owning event's roster.
    pub id: AttendeeId,
    pub name: String,
    pub email: String,
    /// Set once at registration time.
    pub registered_at: DateTime<Utc>,
    pub status: AttendeeStatus,
}

impl Attendee {
    /// Materializes a registration with a fresh id and the current time.
    pub fn new(signup: AttendeeSignup) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: signup.name,
            email: signup.email,
            registered_at: Utc::now(),
            status: signup.status,
        }
    }
}

/// Registration input: an `Attendee` minus the fields the store generates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendeeSignup {
    pub name: String,
    pub email: String,
    pub status: AttendeeStatus,
}

/// Canonical event record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Stable id, unique across the whole store.
    pub id: EventId,
    pub title: String,
    pub description: String,
    /// Calendar day the event takes place.
    pub date: NaiveDate,
    /// Local time of day the event starts.
    pub time: NaiveTime,
    pub location: String,
    pub category: String,
    /// Soft capacity cap; never enforced against the roster length.
    pub max_attendees: u32,
    pub attendees: Vec<Attendee>,
    /// Set once when the event enters the store.
    pub created_at: DateTime<Utc>,
    pub status: EventStatus,
}

impl Event {
    /// Materializes a draft with a fresh id, the current time, and an
    /// empty roster.
    pub fn new(draft: EventDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            date: draft.date,
            time: draft.time,
            location: draft.location,
            category: draft.category,
            max_attendees: draft.max_attendees,
            attendees: Vec::new(),
            created_at: Utc::now(),
            status: draft.status,
        }
    }

    /// Roster size over capacity, as a percentage.
    ///
    /// Returns 0.0 when `max_attendees` is 0 so a degenerate record cannot
    /// divide by zero. Values above 100.0 are possible because the cap is
    /// soft.
    pub fn attendance_rate(&self) -> f64 {
        if self.max_attendees == 0 {
            return 0.0;
        }
        self.attendees.len() as f64 / f64::from(self.max_attendees) * 100.0
    }
}

/// Creation input: an `Event` minus `id`, `created_at`, and `attendees`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub category: String,
    pub max_attendees: u32,
    pub status: EventStatus,
}

/// Limits mirrored from the event creation form.
const TITLE_MAX_CHARS: usize = 100;
const DESCRIPTION_MIN_CHARS: usize = 10;
const DESCRIPTION_MAX_CHARS: usize = 500;
const LOCATION_MAX_CHARS: usize = 200;
const MAX_ATTENDEES_CEILING: u32 = 10_000;

impl EventDraft {
    /// Checks the draft against the input-form limits.
    ///
    /// # Contract
    /// - This is the input boundary's responsibility: the store never calls
    ///   it, and [`crate::store::EventStore::create_event`] accepts any
    ///   draft unchecked.
    /// - Returns the first violation found, field order as listed on the
    ///   form.
    pub fn validate(&self) -> Result<(), DraftValidationError> {
        let title_chars = self.title.chars().count();
        if title_chars == 0 {
            return Err(DraftValidationError::EmptyTitle);
        }
        if title_chars > TITLE_MAX_CHARS {
            return Err(DraftValidationError::TitleTooLong { chars: title_chars });
        }

        let description_chars = self.description.chars().count();
        if description_chars < DESCRIPTION_MIN_CHARS {
            return Err(DraftValidationError::DescriptionTooShort {
                chars: description_chars,
            });
        }
        if description_chars > DESCRIPTION_MAX_CHARS {
            return Err(DraftValidationError::DescriptionTooLong {
                chars: description_chars,
            });
        }

        let location_chars = self.location.chars().count();
        if location_chars == 0 {
            return Err(DraftValidationError::EmptyLocation);
        }
        if location_chars > LOCATION_MAX_CHARS {
            return Err(DraftValidationError::LocationTooLong {
                chars: location_chars,
            });
        }

        if self.category.chars().count() == 0 {
            return Err(DraftValidationError::EmptyCategory);
        }

        if self.max_attendees == 0 || self.max_attendees > MAX_ATTENDEES_CEILING {
            return Err(DraftValidationError::InvalidCapacity {
                max_attendees: self.max_attendees,
            });
        }

        if self.status == EventStatus::Cancelled {
            return Err(DraftValidationError::CancelledAtCreation);
        }

        Ok(())
    }
}

/// Field-level violation of the creation-form limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftValidationError {
    EmptyTitle,
    TitleTooLong { chars: usize },
    DescriptionTooShort { chars: usize },
    DescriptionTooLong { chars: usize },
    EmptyLocation,
    LocationTooLong { chars: usize },
    EmptyCategory,
    InvalidCapacity { max_attendees: u32 },
    CancelledAtCreation,
}

impl Display for DraftValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title is required"),
            Self::TitleTooLong { chars } => {
                write!(f, "title must be at most {TITLE_MAX_CHARS} characters, got {chars}")
            }
            Self::DescriptionTooShort { chars } => write!(
                f,
                "description must be at least {DESCRIPTION_MIN_CHARS} characters, got {chars}"
            ),
            Self::DescriptionTooLong { chars } => write!(
                f,
                "description must be at most {DESCRIPTION_MAX_CHARS} characters, got {chars}"
            ),
            Self::EmptyLocation => write!(f, "location is required"),
            Self::LocationTooLong { chars } => write!(
                f,
                "location must be at most {LOCATION_MAX_CHARS} characters, got {chars}"
            ),
            Self::EmptyCategory => write!(f, "category is required"),
            Self::InvalidCapacity { max_attendees } => write!(
                f,
                "max attendees must be between 1 and {MAX_ATTENDEES_CEILING}, got {max_attendees}"
            ),
            Self::CancelledAtCreation => {
                write!(f, "a new event must be draft or published, not cancelled")
            }
        }
    }
}

impl Error for DraftValidationError {}

/// Partial update over an event's mutable scalar fields.
///
/// `None` leaves a field untouched. `id`, `created_at`, and the roster are
/// not representable here; the roster changes only through the store's
/// attendee operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub max_attendees: Option<u32>,
    pub status: Option<EventStatus>,
}

impl EventPatch {
    /// Returns whether applying this patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.date.is_none()
            && self.time.is_none()
            && self.location.is_none()
            && self.category.is_none()
            && self.max_attendees.is_none()
            && self.status.is_none()
    }

    /// Merges the populated fields over `event`, leaving the rest as-is.
    pub fn apply(self, event: &mut Event) {
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(description) = self.description {
            event.description = description;
        }
        if let Some(date) = self.date {
            event.date = date;
        }
        if let Some(time) = self.time {
            event.time = time;
        }
        if let Some(location) = self.location {
            event.location = location;
        }
        if let Some(category) = self.category {
            event.category = category;
        }
        if let Some(max_attendees) = self.max_attendees {
            event.max_attendees = max_attendees;
        }
        if let Some(status) = self.status {
            event.status = status;
        }
    }
}
