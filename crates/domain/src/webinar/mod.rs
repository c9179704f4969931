//! Webinar scheduling rules and use cases.

mod change_seats;
mod commands;
mod organize;

pub use change_seats::ChangeSeats;
pub use commands::{ChangeSeatsCommand, OrganizeWebinarCommand, OrganizeWebinarResponse};
pub use organize::OrganizeWebinar;

use chrono::TimeDelta;
use thiserror::Error;

use crate::error::ErrorKind;

/// Upper bound on a webinar's capacity, at creation and on every change.
pub const MAX_SEATS: u32 = 1000;

/// Minimum number of days between organizing a webinar and its start.
pub const MINIMUM_LEAD_TIME_DAYS: i64 = 3;

/// Minimum lead time as a duration.
pub fn minimum_lead_time() -> TimeDelta {
    TimeDelta::days(MINIMUM_LEAD_TIME_DAYS)
}

/// Business-rule violations raised by the webinar use cases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WebinarError {
    /// No webinar is stored under the requested id.
    #[error("Webinar not found")]
    NotFound,

    /// The caller is not the webinar's organizer.
    #[error("User is not allowed to update this webinar")]
    NotOrganizer,

    /// The start date is inside the minimum lead time.
    #[error("Webinar must be scheduled at least 3 days in advance")]
    DatesTooSoon,

    /// The requested capacity exceeds [`MAX_SEATS`].
    #[error("Webinar must have at most 1000 seats")]
    TooManySeats,

    /// A webinar needs at least one seat.
    #[error("Webinar must have at least 1 seat")]
    NotEnoughSeats,

    /// Capacity can only grow.
    #[error("You cannot reduce the number of seats")]
    SeatsReduction,
}

impl WebinarError {
    /// Classifies the violation for callers mapping errors to responses.
    pub fn kind(&self) -> ErrorKind {
        match self {
            WebinarError::NotFound => ErrorKind::NotFound,
            WebinarError::NotOrganizer => ErrorKind::Unauthorized,
            WebinarError::DatesTooSoon
            | WebinarError::TooManySeats
            | WebinarError::NotEnoughSeats
            | WebinarError::SeatsReduction => ErrorKind::ValidationFailed,
        }
    }
}

/// Logs and counts a rejected use-case invocation.
fn record_rejection(use_case: &'static str, err: &WebinarError) {
    let kind = err.kind();
    tracing::warn!(use_case, kind = %kind, reason = %err, "webinar request rejected");
    metrics::counter!(
        "webinar_use_case_rejections_total",
        "use_case" => use_case,
        "kind" => kind.as_str()
    )
    .increment(1);
}
