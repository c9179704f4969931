//! Webinar commands.

use chrono::{DateTime, Utc};
use common::{User, UserId, WebinarId};

/// Command to organize a new webinar.
#[derive(Debug, Clone)]
pub struct OrganizeWebinarCommand {
    /// The user organizing the webinar. Becomes the organizer of record.
    pub user_id: UserId,

    pub title: String,

    /// Requested capacity.
    pub seats: u32,

    pub start_date: DateTime<Utc>,

    pub end_date: DateTime<Utc>,
}

impl OrganizeWebinarCommand {
    /// Creates a new OrganizeWebinarCommand.
    pub fn new(
        user_id: impl Into<UserId>,
        title: impl Into<String>,
        seats: u32,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            title: title.into(),
            seats,
            start_date,
            end_date,
        }
    }
}

/// Result of a successful OrganizeWebinar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizeWebinarResponse {
    /// Id assigned to the new webinar.
    pub id: WebinarId,
}

/// Command to change a webinar's capacity.
#[derive(Debug, Clone)]
pub struct ChangeSeatsCommand {
    /// The caller requesting the change.
    pub user: User,

    /// The webinar to change.
    pub webinar_id: WebinarId,

    /// New capacity.
    pub seats: u32,
}

impl ChangeSeatsCommand {
    /// Creates a new ChangeSeatsCommand.
    pub fn new(user: User, webinar_id: impl Into<WebinarId>, seats: u32) -> Self {
        Self {
            user,
            webinar_id: webinar_id.into(),
            seats,
        }
    }
}
