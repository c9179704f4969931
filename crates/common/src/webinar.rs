//! The webinar entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{UserId, WebinarId};

/// Complete property set used to construct a [`Webinar`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebinarProps {
    pub id: WebinarId,
    pub organizer_id: UserId,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub seats: u32,
}

/// A scheduled event with a fixed seat capacity and an organizer.
///
/// The entity holds data only. Scheduling rules (lead time, seat ceiling,
/// seat monotonicity, organizer-only changes) are checked by the use cases
/// before any mutator is called. `id` and `organizer_id` have no setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webinar {
    id: WebinarId,
    organizer_id: UserId,
    title: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    seats: u32,
}

impl Webinar {
    pub fn new(props: WebinarProps) -> Self {
        Self {
            id: props.id,
            organizer_id: props.organizer_id,
            title: props.title,
            start_date: props.start_date,
            end_date: props.end_date,
            seats: props.seats,
        }
    }

    pub fn id(&self) -> &WebinarId {
        &self.id
    }

    pub fn organizer_id(&self) -> &UserId {
        &self.organizer_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    pub fn seats(&self) -> u32 {
        self.seats
    }

    /// Returns true if `user_id` organizes this webinar.
    pub fn is_organizer(&self, user_id: &UserId) -> bool {
        &self.organizer_id == user_id
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_dates(&mut self, start_date: DateTime<Utc>, end_date: DateTime<Utc>) {
        self.start_date = start_date;
        self.end_date = end_date;
    }

    pub fn set_seats(&mut self, seats: u32) {
        self.seats = seats;
    }

    /// Returns a copy of the entity's current properties.
    pub fn props(&self) -> WebinarProps {
        WebinarProps {
            id: self.id.clone(),
            organizer_id: self.organizer_id.clone(),
            title: self.title.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            seats: self.seats,
        }
    }
}

impl From<WebinarProps> for Webinar {
    fn from(props: WebinarProps) -> Self {
        Self::new(props)
    }
}
