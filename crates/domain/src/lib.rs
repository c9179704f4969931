//! Domain layer for the webinar scheduling service.
//!
//! This crate provides:
//! - `OrganizeWebinar` and `ChangeSeats` use cases
//! - Command and response types consumed by the transport layer
//! - Injectable id and date capabilities
//! - The error taxonomy shared by both use cases

pub mod error;
pub mod generators;
pub mod webinar;

pub use common::{User, UserId, Webinar, WebinarId, WebinarProps};
pub use error::{DomainError, ErrorKind};
pub use generators::{
    DateGenerator, FixedDateGenerator, FixedIdGenerator, IdGenerator, SystemDateGenerator,
    UuidIdGenerator,
};
pub use webinar::{
    ChangeSeats, ChangeSeatsCommand, MAX_SEATS, MINIMUM_LEAD_TIME_DAYS, OrganizeWebinar,
    OrganizeWebinarCommand, OrganizeWebinarResponse, WebinarError,
};
