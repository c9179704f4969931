//! Shared types for the webinar scheduling service.
//!
//! Identifiers, the caller-facing `User` record and the `Webinar` entity live
//! here so the store and domain crates agree on a single representation.

pub mod types;
pub mod webinar;

pub use types::{User, UserId, WebinarId};
pub use webinar::{Webinar, WebinarProps};
