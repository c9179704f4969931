//! ChangeSeats use case.

use webinar_store::WebinarRepository;

use crate::error::DomainError;

use super::{ChangeSeatsCommand, MAX_SEATS, WebinarError, record_rejection};

const USE_CASE: &str = "change_seats";

/// Validates and applies a capacity change to an existing webinar.
///
/// Checks run as existence, authorization, monotonicity, ceiling. The entity
/// is only mutated once every check has passed, so a failure leaves the
/// stored record untouched.
pub struct ChangeSeats<R: WebinarRepository> {
    repository: R,
}

impl<R: WebinarRepository> ChangeSeats<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Returns a reference to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    #[tracing::instrument(
        skip(self, command),
        fields(webinar_id = %command.webinar_id, user_id = %command.user.id, seats = command.seats)
    )]
    pub async fn execute(&self, command: ChangeSeatsCommand) -> Result<(), DomainError> {
        let Some(mut webinar) = self.repository.find_by_id(&command.webinar_id).await? else {
            return Err(reject(WebinarError::NotFound));
        };

        if !webinar.is_organizer(&command.user.id) {
            return Err(reject(WebinarError::NotOrganizer));
        }

        if command.seats < webinar.seats() {
            return Err(reject(WebinarError::SeatsReduction));
        }

        if command.seats > MAX_SEATS {
            return Err(reject(WebinarError::TooManySeats));
        }

        let previous = webinar.seats();
        webinar.set_seats(command.seats);
        self.repository.update(&webinar).await?;

        metrics::counter!("webinar_seats_changed_total").increment(1);
        tracing::info!(previous, current = command.seats, "webinar seats changed");

        Ok(())
    }
}

fn reject(err: WebinarError) -> DomainError {
    record_rejection(USE_CASE, &err);
    err.into()
}
