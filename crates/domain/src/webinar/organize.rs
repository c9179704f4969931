//! OrganizeWebinar use case.

use std::sync::Arc;

use common::{Webinar, WebinarProps};
use webinar_store::WebinarRepository;

use crate::error::DomainError;
use crate::generators::{DateGenerator, IdGenerator};

use super::{
    MAX_SEATS, OrganizeWebinarCommand, OrganizeWebinarResponse, WebinarError, minimum_lead_time,
    record_rejection,
};

const USE_CASE: &str = "organize_webinar";

/// Validates and creates a new webinar.
///
/// Checks run in a fixed order (lead time, seat ceiling, seat floor) and all
/// of them complete before the repository is touched.
pub struct OrganizeWebinar<R: WebinarRepository> {
    repository: R,
    id_generator: Arc<dyn IdGenerator>,
    date_generator: Arc<dyn DateGenerator>,
}

impl<R: WebinarRepository> OrganizeWebinar<R> {
    pub fn new(
        repository: R,
        id_generator: Arc<dyn IdGenerator>,
        date_generator: Arc<dyn DateGenerator>,
    ) -> Self {
        Self {
            repository,
            id_generator,
            date_generator,
        }
    }

    /// Returns a reference to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Organizes a webinar, returning the id it was stored under.
    #[tracing::instrument(skip(self, command), fields(user_id = %command.user_id, seats = command.seats))]
    pub async fn execute(
        &self,
        command: OrganizeWebinarCommand,
    ) -> Result<OrganizeWebinarResponse, DomainError> {
        if let Err(err) = self.validate(&command) {
            record_rejection(USE_CASE, &err);
            return Err(err.into());
        }

        let id = self.id_generator.generate();
        let webinar = Webinar::new(WebinarProps {
            id: id.clone(),
            organizer_id: command.user_id,
            title: command.title,
            start_date: command.start_date,
            end_date: command.end_date,
            seats: command.seats,
        });

        self.repository.create(&webinar).await?;

        metrics::counter!("webinars_organized_total").increment(1);
        tracing::info!(webinar_id = %id, "webinar organized");

        Ok(OrganizeWebinarResponse { id })
    }

    fn validate(&self, command: &OrganizeWebinarCommand) -> Result<(), WebinarError> {
        let minimum_start_date = self.date_generator.now() + minimum_lead_time();
        if command.start_date < minimum_start_date {
            return Err(WebinarError::DatesTooSoon);
        }

        if command.seats > MAX_SEATS {
            return Err(WebinarError::TooManySeats);
        }

        if command.seats == 0 {
            return Err(WebinarError::NotEnoughSeats);
        }

        Ok(())
    }
}
