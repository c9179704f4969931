use async_trait::async_trait;

use crate::{Result, Webinar, WebinarId};

/// Persistence capability for webinars.
///
/// Implementations must be thread-safe (Send + Sync). Every operation may
/// suspend on I/O.
#[async_trait]
pub trait WebinarRepository: Send + Sync {
    /// Persists a new webinar.
    ///
    /// Fails with `Conflict` if a webinar with the same id is already stored.
    async fn create(&self, webinar: &Webinar) -> Result<()>;

    /// Retrieves a webinar by id.
    ///
    /// Returns None if no webinar is stored under `id`; absence is not an error.
    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>>;

    /// Overwrites the mutable fields (title, dates, seats) of a stored webinar.
    ///
    /// The organizer is never rewritten. Fails with `NotFound` if the id is
    /// unknown.
    async fn update(&self, webinar: &Webinar) -> Result<()>;

    /// Removes a webinar. Deleting an unknown id is a no-op.
    async fn delete(&self, id: &WebinarId) -> Result<()>;
}

#[async_trait]
impl<T: WebinarRepository + ?Sized> WebinarRepository for std::sync::Arc<T> {
    async fn create(&self, webinar: &Webinar) -> Result<()> {
        (**self).create(webinar).await
    }

    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>> {
        (**self).find_by_id(id).await
    }

    async fn update(&self, webinar: &Webinar) -> Result<()> {
        (**self).update(webinar).await
    }

    async fn delete(&self, id: &WebinarId) -> Result<()> {
        (**self).delete(id).await
    }
}
