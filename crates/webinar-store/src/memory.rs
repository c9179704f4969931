use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;

use crate::{Result, StoreError, Webinar, WebinarId, repository::WebinarRepository};

/// In-memory webinar repository for testing and local runs.
///
/// Provides the same interface as the PostgreSQL implementation. The map sits
/// behind a synchronous lock so tests can inspect state without an executor
/// via [`InMemoryWebinarRepository::find_by_id_sync`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryWebinarRepository {
    webinars: Arc<RwLock<HashMap<WebinarId, Webinar>>>,
}

impl InMemoryWebinarRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with the given webinars.
    ///
    /// Later entries win when two share an id.
    pub fn with_webinars(webinars: impl IntoIterator<Item = Webinar>) -> Self {
        let webinars = webinars
            .into_iter()
            .map(|w| (w.id().clone(), w))
            .collect();
        Self {
            webinars: Arc::new(RwLock::new(webinars)),
        }
    }

    /// Synchronous lookup for test assertions.
    pub fn find_by_id_sync(&self, id: &WebinarId) -> Option<Webinar> {
        self.webinars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    /// Returns the number of stored webinars.
    pub fn len(&self) -> usize {
        self.webinars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if no webinar is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl WebinarRepository for InMemoryWebinarRepository {
    async fn create(&self, webinar: &Webinar) -> Result<()> {
        let mut store = self
            .webinars
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if store.contains_key(webinar.id()) {
            return Err(StoreError::Conflict(webinar.id().clone()));
        }

        store.insert(webinar.id().clone(), webinar.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>> {
        Ok(self.find_by_id_sync(id))
    }

    async fn update(&self, webinar: &Webinar) -> Result<()> {
        let mut store = self
            .webinars
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let stored = store
            .get_mut(webinar.id())
            .ok_or_else(|| StoreError::NotFound(webinar.id().clone()))?;

        stored.set_title(webinar.title());
        stored.set_dates(webinar.start_date(), webinar.end_date());
        stored.set_seats(webinar.seats());
        Ok(())
    }

    async fn delete(&self, id: &WebinarId) -> Result<()> {
        self.webinars
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use common::{UserId, WebinarProps};

    fn create_test_webinar(id: &str, organizer: &str, seats: u32) -> Webinar {
        Webinar::new(WebinarProps {
            id: WebinarId::new(id),
            organizer_id: UserId::new(organizer),
            title: "Webinar title".to_string(),
            start_date: Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2022, 1, 1, 1, 0, 0).unwrap(),
            seats,
        })
    }

    #[tokio::test]
    async fn create_then_find() {
        let repository = InMemoryWebinarRepository::new();
        let webinar = create_test_webinar("webinar-id", "organizer-id", 100);

        repository.create(&webinar).await.unwrap();

        let found = repository
            .find_by_id(&WebinarId::new("webinar-id"))
            .await
            .unwrap();
        assert_eq!(found, Some(webinar));
    }

    #[tokio::test]
    async fn find_unknown_returns_none() {
        let repository = InMemoryWebinarRepository::new();
        let found = repository
            .find_by_id(&WebinarId::new("missing"))
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn create_duplicate_id_conflicts() {
        let repository =
            InMemoryWebinarRepository::with_webinars([create_test_webinar("w1", "alice", 10)]);

        let result = repository
            .create(&create_test_webinar("w1", "bob", 20))
            .await;

        assert!(matches!(result, Err(StoreError::Conflict(_))));
        let stored = repository.find_by_id_sync(&WebinarId::new("w1")).unwrap();
        assert_eq!(stored.organizer_id().as_str(), "alice");
        assert_eq!(stored.seats(), 10);
    }

    #[tokio::test]
    async fn update_overwrites_mutable_fields() {
        let repository = InMemoryWebinarRepository::with_webinars([create_test_webinar(
            "webinar-id",
            "organizer-id",
            100,
        )]);

        let mut webinar = repository
            .find_by_id(&WebinarId::new("webinar-id"))
            .await
            .unwrap()
            .unwrap();
        webinar.set_title("Updated webinar title");
        webinar.set_seats(200);
        repository.update(&webinar).await.unwrap();

        let stored = repository
            .find_by_id_sync(&WebinarId::new("webinar-id"))
            .unwrap();
        assert_eq!(stored.title(), "Updated webinar title");
        assert_eq!(stored.seats(), 200);
        assert_eq!(stored.organizer_id().as_str(), "organizer-id");
    }

    #[tokio::test]
    async fn update_unknown_is_not_found() {
        let repository = InMemoryWebinarRepository::new();
        let result = repository
            .update(&create_test_webinar("ghost", "alice", 10))
            .await;

        assert!(matches!(result, Err(StoreError::NotFound(_))));
        assert!(repository.is_empty());
    }

    #[tokio::test]
    async fn delete_removes_and_tolerates_missing() {
        let repository =
            InMemoryWebinarRepository::with_webinars([create_test_webinar("w1", "alice", 10)]);

        repository.delete(&WebinarId::new("w1")).await.unwrap();
        assert!(repository.find_by_id_sync(&WebinarId::new("w1")).is_none());

        // Second delete is a no-op
        repository.delete(&WebinarId::new("w1")).await.unwrap();
        assert_eq!(repository.len(), 0);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let repository = InMemoryWebinarRepository::new();
        let handle = repository.clone();

        repository
            .create(&create_test_webinar("w1", "alice", 10))
            .await
            .unwrap();

        assert_eq!(handle.len(), 1);
    }
}
