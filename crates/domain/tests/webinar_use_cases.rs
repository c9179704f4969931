//! Integration tests for the webinar use cases.
//!
//! These tests drive both use cases against a shared in-memory repository,
//! the way the HTTP layer wires them.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use domain::{
    ChangeSeats, ChangeSeatsCommand, DomainError, ErrorKind, FixedDateGenerator, FixedIdGenerator,
    MAX_SEATS, OrganizeWebinar, OrganizeWebinarCommand, User, WebinarError, WebinarId,
};
use webinar_store::InMemoryWebinarRepository;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

struct Harness {
    repository: InMemoryWebinarRepository,
    organize: OrganizeWebinar<InMemoryWebinarRepository>,
    change_seats: ChangeSeats<InMemoryWebinarRepository>,
}

fn create_harness() -> Harness {
    let repository = InMemoryWebinarRepository::new();
    Harness {
        organize: OrganizeWebinar::new(
            repository.clone(),
            Arc::new(FixedIdGenerator::new()),
            Arc::new(FixedDateGenerator::new(now())),
        ),
        change_seats: ChangeSeats::new(repository.clone()),
        repository,
    }
}

fn organize_command(user: &str, seats: u32, start: DateTime<Utc>) -> OrganizeWebinarCommand {
    OrganizeWebinarCommand::new(user, "New Webinar", seats, start, start + TimeDelta::hours(1))
}

async fn organize_valid(harness: &Harness, seats: u32) -> WebinarId {
    harness
        .organize
        .execute(organize_command("test-user", seats, now() + TimeDelta::days(30)))
        .await
        .unwrap()
        .id
}

fn organizer() -> User {
    User::new("test-user", "test@test.com")
}

mod organize_webinar {
    use super::*;

    #[tokio::test]
    async fn any_start_inside_lead_time_is_rejected() {
        let harness = create_harness();

        for hours in [0, 1, 24, 48, 71] {
            let start = now() + TimeDelta::hours(hours);
            let err = harness
                .organize
                .execute(organize_command("test-user", 10, start))
                .await
                .unwrap_err();
            assert_eq!(err.as_webinar_error(), Some(&WebinarError::DatesTooSoon));
        }

        // Start dates in the past are too soon as well
        let err = harness
            .organize
            .execute(organize_command("test-user", 10, now() - TimeDelta::days(1)))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValidationFailed);

        assert!(harness.repository.is_empty());
    }

    #[tokio::test]
    async fn any_seat_count_above_max_is_rejected() {
        let harness = create_harness();

        for seats in [MAX_SEATS + 1, 1500, u32::MAX] {
            let err = harness
                .organize
                .execute(organize_command("test-user", seats, now() + TimeDelta::days(5)))
                .await
                .unwrap_err();
            assert_eq!(err.to_string(), "Webinar must have at most 1000 seats");
        }

        assert!(harness.repository.is_empty());
    }

    #[tokio::test]
    async fn stored_record_matches_command() {
        let harness = create_harness();

        let id = organize_valid(&harness, 100).await;

        assert_eq!(id.as_str(), "id-1");
        let stored = harness.repository.find_by_id_sync(&id).unwrap();
        assert_eq!(stored.seats(), 100);
        assert_eq!(stored.organizer_id().as_str(), "test-user");
        assert_eq!(stored.title(), "New Webinar");
    }
}

mod change_seats {
    use super::*;

    #[tokio::test]
    async fn organized_webinar_can_grow_up_to_max() {
        let harness = create_harness();
        let id = organize_valid(&harness, 10).await;

        for seats in [30, 30, 500, MAX_SEATS] {
            harness
                .change_seats
                .execute(ChangeSeatsCommand::new(organizer(), id.clone(), seats))
                .await
                .unwrap();
            assert_eq!(harness.repository.find_by_id_sync(&id).unwrap().seats(), seats);
        }
    }

    #[tokio::test]
    async fn any_reduction_is_rejected() {
        let harness = create_harness();
        let id = organize_valid(&harness, 100).await;

        for seats in [0, 1, 50, 99] {
            let err = harness
                .change_seats
                .execute(ChangeSeatsCommand::new(organizer(), id.clone(), seats))
                .await
                .unwrap_err();
            assert_eq!(err.as_webinar_error(), Some(&WebinarError::SeatsReduction));
        }

        assert_eq!(harness.repository.find_by_id_sync(&id).unwrap().seats(), 100);
    }

    #[tokio::test]
    async fn any_other_user_is_unauthorized() {
        let harness = create_harness();
        let id = organize_valid(&harness, 100).await;

        for user in ["test-user2", "TEST-USER", ""] {
            let err = harness
                .change_seats
                .execute(ChangeSeatsCommand::new(
                    User::new(user, "someone@test.com"),
                    id.clone(),
                    200,
                ))
                .await
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Unauthorized);
        }

        assert_eq!(harness.repository.find_by_id_sync(&id).unwrap().seats(), 100);
    }

    #[tokio::test]
    async fn missing_webinar_creates_nothing() {
        let harness = create_harness();

        let err = harness
            .change_seats
            .execute(ChangeSeatsCommand::new(organizer(), "X", 30))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Webinar(WebinarError::NotFound)));
        assert!(harness.repository.is_empty());
    }

    #[tokio::test]
    async fn seat_ceiling_applies_after_creation() {
        let harness = create_harness();
        let id = organize_valid(&harness, 999).await;

        let err = harness
            .change_seats
            .execute(ChangeSeatsCommand::new(organizer(), id.clone(), 1001))
            .await
            .unwrap_err();

        assert_eq!(err.as_webinar_error(), Some(&WebinarError::TooManySeats));
        assert_eq!(harness.repository.find_by_id_sync(&id).unwrap().seats(), 999);
    }
}
