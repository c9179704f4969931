use std::sync::Arc;

use chrono::{TimeDelta, TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use domain::{
    ChangeSeats, ChangeSeatsCommand, FixedDateGenerator, OrganizeWebinar, OrganizeWebinarCommand,
    User, UuidIdGenerator,
};
use webinar_store::InMemoryWebinarRepository;

fn organize_command() -> OrganizeWebinarCommand {
    let start = Utc.with_ymd_and_hms(2024, 2, 1, 10, 0, 0).unwrap();
    OrganizeWebinarCommand::new(
        "bench-user",
        "Benchmark Webinar",
        100,
        start,
        start + TimeDelta::hours(1),
    )
}

fn organize_use_case(
    repository: InMemoryWebinarRepository,
) -> OrganizeWebinar<InMemoryWebinarRepository> {
    OrganizeWebinar::new(
        repository,
        Arc::new(UuidIdGenerator::new()),
        Arc::new(FixedDateGenerator::default()),
    )
}

fn bench_organize_webinar(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let use_case = organize_use_case(InMemoryWebinarRepository::new());

    c.bench_function("domain/organize_webinar", |b| {
        b.iter(|| {
            rt.block_on(async {
                use_case.execute(organize_command()).await.unwrap();
            });
        });
    });
}

fn bench_change_seats(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let repository = InMemoryWebinarRepository::new();
    let organize = organize_use_case(repository.clone());
    let webinar_id = rt.block_on(async { organize.execute(organize_command()).await.unwrap().id });
    let change_seats = ChangeSeats::new(repository);
    let user = User::new("bench-user", "bench@example.com");

    c.bench_function("domain/change_seats", |b| {
        b.iter(|| {
            rt.block_on(async {
                change_seats
                    .execute(ChangeSeatsCommand::new(user.clone(), webinar_id.clone(), 500))
                    .await
                    .unwrap();
            });
        });
    });
}

fn bench_rejected_change_seats(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let repository = InMemoryWebinarRepository::new();
    let organize = organize_use_case(repository.clone());
    let webinar_id = rt.block_on(async { organize.execute(organize_command()).await.unwrap().id });
    let change_seats = ChangeSeats::new(repository);
    let intruder = User::new("intruder", "intruder@example.com");

    c.bench_function("domain/change_seats_rejected", |b| {
        b.iter(|| {
            rt.block_on(async {
                let result = change_seats
                    .execute(ChangeSeatsCommand::new(
                        intruder.clone(),
                        webinar_id.clone(),
                        500,
                    ))
                    .await;
                assert!(result.is_err());
            });
        });
    });
}

criterion_group!(
    benches,
    bench_organize_webinar,
    bench_change_seats,
    bench_rejected_change_seats
);
criterion_main!(benches);
