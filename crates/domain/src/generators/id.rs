use std::sync::atomic::{AtomicU64, Ordering};

use common::WebinarId;
use uuid::Uuid;

/// Produces fresh webinar identifiers.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> WebinarId;
}

/// Globally unique identifiers backed by random UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl UuidIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> WebinarId {
        WebinarId::new(Uuid::new_v4().to_string())
    }
}

/// Deterministic sequence `id-1`, `id-2`, ... for reproducible tests.
#[derive(Debug, Default)]
pub struct FixedIdGenerator {
    counter: AtomicU64,
}

impl FixedIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for FixedIdGenerator {
    fn generate(&self) -> WebinarId {
        let next = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        WebinarId::new(format!("id-{next}"))
    }
}
