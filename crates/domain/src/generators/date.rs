use chrono::{DateTime, Utc};

/// 2024-01-01T00:00:00Z
const DEFAULT_FIXED_TIMESTAMP: i64 = 1_704_067_200;

/// Source of the current instant.
pub trait DateGenerator: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDateGenerator;

impl SystemDateGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl DateGenerator for SystemDateGenerator {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant.
///
/// Defaults to `2024-01-01T00:00:00Z`.
#[derive(Debug, Clone, Copy)]
pub struct FixedDateGenerator {
    instant: DateTime<Utc>,
}

impl FixedDateGenerator {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Default for FixedDateGenerator {
    fn default() -> Self {
        Self::new(DateTime::from_timestamp(DEFAULT_FIXED_TIMESTAMP, 0).unwrap_or_default())
    }
}

impl DateGenerator for FixedDateGenerator {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}
