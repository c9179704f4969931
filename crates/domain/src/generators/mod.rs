//! Injectable id and clock capabilities.
//!
//! Use cases never read the system clock or mint identifiers themselves, so
//! tests can pin both.

mod date;
mod id;

pub use date::{DateGenerator, FixedDateGenerator, SystemDateGenerator};
pub use id::{FixedIdGenerator, IdGenerator, UuidIdGenerator};
