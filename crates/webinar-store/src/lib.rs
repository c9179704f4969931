pub mod error;
pub mod memory;
pub mod postgres;
pub mod repository;

pub use common::{Webinar, WebinarId, WebinarProps};
pub use error::{Result, StoreError};
pub use memory::InMemoryWebinarRepository;
pub use postgres::PostgresWebinarRepository;
pub use repository::WebinarRepository;
