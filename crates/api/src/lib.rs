//! HTTP API server with observability for the webinar scheduling service.
//!
//! Exposes the OrganizeWebinar and ChangeSeats use cases over REST,
//! with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use domain::{ChangeSeats, DateGenerator, IdGenerator, OrganizeWebinar, UserId};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use webinar_store::{InMemoryWebinarRepository, PostgresWebinarRepository, StoreError};

use config::Config;
use routes::webinars::{AppState, SharedRepository};

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::system::metrics))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/webinars", post(routes::webinars::organize))
        .route("/webinars/{id}", get(routes::webinars::get))
        .route("/webinars/{id}/seats", post(routes::webinars::change_seats))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Wires both use cases around a single repository.
pub fn create_default_state(
    repository: SharedRepository,
    id_generator: Arc<dyn IdGenerator>,
    date_generator: Arc<dyn DateGenerator>,
    default_user_id: impl Into<UserId>,
) -> Arc<AppState> {
    let organize_webinar = OrganizeWebinar::new(repository.clone(), id_generator, date_generator);
    let change_seats = ChangeSeats::new(repository.clone());

    Arc::new(AppState {
        repository,
        organize_webinar,
        change_seats,
        default_user_id: default_user_id.into(),
    })
}

/// Builds the repository selected by the configuration.
///
/// Connects to PostgreSQL and applies migrations when `database_url` is set,
/// otherwise starts with an empty in-memory repository.
pub async fn connect_repository(config: &Config) -> Result<SharedRepository, StoreError> {
    match config.database_url.as_deref() {
        Some(url) => {
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(10)
                .connect(url)
                .await?;
            let repository = PostgresWebinarRepository::new(pool);
            repository.run_migrations().await?;
            tracing::info!("using PostgreSQL webinar repository");
            Ok(Arc::new(repository))
        }
        None => {
            tracing::info!("using in-memory webinar repository");
            Ok(Arc::new(InMemoryWebinarRepository::new()))
        }
    }
}
