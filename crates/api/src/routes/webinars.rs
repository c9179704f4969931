//! Webinar endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use chrono::{DateTime, Utc};
use domain::{
    ChangeSeats, ChangeSeatsCommand, OrganizeWebinar, OrganizeWebinarCommand, User, UserId,
    Webinar, WebinarId,
};
use serde::{Deserialize, Serialize};
use webinar_store::WebinarRepository;

use crate::error::ApiError;

/// Header carrying the caller's user id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Repository handle shared by every use case.
pub type SharedRepository = Arc<dyn WebinarRepository>;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub repository: SharedRepository,
    pub organize_webinar: OrganizeWebinar<SharedRepository>,
    pub change_seats: ChangeSeats<SharedRepository>,
    /// Caller assumed when a request carries no user id header.
    pub default_user_id: UserId,
}

impl AppState {
    /// Resolves the caller from the request headers.
    fn caller(&self, headers: &HeaderMap) -> User {
        headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(User::with_id)
            .unwrap_or_else(|| User::with_id(self.default_user_id.clone()))
    }
}

// -- Request types --

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizeWebinarRequest {
    pub user_id: String,
    pub title: String,
    pub seats: u32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// Seat count as sent by clients, either `"30"` or `30`.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum SeatsInput {
    Number(serde_json::Number),
    Text(String),
}

impl SeatsInput {
    fn parse(&self) -> Result<u32, ApiError> {
        let seats = match self {
            SeatsInput::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
            SeatsInput::Text(text) => text.trim().parse().ok(),
        };

        seats.ok_or_else(|| ApiError::BadRequest(format!("Invalid seats value: {self}")))
    }
}

impl std::fmt::Display for SeatsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeatsInput::Number(number) => write!(f, "{number}"),
            SeatsInput::Text(text) => write!(f, "{text}"),
        }
    }
}

#[derive(Deserialize)]
pub struct ChangeSeatsRequest {
    pub seats: SeatsInput,
}

// -- Response types --

#[derive(Serialize)]
pub struct WebinarCreatedResponse {
    pub id: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebinarResponse {
    pub id: String,
    pub organizer_id: String,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub seats: u32,
}

impl From<Webinar> for WebinarResponse {
    fn from(webinar: Webinar) -> Self {
        Self {
            id: webinar.id().to_string(),
            organizer_id: webinar.organizer_id().to_string(),
            title: webinar.title().to_string(),
            start_date: webinar.start_date(),
            end_date: webinar.end_date(),
            seats: webinar.seats(),
        }
    }
}

// -- Handlers --

/// POST /webinars: organize a new webinar.
#[tracing::instrument(skip(state, payload))]
pub async fn organize(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<OrganizeWebinarRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<WebinarCreatedResponse>), ApiError> {
    let Json(req) = payload?;
    let cmd = OrganizeWebinarCommand::new(
        req.user_id,
        req.title,
        req.seats,
        req.start_date,
        req.end_date,
    );

    let response = state.organize_webinar.execute(cmd).await?;
    let id = response.id.into_inner();

    Ok((
        StatusCode::CREATED,
        Json(WebinarCreatedResponse {
            message: format!("Webinar created with {id}"),
            id,
        }),
    ))
}

/// POST /webinars/:id/seats: change a webinar's capacity.
#[tracing::instrument(skip(state, headers, payload))]
pub async fn change_seats(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    payload: Result<Json<ChangeSeatsRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(req) = payload?;
    let seats = req.seats.parse()?;
    let user = state.caller(&headers);

    state
        .change_seats
        .execute(ChangeSeatsCommand::new(user, id, seats))
        .await?;

    Ok(Json(MessageResponse {
        message: "Seats updated",
    }))
}

/// GET /webinars/:id: load a stored webinar.
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<WebinarResponse>, ApiError> {
    let webinar = state
        .repository
        .find_by_id(&WebinarId::new(id))
        .await
        .map_err(|e| ApiError::Domain(e.into()))?
        .ok_or_else(|| ApiError::NotFound("Webinar not found".to_string()))?;

    Ok(Json(WebinarResponse::from(webinar)))
}
