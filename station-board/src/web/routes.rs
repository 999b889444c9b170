//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::{SecondsFormat, Utc};

use crate::board::{NowReference, RenderedRow, TimeLocale, UnknownView, View, render_rows};
use crate::domain::timezone_for;
use crate::feed::{FeedError, StationKey};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/board/:country/:station", get(board))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Board for one station at the current (quantized) time.
async fn board(
    State(state): State<AppState>,
    Path((country, station)): Path<(String, String)>,
    Query(query): Query<BoardQuery>,
) -> Result<Json<BoardResponse>, AppError> {
    let key = StationKey::new(&country, &station)?;
    let view = query.view.as_deref().map(str::parse::<View>).transpose()?;
    let now = NowReference::quantized(Utc::now(), state.config.refresh_interval);

    let response = board_response(&state, &key, view, query.locale.as_deref(), now).await?;
    Ok(Json(response))
}

/// Build the board response for a station at `now`.
///
/// Loads the station's schedule on first use. With `view` set, only that
/// view is rendered. The locale defaults to the station's country code.
pub async fn board_response(
    state: &AppState,
    key: &StationKey,
    view: Option<View>,
    locale: Option<&str>,
    now: NowReference,
) -> Result<BoardResponse, AppError> {
    let snapshot = state.schedules.get_or_load(key, now.instant()).await?;
    let board = state
        .cache
        .get_or_compute(key, now, &snapshot, &state.config)
        .await;

    let locale = locale
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(key.country.as_str())
        .to_string();
    let time_locale = TimeLocale::from_tag(&locale);

    let render = |v: View| -> Option<Vec<RenderedRow>> {
        view.is_none_or(|only| only == v)
            .then(|| render_rows(board.view(v), &key.country, time_locale))
    };

    Ok(BoardResponse {
        country: key.country.clone(),
        station: key.station.clone(),
        timezone: timezone_for(&key.country).name().to_string(),
        now: board.now.to_rfc3339_opts(SecondsFormat::Secs, true),
        schedule_version: snapshot.version,
        arrivals: render(View::Arrivals),
        departures: render(View::Departures),
        tracks: render(View::Tracks),
        locale,
    })
}

// Error handling

#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<FeedError> for AppError {
    fn from(e: FeedError) -> Self {
        match e {
            FeedError::UnknownStation(_) => AppError::NotFound {
                message: e.to_string(),
            },
            FeedError::InvalidStation(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<UnknownView> for AppError {
    fn from(e: UnknownView) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match self {
            AppError::BadRequest { message }
            | AppError::NotFound { message }
            | AppError::Internal { message } => message,
        };

        if status.is_server_error() {
            tracing::error!(%status, %message, "request failed");
        } else {
            tracing::debug!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
