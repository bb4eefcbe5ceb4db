//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::warn;

use crate::domain::Station;
use crate::planner::RouteError;
use crate::remote::UnknownKeyCode;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .route("/route", get(find_route))
        .route("/frame", get(current_frame))
        .route("/remote", post(press_remote))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every station with its line and panel position.
async fn list_stations() -> Json<StationsResponse> {
    let stations = Station::all().map(StationResult::from_station).collect();
    Json(StationsResponse { stations })
}

/// Route between two stations.
async fn find_route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let path = state.finder.try_find(req.from, req.to)?;
    Ok(Json(RouteResponse::from_path(&path)))
}

/// Snapshot of the current frame.
async fn current_frame(State(state): State<AppState>) -> Json<FrameResponse> {
    let panel = state.panel.lock().await;
    Json(FrameResponse::new(panel.controller(), panel.frame()))
}

/// Feed a received IR code to the panel.
async fn press_remote(
    State(state): State<AppState>,
    Json(req): Json<RemoteRequest>,
) -> Result<Json<RemoteResponse>, AppError> {
    let mut panel = state.panel.lock().await;
    let (key, applied) = panel.press(req.code)?;
    Ok(Json(RemoteResponse::new(key, applied, panel.controller())))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::OutOfRange(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            RouteError::Unreachable { .. } => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl From<UnknownKeyCode> for AppError {
    fn from(e: UnknownKeyCode) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
