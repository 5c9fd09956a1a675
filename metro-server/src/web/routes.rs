//! HTTP route handlers.

use std::path::Path as FsPath;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tracing::{debug, warn};

use crate::domain::StationId;
use crate::planner::RouteError;

use super::dto::*;
use super::state::AppState;

/// Shortest accepted search query, in characters.
const MIN_QUERY_CHARS: usize = 2;

/// Create the application router.
///
/// `static_dir` is served under `/static` and `index_file` at `/`.
pub fn create_router(state: AppState, static_dir: &FsPath, index_file: &FsPath) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(index_file))
        .route("/api/health", get(health))
        .route("/api/stations", get(all_stations))
        .route("/api/lines", get(all_lines))
        .route("/api/station/:station_id", get(station))
        .route("/api/search", get(search_stations))
        .route("/api/route", post(calculate_route))
        .route("/api/stats", get(stats))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "Istanbul Metro API",
    })
}

/// All stations grouped by line.
async fn all_stations(State(state): State<AppState>) -> Response {
    Json(Success::new(state.network.stations_by_line())).into_response()
}

/// All lines with their colours.
async fn all_lines(State(state): State<AppState>) -> Response {
    Json(Success::new(state.network.lines())).into_response()
}

/// A single station by id.
async fn station(
    State(state): State<AppState>,
    Path(station_id): Path<i64>,
) -> Result<Response, AppError> {
    let station = state
        .network
        .station(StationId(station_id))
        .ok_or_else(|| AppError::NotFound {
            message: "Station not found".to_string(),
        })?;

    Ok(Json(Success::new(station)).into_response())
}

/// Search stations by name.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<SearchQuery>,
) -> Result<Response, AppError> {
    let query = req.q.unwrap_or_default();
    if query.chars().count() < MIN_QUERY_CHARS {
        return Err(AppError::BadRequest {
            message: format!("Query must be at least {MIN_QUERY_CHARS} characters"),
        });
    }

    let results = state.network.search(&query);
    Ok(Json(SearchResponse::new(results)).into_response())
}

/// Shortest route between two stations.
async fn calculate_route(
    State(state): State<AppState>,
    Json(req): Json<RouteRequest>,
) -> Result<Response, AppError> {
    let route = state
        .network
        .route(req.source_id, req.target_id)
        .map_err(AppError::from)?;

    Ok(Json(Success::new(route)).into_response())
}

/// Network statistics.
async fn stats(State(state): State<AppState>) -> Response {
    Json(Success::new(state.network.stats())).into_response()
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        debug!(error = %e, "route not found");
        AppError::NotFound {
            message: "No route found between the specified stations".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        // Not-found is an ordinary outcome, not a fault
        if status == StatusCode::BAD_REQUEST {
            warn!(%status, %message, "rejected request");
        } else {
            debug!(%status, %message, "request answered with error");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
