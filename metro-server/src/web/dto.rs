//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::StationId;

/// Request to plan a route.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Station to start from
    pub source_id: StationId,

    /// Station to go to
    pub target_id: StationId,
}

/// Query string of a station search.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Text to look for in station names
    pub q: Option<String>,
}

/// Successful response wrapper.
#[derive(Debug, Serialize)]
pub struct Success<T> {
    /// Always "success"
    pub status: &'static str,

    /// Response payload
    pub data: T,
}

impl<T> Success<T> {
    /// Wrap a payload.
    pub fn new(data: T) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}

/// Search response: the usual wrapper plus a result count.
#[derive(Debug, Serialize)]
pub struct SearchResponse<T> {
    pub status: &'static str,
    pub data: Vec<T>,
    pub count: usize,
}

impl<T> SearchResponse<T> {
    /// Wrap search results.
    pub fn new(data: Vec<T>) -> Self {
        Self {
            status: "success",
            count: data.len(),
            data,
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
