//! Web layer for the metro route planner.
//!
//! Exposes the network's queries as a JSON API and serves the frontend.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
