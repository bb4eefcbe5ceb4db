//! Web layer for the line diagram.
//!
//! Provides HTTP endpoints for route lookup, frame snapshots and remote
//! control input.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
