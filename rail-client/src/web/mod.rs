//! Web layer for the rail client.
//!
//! Exposes station lookup, departures and routes as JSON endpoints.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, LiveRailApi};
