//! # Bankline REST
//!
//! Axum HTTP layer for the account service: routing, request parsing,
//! error-to-status mapping, and the request-scoped customer context
//! middleware. Mechanical glue around the service layer.

pub mod controllers;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
