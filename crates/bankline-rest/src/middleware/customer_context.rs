//! Customer context middleware.
//!
//! Opens a fresh request-scoped [`CustomerContext`] around every request.
//! Handlers populate the customer id after extracting it from the path;
//! the scope is dropped when the response is produced, so the id never
//! leaks across requests regardless of how the handler exits.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use bankline_core::CustomerContext;

/// Wraps the rest of the stack in a per-request customer context scope.
pub async fn customer_context_middleware(request: Request<Body>, next: Next) -> Response {
    CustomerContext::scope(next.run(request)).await
}
