//! HTTP middleware.

pub mod customer_context;
pub mod logging;

pub use customer_context::customer_context_middleware;
pub use logging::logging_middleware;
