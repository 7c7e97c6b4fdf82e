//! # Bankline Core
//!
//! Core types, error definitions, and the request-scoped customer context
//! shared by all layers of the Bankline account service.

pub mod account;
pub mod context;
pub mod error;
pub mod result;
pub mod validation;

pub use account::*;
pub use context::*;
pub use error::*;
pub use result::*;
pub use validation::*;
