//! # Bankline Config
//!
//! Layered configuration loading for the Bankline account service.

pub mod app_config;
pub mod loader;

pub use app_config::*;
pub use loader::*;
