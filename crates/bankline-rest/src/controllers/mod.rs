//! REST controllers.

pub mod account_controller;
pub mod health_controller;
