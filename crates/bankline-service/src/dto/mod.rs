//! Request DTOs for the account service.

mod account_dto;

pub use account_dto::{CreateAccountRequest, UpdateAccountRequest};
