//! # Bankline Service
//!
//! Business logic for the account API. The interesting part is the
//! cache-aside coordination in [`AccountServiceImpl`]: reads populate the
//! Redis cache on miss, writes mutate the cached account list in place, and
//! cache failures never break the authoritative store path.

pub mod account_service;
pub mod account_service_impl;
pub mod cache;
pub mod dto;

pub use account_service::AccountService;
pub use account_service_impl::AccountServiceImpl;
pub use dto::{CreateAccountRequest, UpdateAccountRequest};
