//! # Bankline Repository
//!
//! Durable account storage behind the [`AccountStore`] trait, with a MySQL
//! implementation via SQLx.

pub mod mysql;
pub mod pool;
pub mod traits;

pub use mysql::MySqlAccountStore;
pub use pool::{create_pool, DatabasePool};
pub use traits::AccountStore;
