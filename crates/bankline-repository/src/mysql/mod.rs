//! MySQL implementations.

mod account_store;

pub use account_store::MySqlAccountStore;
