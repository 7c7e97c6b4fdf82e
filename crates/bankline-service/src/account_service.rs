//! Account service trait.

use crate::dto::{CreateAccountRequest, UpdateAccountRequest};
use bankline_core::{Account, BanklineResult};

/// Account operations exposed to the HTTP layer.
///
/// Implementations surface store-derived failures only; cache failures are
/// absorbed below this boundary and never reach the caller.
#[async_trait::async_trait]
pub trait AccountService: Send + Sync {
    /// Fetches all accounts for a customer, from cache or store.
    async fn get_accounts_by_customer_id(&self, customer_id: &str)
        -> BanklineResult<Vec<Account>>;

    /// Creates a new account for a customer.
    async fn create_account(
        &self,
        request: CreateAccountRequest,
        customer_id: &str,
    ) -> BanklineResult<Account>;

    /// Updates the balance of an existing account.
    async fn update_account(
        &self,
        request: UpdateAccountRequest,
        customer_id: &str,
    ) -> BanklineResult<()>;

    /// Deletes an account.
    async fn delete_account(&self, iban: &str, customer_id: &str) -> BanklineResult<()>;
}
