//! Account store trait.

use bankline_core::{Account, BanklineResult};
use rust_decimal::Decimal;

/// Durable storage for accounts, keyed by `(customer_id, iban)`.
///
/// The store is authoritative: its result always wins over the cache. Each
/// mutating call reports `NotFound` distinctly when the affected-row count
/// is zero.
#[async_trait::async_trait]
pub trait AccountStore: Send + Sync {
    /// Returns all accounts for the given customer.
    async fn get_accounts(&self, customer_id: &str) -> BanklineResult<Vec<Account>>;

    /// Inserts a new account.
    async fn insert_account(&self, account: &Account) -> BanklineResult<()>;

    /// Updates the balance of the account matching `(iban, customer_id)`.
    async fn update_account(
        &self,
        iban: &str,
        balance: Decimal,
        customer_id: &str,
    ) -> BanklineResult<()>;

    /// Deletes the account matching `(iban, customer_id)`.
    async fn delete_account(&self, iban: &str, customer_id: &str) -> BanklineResult<()>;
}
