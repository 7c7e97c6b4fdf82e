//! Cache-aside account service implementation.

use crate::account_service::AccountService;
use crate::cache::AccountCache;
use crate::dto::{CreateAccountRequest, UpdateAccountRequest};
use bankline_core::{Account, BanklineResult, ValidateExt};
use bankline_repository::AccountStore;
use std::sync::Arc;
use tracing::{debug, info};

/// Account service coordinating the authoritative store and the cache.
///
/// The store write always happens first; cache mutation is strictly
/// best-effort and its failure is never surfaced to the caller. Writes
/// mutate the cached list in place instead of evicting it, trading a small
/// staleness window under concurrent writes (bounded by the TTL) for
/// avoided store round trips on the read path.
pub struct AccountServiceImpl<S: AccountStore> {
    store: Arc<S>,
    cache: AccountCache,
}

impl<S: AccountStore> AccountServiceImpl<S> {
    /// Creates a new account service.
    pub fn new(store: Arc<S>, cache: AccountCache) -> Self {
        Self { store, cache }
    }
}

#[async_trait::async_trait]
impl<S: AccountStore + 'static> AccountService for AccountServiceImpl<S> {
    async fn get_accounts_by_customer_id(
        &self,
        customer_id: &str,
    ) -> BanklineResult<Vec<Account>> {
        debug!("Fetching accounts for customer: {}", customer_id);

        if let Some(accounts) = self.cache.get_accounts(customer_id).await {
            return Ok(accounts);
        }

        let accounts = self.store.get_accounts(customer_id).await?;

        // Best effort; an empty list is cached too (empty != miss).
        self.cache.set_accounts(customer_id, &accounts).await;

        Ok(accounts)
    }

    async fn create_account(
        &self,
        request: CreateAccountRequest,
        customer_id: &str,
    ) -> BanklineResult<Account> {
        debug!("Insert account for customer: {}", customer_id);

        request.validate_request()?;

        let account = Account::new(request.iban, customer_id.to_string(), request.balance);

        self.store.insert_account(&account).await?;
        self.cache.append_account(customer_id, &account).await;

        info!("Created new account with IBAN: {}", account.iban);
        Ok(account)
    }

    async fn update_account(
        &self,
        request: UpdateAccountRequest,
        customer_id: &str,
    ) -> BanklineResult<()> {
        debug!("Updating account for IBAN: {}", request.iban);

        request.validate_request()?;

        self.store
            .update_account(&request.iban, request.balance, customer_id)
            .await?;
        self.cache
            .update_balance(customer_id, &request.iban, request.balance)
            .await;

        info!("Updated account with IBAN: {} successfully", request.iban);
        Ok(())
    }

    async fn delete_account(&self, iban: &str, customer_id: &str) -> BanklineResult<()> {
        debug!("Deleting account for IBAN: {}", iban);

        self.store.delete_account(iban, customer_id).await?;
        self.cache.remove_account(customer_id, iban).await;

        info!("Deleted account with IBAN: {} successfully", iban);
        Ok(())
    }
}

impl<S: AccountStore> std::fmt::Debug for AccountServiceImpl<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountServiceImpl").finish_non_exhaustive()
    }
}
