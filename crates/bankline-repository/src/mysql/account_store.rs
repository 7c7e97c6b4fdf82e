//! MySQL account store implementation.

use crate::{traits::AccountStore, DatabasePool};
use bankline_core::{Account, BanklineError, BanklineResult};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::{debug, error, info};

/// MySQL account store.
#[derive(Clone)]
pub struct MySqlAccountStore {
    pool: Arc<DatabasePool>,
}

impl MySqlAccountStore {
    /// Creates a new MySQL account store.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of an account.
#[derive(Debug, FromRow)]
struct AccountRow {
    iban: String,
    customer_id: String,
    balance: Decimal,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Account {
            iban: row.iban,
            customer_id: row.customer_id,
            balance: row.balance,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait::async_trait]
impl AccountStore for MySqlAccountStore {
    async fn get_accounts(&self, customer_id: &str) -> BanklineResult<Vec<Account>> {
        debug!("Fetching accounts for customer: {}", customer_id);

        let rows = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT iban, customer_id, balance, created_at, updated_at
            FROM accounts
            WHERE customer_id = ?
            ORDER BY created_at
            "#,
        )
        .bind(customer_id)
        .fetch_all(self.pool.inner())
        .await
        .map_err(|e| {
            error!("Database error retrieving accounts for customer {}: {}", customer_id, e);
            BanklineError::RetrievalFailed(format!("Failed to retrieve accounts: {}", e))
        })?;

        info!(
            "Retrieved {} accounts for customer: {}",
            rows.len(),
            customer_id
        );
        Ok(rows.into_iter().map(Account::from).collect())
    }

    async fn insert_account(&self, account: &Account) -> BanklineResult<()> {
        debug!(
            "Inserting account {} for customer: {}",
            account.iban, account.customer_id
        );

        sqlx::query(
            r#"
            INSERT INTO accounts (iban, customer_id, balance, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&account.iban)
        .bind(&account.customer_id)
        .bind(account.balance)
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(self.pool.inner())
        .await
        .map_err(|e| {
            error!("Insert error for IBAN {}: {}", account.iban, e);
            BanklineError::CreationFailed(format!(
                "Database insert failed for IBAN: {}",
                account.iban
            ))
        })?;

        info!("Account inserted successfully for IBAN: {}", account.iban);
        Ok(())
    }

    async fn update_account(
        &self,
        iban: &str,
        balance: Decimal,
        customer_id: &str,
    ) -> BanklineResult<()> {
        debug!("Updating account for customer: {}, IBAN: {}", customer_id, iban);

        let result = sqlx::query(
            "UPDATE accounts SET balance = ?, updated_at = ? WHERE iban = ? AND customer_id = ?",
        )
        .bind(balance)
        .bind(Utc::now())
        .bind(iban)
        .bind(customer_id)
        .execute(self.pool.inner())
        .await
        .map_err(|e| {
            error!("Update error for IBAN {}: {}", iban, e);
            BanklineError::UpdateFailed(format!("Database update failed for IBAN: {}", iban))
        })?;

        if result.rows_affected() == 0 {
            error!("No account matched update for IBAN: {}", iban);
            return Err(BanklineError::not_found(iban));
        }

        info!("Account updated successfully for IBAN: {}", iban);
        Ok(())
    }

    async fn delete_account(&self, iban: &str, customer_id: &str) -> BanklineResult<()> {
        debug!("Deleting account for customer: {}, IBAN: {}", customer_id, iban);

        let result =
            sqlx::query("DELETE FROM accounts WHERE iban = ? AND customer_id = ?")
                .bind(iban)
                .bind(customer_id)
                .execute(self.pool.inner())
                .await
                .map_err(|e| {
                    error!("Delete error for IBAN {}: {}", iban, e);
                    BanklineError::DeletionFailed(format!(
                        "Database deletion failed for IBAN: {}",
                        iban
                    ))
                })?;

        if result.rows_affected() == 0 {
            error!("No account matched delete for IBAN: {}", iban);
            return Err(BanklineError::not_found(iban));
        }

        info!("Account deleted successfully for IBAN: {}", iban);
        Ok(())
    }
}

impl std::fmt::Debug for MySqlAccountStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlAccountStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_row_to_account_conversion() {
        let now = Utc::now();
        let row = AccountRow {
            iban: "RO00AAA123456789".into(),
            customer_id: "cust1".into(),
            balance: dec!(200),
            created_at: now,
            updated_at: now,
        };

        let account = Account::from(row);
        assert_eq!(account.iban, "RO00AAA123456789");
        assert_eq!(account.customer_id, "cust1");
        assert_eq!(account.balance, dec!(200));
    }
}
