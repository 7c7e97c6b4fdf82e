//! Account entity.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A customer bank account.
///
/// Uniqueness is on the `(customer_id, iban)` pair; the balance is never
/// negative. JSON uses camelCase field names (`customerId`, `createdAt`),
/// matching the service's wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Account {
    /// IBAN of the account.
    pub iban: String,

    /// Id of the owning customer.
    pub customer_id: String,

    /// Current account balance.
    pub balance: Decimal,

    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new account with fresh timestamps.
    #[must_use]
    pub fn new(iban: String, customer_id: String, balance: Decimal) -> Self {
        let now = Utc::now();
        Self {
            iban,
            customer_id,
            balance,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the balance and bumps the update timestamp.
    pub fn set_balance(&mut self, balance: Decimal) {
        self.balance = balance;
        self.updated_at = Utc::now();
    }
}
