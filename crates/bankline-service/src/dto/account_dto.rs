//! Account request DTOs.

use bankline_core::rules;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Request body for creating an account.
///
/// The owning customer id comes from the request path, not the body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    /// IBAN of the new account.
    #[validate(custom(function = rules::valid_iban, message = "Invalid IBAN format"))]
    pub iban: String,

    /// Opening balance; must not be negative.
    #[validate(custom(
        function = rules::non_negative_balance,
        message = "Balance cannot be negative"
    ))]
    pub balance: Decimal,
}

/// Parameters for updating an account's balance.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountRequest {
    /// IBAN of the account to update.
    #[validate(custom(function = rules::not_blank, message = "IBAN is required"))]
    pub iban: String,

    /// New balance; must be greater than zero.
    #[validate(custom(
        function = rules::positive_balance,
        message = "Balance must be greater than 0.0"
    ))]
    pub balance: Decimal,
}
