//! Unified error types for all layers of the application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for the Bankline account service.
///
/// Store-derived failures propagate to the caller; cache failures never do
/// (they are absorbed inside the cache layer), so the `Cache` variant only
/// ever appears in logs and in the cache component's internals.
#[derive(Error, Debug)]
pub enum BanklineError {
    /// No account row matched the given IBAN for the customer.
    #[error("Account not found for IBAN: {iban}")]
    NotFound { iban: String },

    /// Request validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Reading accounts from the store failed.
    #[error("Account retrieval failed: {0}")]
    RetrievalFailed(String),

    /// Inserting an account into the store failed.
    #[error("Account creation failed: {0}")]
    CreationFailed(String),

    /// Updating an account in the store failed.
    #[error("Account update failed: {0}")]
    UpdateFailed(String),

    /// Deleting an account from the store failed.
    #[error("Account deletion failed: {0}")]
    DeletionFailed(String),

    /// Database error outside a specific account operation.
    #[error("Database error: {0}")]
    Database(String),

    /// Redis/cache backend error.
    #[error("Cache error: {0}")]
    Cache(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BanklineError {
    /// Returns the HTTP status code for this error.
    ///
    /// The mapping mirrors the original service's exception handler:
    /// retrieval failures and missing accounts map to 404, failed mutations
    /// and validation to 400, infrastructure errors to 500.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } | Self::RetrievalFailed(_) => 404,
            Self::Validation(_)
            | Self::CreationFailed(_)
            | Self::UpdateFailed(_)
            | Self::DeletionFailed(_) => 400,
            Self::Database(_)
            | Self::Cache(_)
            | Self::Configuration(_)
            | Self::Internal(_)
            | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "ACCOUNT_NOT_FOUND",
            Self::Validation(_) => "INVALID_REQUEST_DATA",
            Self::RetrievalFailed(_) => "ACCOUNT_RETRIEVAL_ERROR",
            Self::CreationFailed(_) => "ACCOUNT_CREATION_ERROR",
            Self::UpdateFailed(_) => "ACCOUNT_UPDATE_ERROR",
            Self::DeletionFailed(_) => "ACCOUNT_DELETION_ERROR",
            Self::Database(_) => "DATABASE_OPERATION_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "GENERIC_ERROR",
        }
    }

    /// Creates a not found error for an IBAN.
    #[must_use]
    pub fn not_found<T: Into<String>>(iban: T) -> Self {
        Self::NotFound { iban: iban.into() }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for BanklineError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<serde_json::Error> for BanklineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error response for API responses.
///
/// Mirrors the original service's error body: a machine-readable code, a
/// human-readable message, the customer id resolved from the request
/// context, and a timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Customer id the failing request was operating on, or "unknown".
    pub customer_id: String,
    /// When the error was produced.
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Creates a new error response from a `BanklineError`.
    #[must_use]
    pub fn from_error(error: &BanklineError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            customer_id: "unknown".to_string(),
            timestamp: Utc::now(),
        }
    }

    /// Sets the customer id.
    #[must_use]
    pub fn with_customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = customer_id.into();
        self
    }
}

impl From<&BanklineError> for ErrorResponse {
    fn from(error: &BanklineError) -> Self {
        Self::from_error(error)
    }
}
