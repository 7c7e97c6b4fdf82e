//! Result type alias for Bankline.

use crate::BanklineError;

/// A specialized `Result` type for Bankline operations.
pub type BanklineResult<T> = Result<T, BanklineError>;
