//! Validation utilities.

use crate::BanklineError;
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `BanklineError` on failure.
    fn validate_request(&self) -> Result<(), BanklineError> {
        self.validate().map_err(validation_errors_to_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to a `BanklineError`.
#[must_use]
pub fn validation_errors_to_error(errors: ValidationErrors) -> BanklineError {
    let message = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let detail = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |m| m.to_string());
                format!("{}: {}", field, detail)
            })
        })
        .collect::<Vec<_>>()
        .join("; ");

    BanklineError::Validation(message)
}

/// Common validation functions.
pub mod rules {
    use rust_decimal::Decimal;
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }

    /// Validates the IBAN shape: two letters, two digits, 1-30 alphanumerics.
    pub fn valid_iban(iban: &str) -> Result<(), ValidationError> {
        let bytes = iban.as_bytes();
        if bytes.len() < 5 || bytes.len() > 34 {
            return Err(ValidationError::new("iban_invalid_length"));
        }
        let (country, rest) = bytes.split_at(2);
        let (check, body) = rest.split_at(2);
        if !country.iter().all(u8::is_ascii_uppercase) {
            return Err(ValidationError::new("iban_invalid_country_code"));
        }
        if !check.iter().all(u8::is_ascii_digit) {
            return Err(ValidationError::new("iban_invalid_check_digits"));
        }
        if !body
            .iter()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            return Err(ValidationError::new("iban_invalid_characters"));
        }
        Ok(())
    }

    /// Validates that a balance is not negative.
    pub fn non_negative_balance(balance: &Decimal) -> Result<(), ValidationError> {
        if balance.is_sign_negative() && !balance.is_zero() {
            return Err(ValidationError::new("balance_negative"));
        }
        Ok(())
    }

    /// Validates that a balance is strictly positive.
    pub fn positive_balance(balance: &Decimal) -> Result<(), ValidationError> {
        if balance.is_sign_negative() || balance.is_zero() {
            return Err(ValidationError::new("balance_not_positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::rules::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("cust1").is_ok());
        assert!(not_blank("").is_err());
        assert!(not_blank("   ").is_err());
    }

    #[test]
    fn test_valid_iban_accepts_well_formed() {
        assert!(valid_iban("RO00AAA123456789").is_ok());
        assert!(valid_iban("DE44500105175407324931").is_ok());
        assert!(valid_iban("GB29N").is_ok()); // minimal body of one char
    }

    #[test]
    fn test_valid_iban_rejects_malformed() {
        assert!(valid_iban("").is_err());
        assert!(valid_iban("RO00").is_err()); // no body
        assert!(valid_iban("ro00AAA123").is_err()); // lowercase country
        assert!(valid_iban("ROXXAAA123").is_err()); // non-digit check
        assert!(valid_iban("RO00aaa123").is_err()); // lowercase body
        assert!(valid_iban("RO00AAA123456789012345678901234567890").is_err()); // too long
    }

    #[test]
    fn test_balance_rules() {
        assert!(non_negative_balance(&dec!(0)).is_ok());
        assert!(non_negative_balance(&dec!(10.50)).is_ok());
        assert!(non_negative_balance(&dec!(-0.01)).is_err());

        assert!(positive_balance(&dec!(0.01)).is_ok());
        assert!(positive_balance(&dec!(0)).is_err());
        assert!(positive_balance(&dec!(-1)).is_err());
    }
}
