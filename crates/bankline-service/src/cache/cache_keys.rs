//! Cache key generators for consistent key naming.

/// Prefix for account list entries.
const ACCOUNTS_PREFIX: &str = "accounts:";

/// Cache key for a customer's account list.
#[must_use]
pub fn accounts(customer_id: &str) -> String {
    format!("{}{}", ACCOUNTS_PREFIX, customer_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accounts_key() {
        assert_eq!(accounts("cust1"), "accounts:cust1");
    }
}
