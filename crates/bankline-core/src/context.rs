//! Request-scoped customer context.
//!
//! Carries the customer id of the in-flight request so the error and
//! logging layers can correlate without threading it through every call
//! signature. Implemented as a tokio task-local scoped around each request
//! future: the value is per request, never shared across requests, and is
//! dropped on every exit path (success, error, or panic unwind) when the
//! scope ends.

use std::cell::RefCell;
use std::future::Future;

tokio::task_local! {
    static CUSTOMER_ID: RefCell<Option<String>>;
}

/// Fallback value returned when no customer id has been set.
pub const UNKNOWN_CUSTOMER: &str = "unknown";

/// Request-scoped holder for the current customer id.
pub struct CustomerContext;

impl CustomerContext {
    /// Runs `fut` inside a fresh customer context scope.
    ///
    /// The request middleware wraps each inbound request with this; nested
    /// `set`/`current` calls observe the scope's value. The slot is dropped
    /// when the future completes, however it completes.
    pub async fn scope<F>(fut: F) -> F::Output
    where
        F: Future,
    {
        CUSTOMER_ID.scope(RefCell::new(None), fut).await
    }

    /// Records the customer id for the current request.
    ///
    /// A no-op outside a scope (e.g. in unit tests that call services
    /// directly).
    pub fn set(customer_id: impl Into<String>) {
        let customer_id = customer_id.into();
        let _ = CUSTOMER_ID.try_with(|slot| {
            *slot.borrow_mut() = Some(customer_id);
        });
    }

    /// Returns the customer id for the current request, or `"unknown"`.
    #[must_use]
    pub fn current() -> String {
        CUSTOMER_ID
            .try_with(|slot| slot.borrow().clone())
            .ok()
            .flatten()
            .unwrap_or_else(|| UNKNOWN_CUSTOMER.to_string())
    }

    /// Clears the customer id within the current scope.
    ///
    /// Scope teardown already guarantees cleanup; this exists for handlers
    /// that want to drop the id early.
    pub fn clear() {
        let _ = CUSTOMER_ID.try_with(|slot| {
            *slot.borrow_mut() = None;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unset_context_is_unknown() {
        CustomerContext::scope(async {
            assert_eq!(CustomerContext::current(), "unknown");
        })
        .await;
    }

    #[tokio::test]
    async fn test_set_and_current() {
        CustomerContext::scope(async {
            CustomerContext::set("cust1");
            assert_eq!(CustomerContext::current(), "cust1");
        })
        .await;
    }

    #[tokio::test]
    async fn test_clear_resets_to_unknown() {
        CustomerContext::scope(async {
            CustomerContext::set("cust1");
            CustomerContext::clear();
            assert_eq!(CustomerContext::current(), "unknown");
        })
        .await;
    }

    #[tokio::test]
    async fn test_outside_scope_is_unknown() {
        // No scope active at all: set is a no-op, current falls back.
        CustomerContext::set("cust1");
        assert_eq!(CustomerContext::current(), "unknown");
    }

    #[tokio::test]
    async fn test_no_leakage_across_scopes() {
        CustomerContext::scope(async {
            CustomerContext::set("cust1");
        })
        .await;

        CustomerContext::scope(async {
            assert_eq!(CustomerContext::current(), "unknown");
        })
        .await;
    }

    #[tokio::test]
    async fn test_concurrent_scopes_are_isolated() {
        let a = CustomerContext::scope(async {
            CustomerContext::set("cust-a");
            tokio::task::yield_now().await;
            CustomerContext::current()
        });
        let b = CustomerContext::scope(async {
            CustomerContext::set("cust-b");
            tokio::task::yield_now().await;
            CustomerContext::current()
        });

        let (a, b) = tokio::join!(a, b);
        assert_eq!(a, "cust-a");
        assert_eq!(b, "cust-b");
    }
}
