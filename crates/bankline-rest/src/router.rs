//! Main application router.

use crate::{
    controllers::{account_controller, health_controller},
    middleware::{customer_context_middleware, logging_middleware},
    openapi::ApiDoc,
    state::AppState,
};
use axum::{middleware, routing::get, Router};
use bankline_config::ServerConfig;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Creates the main application router.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let cors = create_cors_layer(server_config);

    let api_router = Router::new()
        .nest("/accounts", account_controller::router())
        .with_state(state);

    let router = Router::new()
        // Health endpoints
        .merge(health_controller::router())
        // API v1
        .nest("/api/v1", api_router)
        // Swagger UI and OpenAPI document
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Root endpoint
        .route("/", get(root))
        // Middleware layers
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(customer_context_middleware));

    info!("Router created with REST endpoints and Swagger UI at /swagger-ui");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if server_config.cors_enabled {
        if server_config.cors_origins.contains(&"*".to_string()) {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    } else {
        CorsLayer::new()
    }
}

/// Root endpoint handler.
async fn root() -> &'static str {
    "Bankline API v1"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use bankline_core::{Account, BanklineError, BanklineResult};
    use bankline_service::{AccountService, CreateAccountRequest, UpdateAccountRequest};
    use http_body_util::BodyExt;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::Arc;
    use tower::ServiceExt;

    /// Service stub backed by a fixed set of accounts for one customer.
    struct StubAccountService {
        customer_id: String,
        accounts: Vec<Account>,
    }

    impl StubAccountService {
        fn new(customer_id: &str, accounts: Vec<Account>) -> Self {
            Self {
                customer_id: customer_id.to_string(),
                accounts,
            }
        }
    }

    #[async_trait::async_trait]
    impl AccountService for StubAccountService {
        async fn get_accounts_by_customer_id(
            &self,
            customer_id: &str,
        ) -> BanklineResult<Vec<Account>> {
            if customer_id == self.customer_id {
                Ok(self.accounts.clone())
            } else {
                Err(BanklineError::RetrievalFailed(format!(
                    "Failed to retrieve accounts for customer: {customer_id}"
                )))
            }
        }

        async fn create_account(
            &self,
            request: CreateAccountRequest,
            customer_id: &str,
        ) -> BanklineResult<Account> {
            Ok(Account::new(
                request.iban,
                customer_id.to_string(),
                request.balance,
            ))
        }

        async fn update_account(
            &self,
            request: UpdateAccountRequest,
            customer_id: &str,
        ) -> BanklineResult<()> {
            if self
                .accounts
                .iter()
                .any(|a| a.iban == request.iban && customer_id == self.customer_id)
            {
                Ok(())
            } else {
                Err(BanklineError::not_found(&request.iban))
            }
        }

        async fn delete_account(&self, iban: &str, customer_id: &str) -> BanklineResult<()> {
            if self
                .accounts
                .iter()
                .any(|a| a.iban == iban && customer_id == self.customer_id)
            {
                Ok(())
            } else {
                Err(BanklineError::not_found(iban))
            }
        }
    }

    fn test_router(accounts: Vec<Account>) -> Router {
        let service = Arc::new(StubAccountService::new("CUST-1", accounts));
        let state = AppState::new(service);
        create_router(state, &ServerConfig::default())
    }

    fn sample_account(iban: &str, balance: Decimal) -> Account {
        Account::new(iban.to_string(), "CUST-1".to_string(), balance)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body collect")
            .to_bytes();
        serde_json::from_slice(&bytes).expect("body is JSON")
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let router = test_router(vec![]);
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn test_get_accounts_returns_list() {
        let router = test_router(vec![sample_account("DE44500105175407324931", dec!(120.50))]);
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/accounts/CUST-1")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json.as_array().map(Vec::len), Some(1));
        assert_eq!(json[0]["iban"], "DE44500105175407324931");
        assert_eq!(json[0]["customerId"], "CUST-1");
    }

    #[tokio::test]
    async fn test_get_accounts_unknown_customer_is_not_found() {
        let router = test_router(vec![]);
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/accounts/UNKNOWN")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["code"], "ACCOUNT_RETRIEVAL_ERROR");
        // Error body carries the customer id captured by the request scope.
        assert_eq!(json["customerId"], "UNKNOWN");
    }

    #[tokio::test]
    async fn test_create_account_returns_created() {
        let router = test_router(vec![]);
        let body = serde_json::json!({
            "iban": "DE44500105175407324931",
            "balance": "300.00"
        });
        let response = router
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/v1/accounts/CUST-1")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["iban"], "DE44500105175407324931");
        assert_eq!(json["customerId"], "CUST-1");
    }

    #[tokio::test]
    async fn test_update_account_via_query_params() {
        let router = test_router(vec![sample_account("DE44500105175407324931", dec!(100))]);
        let response = router
            .oneshot(
                Request::builder()
                    .method(Method::PUT)
                    .uri(
                        "/api/v1/accounts/CUST-1/update?iban=DE44500105175407324931&balance=350.50",
                    )
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Account updated successfully.");
    }

    #[tokio::test]
    async fn test_delete_account() {
        let router = test_router(vec![sample_account("DE44500105175407324931", dec!(100))]);
        let response = router
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri("/api/v1/accounts/CUST-1/delete/DE44500105175407324931")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Account deleted successfully.");
    }

    #[tokio::test]
    async fn test_delete_missing_account_maps_to_not_found() {
        let router = test_router(vec![]);
        let response = router
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri("/api/v1/accounts/CUST-1/delete/DE44500105175407324931")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["code"], "ACCOUNT_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_root_endpoint() {
        let router = test_router(vec![]);
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
    }
}
