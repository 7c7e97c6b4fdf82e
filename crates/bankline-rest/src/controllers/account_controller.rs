//! Account management controller.

use crate::{
    responses::{created, ok, ApiResult, AppError, MessageResponse},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, put},
    Json, Router,
};
use bankline_core::{Account, CustomerContext};
use bankline_service::{CreateAccountRequest, UpdateAccountRequest};
use tracing::debug;

/// Creates the account router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/:customer_id",
            get(get_accounts_by_customer_id).post(create_account),
        )
        .route("/:customer_id/update", put(update_account))
        .route("/:customer_id/delete/:iban", delete(delete_account))
}

/// List all accounts belonging to a customer.
#[utoipa::path(
    get,
    path = "/accounts/{customer_id}",
    tag = "accounts",
    params(
        ("customer_id" = String, Path, description = "Customer identifier")
    ),
    responses(
        (status = 200, description = "Accounts for the customer", body = Vec<Account>),
        (status = 404, description = "Retrieval failed", body = bankline_core::ErrorResponse)
    )
)]
pub async fn get_accounts_by_customer_id(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> ApiResult<Vec<Account>> {
    CustomerContext::set(&customer_id);
    debug!(customer_id = %customer_id, "Get accounts request");

    let accounts = state
        .account_service
        .get_accounts_by_customer_id(&customer_id)
        .await?;
    ok(accounts)
}

/// Create a new account for a customer.
#[utoipa::path(
    post,
    path = "/accounts/{customer_id}",
    tag = "accounts",
    params(
        ("customer_id" = String, Path, description = "Customer identifier")
    ),
    request_body = CreateAccountRequest,
    responses(
        (status = 201, description = "Account created", body = Account),
        (status = 400, description = "Validation or creation failure", body = bankline_core::ErrorResponse)
    )
)]
pub async fn create_account(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<Account>), AppError> {
    CustomerContext::set(&customer_id);
    debug!(customer_id = %customer_id, iban = %request.iban, "Create account request");

    let account = state
        .account_service
        .create_account(request, &customer_id)
        .await?;
    Ok(created(account))
}

/// Update the balance of an existing account.
#[utoipa::path(
    put,
    path = "/accounts/{customer_id}/update",
    tag = "accounts",
    params(
        ("customer_id" = String, Path, description = "Customer identifier"),
        UpdateAccountRequest
    ),
    responses(
        (status = 200, description = "Account updated", body = MessageResponse),
        (status = 400, description = "Validation or update failure", body = bankline_core::ErrorResponse)
    )
)]
pub async fn update_account(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
    Query(request): Query<UpdateAccountRequest>,
) -> ApiResult<MessageResponse> {
    CustomerContext::set(&customer_id);
    debug!(customer_id = %customer_id, iban = %request.iban, "Update account request");

    state
        .account_service
        .update_account(request, &customer_id)
        .await?;
    ok(MessageResponse::new("Account updated successfully."))
}

/// Delete an account.
#[utoipa::path(
    delete,
    path = "/accounts/{customer_id}/delete/{iban}",
    tag = "accounts",
    params(
        ("customer_id" = String, Path, description = "Customer identifier"),
        ("iban" = String, Path, description = "Account IBAN")
    ),
    responses(
        (status = 200, description = "Account deleted", body = MessageResponse),
        (status = 400, description = "Deletion failure", body = bankline_core::ErrorResponse)
    )
)]
pub async fn delete_account(
    State(state): State<AppState>,
    Path((customer_id, iban)): Path<(String, String)>,
) -> ApiResult<MessageResponse> {
    CustomerContext::set(&customer_id);
    debug!(customer_id = %customer_id, iban = %iban, "Delete account request");

    state
        .account_service
        .delete_account(&iban, &customer_id)
        .await?;
    ok(MessageResponse::new("Account deleted successfully."))
}
