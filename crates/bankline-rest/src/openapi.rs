//! OpenAPI documentation configuration.

use bankline_core::{Account, ErrorResponse};
use bankline_service::{CreateAccountRequest, UpdateAccountRequest};
use utoipa::OpenApi;

use crate::responses::MessageResponse;

/// OpenAPI documentation for the Bankline API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bankline API",
        version = "1.0.0",
        description = "RESTful API for managing customer bank accounts"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        crate::controllers::account_controller::get_accounts_by_customer_id,
        crate::controllers::account_controller::create_account,
        crate::controllers::account_controller::update_account,
        crate::controllers::account_controller::delete_account,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            Account,
            ErrorResponse,
            CreateAccountRequest,
            UpdateAccountRequest,
            MessageResponse,
        )
    ),
    tags(
        (name = "accounts", description = "Account management endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
