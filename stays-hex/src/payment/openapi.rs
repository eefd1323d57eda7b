//! OpenAPI specification and documentation for the payment service.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use utoipa::OpenApi;

use stays_types::domain::{BookingId, Transaction, TransactionId};
use stays_types::dto::PaymentRequest;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Record a transaction
#[utoipa::path(
    post,
    path = "/transaction",
    tag = "transactions",
    request_body = PaymentRequest,
    responses(
        (status = 201, description = "Transaction recorded; body is the bare integer id", body = TransactionId),
        (status = 400, description = "Malformed request")
    )
)]
async fn create_transaction() {}

/// Get transaction by ID
#[utoipa::path(
    get,
    path = "/transaction/{id}",
    tag = "transactions",
    params(
        ("id" = TransactionId, Path, description = "Transaction ID")
    ),
    responses(
        (status = 200, description = "Transaction details", body = Transaction),
        (status = 404, description = "Transaction not found")
    )
)]
async fn get_transaction() {}

/// OpenAPI documentation for the Payment API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payment Service API",
        version = "1.0.0",
        description = "Transaction recording for the booking service. Requests are persisted verbatim and answered with the generated transaction id.",
        license(name = "MIT"),
    ),
    paths(health, create_transaction, get_transaction),
    components(
        schemas(PaymentRequest, Transaction, TransactionId, BookingId)
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "transactions", description = "Transaction recording and lookup"),
    )
)]
pub struct ApiDoc;
