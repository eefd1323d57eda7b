//! HTTP request handlers for the payment service.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use stays_types::{AppError, PaymentRequest, TransactionId, TransactionRepository};

use crate::PaymentService;
use crate::http::ApiError;

/// Application state shared across handlers.
pub struct AppState<R: TransactionRepository> {
    pub service: PaymentService<R>,
}

/// Record a transaction.
///
/// Responds with the bare integer transaction id, the wire format the
/// booking service expects.
#[tracing::instrument(skip(state, req), fields(booking_id = %req.booking_id))]
pub async fn create_transaction<R: TransactionRepository>(
    State(state): State<Arc<AppState<R>>>,
    Json(req): Json<PaymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let transaction_id = state.service.process_transaction(req).await?;
    Ok((StatusCode::CREATED, Json(transaction_id)))
}

/// Get transaction by ID.
#[tracing::instrument(skip(state), fields(transaction_id = %id))]
pub async fn get_transaction<R: TransactionRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let transaction_id: TransactionId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid transaction ID".into()))?;

    let tx = state.service.transaction(transaction_id).await?;
    Ok(Json(tx))
}
