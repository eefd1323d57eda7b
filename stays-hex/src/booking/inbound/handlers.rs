//! HTTP request handlers for the booking service.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use stays_types::{
    AppError, BookingId, BookingRepository, CreateBookingRequest, PaymentGateway,
    ProcessPaymentRequest,
};

use crate::BookingService;
use crate::http::ApiError;

/// Application state shared across handlers.
pub struct AppState<R: BookingRepository, G: PaymentGateway> {
    pub service: BookingService<R, G>,
}

/// Create a new booking.
#[tracing::instrument(skip(state, req), fields(num_of_rooms = req.num_of_rooms))]
pub async fn create_booking<R: BookingRepository, G: PaymentGateway>(
    State(state): State<Arc<AppState<R, G>>>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let booking = state.service.create_booking(req).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// Settle a booking through the payment service.
#[tracing::instrument(skip(state, req), fields(booking_id = %id, payment_mode = %req.payment_mode))]
pub async fn process_payment<R: BookingRepository, G: PaymentGateway>(
    State(state): State<Arc<AppState<R, G>>>,
    Path(id): Path<String>,
    Json(req): Json<ProcessPaymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let booking_id: BookingId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid booking ID".into()))?;

    let booking = state.service.process_payment(booking_id, req).await?;
    Ok(Json(booking))
}

/// Get booking by ID.
#[tracing::instrument(skip(state), fields(booking_id = %id))]
pub async fn get_booking<R: BookingRepository, G: PaymentGateway>(
    State(state): State<Arc<AppState<R, G>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let booking_id: BookingId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid booking ID".into()))?;

    let booking = state.service.booking(booking_id).await?;
    Ok(Json(booking))
}
