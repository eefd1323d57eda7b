//! OpenAPI specification and documentation for the booking service.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use utoipa::OpenApi;

use stays_types::domain::{Booking, BookingId, TransactionId};
use stays_types::dto::{CreateBookingRequest, ProcessPaymentRequest};

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

/// Create a new booking
#[utoipa::path(
    post,
    path = "/booking",
    tag = "bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created with allocated rooms and computed price", body = Booking),
        (status = 400, description = "Malformed request")
    )
)]
async fn create_booking() {}

/// Settle a booking through the payment service
#[utoipa::path(
    post,
    path = "/booking/{id}/transaction",
    tag = "bookings",
    request_body = ProcessPaymentRequest,
    params(
        ("id" = BookingId, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Payment recorded, updated booking returned", body = Booking),
        (status = 400, description = "Invalid payment mode"),
        (status = 404, description = "Booking not found"),
        (status = 502, description = "Payment service unavailable")
    )
)]
async fn process_payment() {}

/// Get booking by ID
#[utoipa::path(
    get,
    path = "/booking/{id}",
    tag = "bookings",
    params(
        ("id" = BookingId, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking details", body = Booking),
        (status = 404, description = "Booking not found")
    )
)]
async fn get_booking() {}

/// OpenAPI documentation for the Booking API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Booking Service API",
        version = "1.0.0",
        description = "Room reservations: date-range pricing, random room allocation, and payment completion through the payment service.",
        license(name = "MIT"),
    ),
    paths(health, create_booking, process_payment, get_booking),
    components(
        schemas(
            CreateBookingRequest,
            ProcessPaymentRequest,
            Booking,
            BookingId,
            TransactionId,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "bookings", description = "Booking creation, payment, and lookup"),
    )
)]
pub struct ApiDoc;
