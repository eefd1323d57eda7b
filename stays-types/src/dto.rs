//! Data Transfer Objects (DTOs) for requests and responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::BookingId;

// ─────────────────────────────────────────────────────────────────────────────
// Booking DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a new booking.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBookingRequest {
    /// First night of the stay
    #[schema(value_type = String, example = "2024-01-01")]
    pub from_date: NaiveDate,
    /// Checkout date
    #[schema(value_type = String, example = "2024-01-04")]
    pub to_date: NaiveDate,
    /// Guest identity reference
    #[schema(example = "1234-5678-9012")]
    pub aadhar_number: String,
    /// Number of rooms to reserve
    #[schema(example = 2)]
    pub num_of_rooms: u32,
}

/// Request to settle a booking; the booking id comes from the URL path.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProcessPaymentRequest {
    /// Payment mode, "UPI" or "CARD" (case-insensitive)
    #[schema(example = "UPI")]
    pub payment_mode: String,
    /// UPI handle, when paying by UPI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upi_id: Option<String>,
    /// Card number, when paying by card
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Payment DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// The cross-service payment request sent to the payment processor.
///
/// Assembled by the booking orchestrator, so the booking id always matches
/// the booking being settled. The mode string travels verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentRequest {
    /// Payment mode, forwarded exactly as the caller sent it
    #[schema(example = "UPI")]
    pub payment_mode: String,
    /// The booking being settled
    pub booking_id: BookingId,
    /// UPI handle, when paying by UPI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upi_id: Option<String>,
    /// Card number, when paying by card
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
}

impl PaymentRequest {
    /// Binds a payment body to the booking it settles.
    pub fn for_booking(booking_id: BookingId, req: ProcessPaymentRequest) -> Self {
        Self {
            payment_mode: req.payment_mode,
            booking_id,
            upi_id: req.upi_id,
            card_number: req.card_number,
        }
    }
}
