//! Booking domain model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::transaction::TransactionId;

/// Unique identifier for a Booking.
///
/// Assigned by the booking store on insert; never generated in application
/// code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct BookingId(i64);

impl BookingId {
    /// Wraps an existing database key.
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// Returns the underlying integer key.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for BookingId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// A room reservation covering a date range, room count, and payment status.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Booking {
    /// Unique identifier
    pub id: BookingId,
    /// First night of the stay
    #[schema(value_type = String, example = "2024-01-01")]
    pub from_date: NaiveDate,
    /// Checkout date
    #[schema(value_type = String, example = "2024-01-04")]
    pub to_date: NaiveDate,
    /// Guest identity reference; stored opaquely, never format-checked
    pub aadhar_number: String,
    /// Number of rooms reserved
    pub num_of_rooms: u32,
    /// Comma-joined room labels, allocated once at creation
    #[schema(example = "12,87")]
    pub room_numbers: String,
    /// Total price for the stay
    pub room_price: i64,
    /// Identifier of the settling transaction; `None` until paid
    pub transaction_id: Option<TransactionId>,
    /// Date the booking was created
    #[schema(value_type = String, example = "2024-01-01")]
    pub booked_on: NaiveDate,
}

impl Booking {
    /// Whether a payment has been recorded against this booking.
    pub fn is_paid(&self) -> bool {
        self.transaction_id.is_some()
    }
}

/// A booking ready to be persisted; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub aadhar_number: String,
    pub num_of_rooms: u32,
    pub room_numbers: String,
    pub room_price: i64,
    pub booked_on: NaiveDate,
}

impl NewBooking {
    /// Completes the record with a store-assigned id. New bookings are
    /// always unpaid.
    pub fn into_booking(self, id: BookingId) -> Booking {
        Booking {
            id,
            from_date: self.from_date,
            to_date: self.to_date,
            aadhar_number: self.aadhar_number,
            num_of_rooms: self.num_of_rooms,
            room_numbers: self.room_numbers,
            room_price: self.room_price,
            transaction_id: None,
            booked_on: self.booked_on,
        }
    }
}
