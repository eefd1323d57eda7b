//! Transaction domain model and payment modes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::booking::BookingId;
use crate::dto::PaymentRequest;
use crate::error::DomainError;

/// Unique identifier for a Transaction.
///
/// Assigned by the transaction store on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct TransactionId(i64);

impl TransactionId {
    /// Wraps an existing database key.
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// Returns the underlying integer key.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TransactionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Payment modes accepted by the booking orchestrator.
///
/// Only the orchestrator validates against this enum; the payment processor
/// stores whatever string it was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMode {
    Upi,
    Card,
}

impl std::fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMode::Upi => write!(f, "UPI"),
            PaymentMode::Card => write!(f, "CARD"),
        }
    }
}

impl std::str::FromStr for PaymentMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("UPI") {
            Ok(PaymentMode::Upi)
        } else if s.eq_ignore_ascii_case("CARD") {
            Ok(PaymentMode::Card)
        } else {
            Err(DomainError::InvalidPaymentMode(s.to_string()))
        }
    }
}

/// A recorded payment attempt, referencing a booking.
///
/// Transactions are immutable once created - they represent a historical
/// record of what happened. The `payment_mode` is kept verbatim from the
/// request and the `booking_id` is never checked for existence here.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,
    /// Mode string exactly as received
    #[schema(example = "UPI")]
    pub payment_mode: String,
    /// The booking this payment settles
    pub booking_id: BookingId,
    /// UPI handle, when paying by UPI
    pub upi_id: Option<String>,
    /// Card number, when paying by card
    pub card_number: Option<String>,
}

impl Transaction {
    /// Builds the record from a wire request and a store-assigned id.
    pub fn from_request(id: TransactionId, req: PaymentRequest) -> Self {
        Self {
            id,
            payment_mode: req.payment_mode,
            booking_id: req.booking_id,
            upi_id: req.upi_id,
            card_number: req.card_number,
        }
    }
}
