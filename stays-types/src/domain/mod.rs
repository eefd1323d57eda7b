//! Domain models for the booking and payment services.

pub mod booking;
pub mod transaction;

pub use booking::{Booking, BookingId, NewBooking};
pub use transaction::{PaymentMode, Transaction, TransactionId};
