//! Store port traits.
//!
//! These are the primary ports in our hexagonal architecture.
//! Adapters (Postgres, SQLite, InMemory) will implement these traits.

use crate::domain::{Booking, BookingId, NewBooking, Transaction, TransactionId};
use crate::dto::PaymentRequest;
use crate::error::RepoError;

/// Store port for booking records.
///
/// The store is the system of record and assigns ids on insert. Writes are
/// per-row; nothing here spans multiple rows.
#[async_trait::async_trait]
pub trait BookingRepository: Send + Sync + 'static {
    /// Persists a new booking and returns it with its assigned id.
    async fn create_booking(&self, new: NewBooking) -> Result<Booking, RepoError>;

    /// Gets a booking by id.
    async fn get_booking(&self, id: BookingId) -> Result<Option<Booking>, RepoError>;

    /// Records the settling transaction on a booking and returns the
    /// updated row. The only mutation bookings ever see.
    async fn set_transaction_id(
        &self,
        id: BookingId,
        transaction_id: TransactionId,
    ) -> Result<Booking, RepoError>;
}

/// Store port for transaction records.
#[async_trait::async_trait]
pub trait TransactionRepository: Send + Sync + 'static {
    /// Persists a transaction verbatim from the request and returns it with
    /// its assigned id. The referenced booking is not checked for existence.
    async fn create_transaction(&self, req: PaymentRequest) -> Result<Transaction, RepoError>;

    /// Gets a transaction by id.
    async fn get_transaction(&self, id: TransactionId) -> Result<Option<Transaction>, RepoError>;
}
