//! Shared database types with feature-gated fields for SQLite and PostgreSQL.

use sqlx::FromRow;

use stays_types::{Booking, BookingId, RepoError, Transaction, TransactionId};

// ─────────────────────────────────────────────────────────────────────────────
// Feature-gated imports
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(not(feature = "sqlite"))]
use chrono::NaiveDate;

// ─────────────────────────────────────────────────────────────────────────────
// Database row structs (derive FromRow for automatic mapping)
// ─────────────────────────────────────────────────────────────────────────────

/// Booking row from database.
///
/// SQLite stores dates as ISO-8601 TEXT; Postgres uses native DATE columns.
#[derive(FromRow)]
pub struct DbBooking {
    pub id: i64,

    #[cfg(not(feature = "sqlite"))]
    pub from_date: NaiveDate,
    #[cfg(feature = "sqlite")]
    pub from_date: String,

    #[cfg(not(feature = "sqlite"))]
    pub to_date: NaiveDate,
    #[cfg(feature = "sqlite")]
    pub to_date: String,

    pub aadhar_number: String,
    pub num_of_rooms: i32,
    pub room_numbers: String,
    pub room_price: i64,
    pub transaction_id: Option<i64>,

    #[cfg(not(feature = "sqlite"))]
    pub booked_on: NaiveDate,
    #[cfg(feature = "sqlite")]
    pub booked_on: String,
}

/// Transaction row from database.
#[derive(FromRow)]
pub struct DbTransaction {
    pub id: i64,
    pub payment_mode: String,
    pub booking_id: i64,
    pub upi_id: Option<String>,
    pub card_number: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Parsing helpers
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "sqlite")]
fn parse_date(s: &str) -> Result<chrono::NaiveDate, RepoError> {
    s.parse()
        .map_err(|e: chrono::ParseError| RepoError::Database(e.to_string()))
}

// ─────────────────────────────────────────────────────────────────────────────
// Domain conversion (feature-gated implementations)
// ─────────────────────────────────────────────────────────────────────────────

impl DbBooking {
    /// Convert database row to domain Booking.
    pub fn into_domain(self) -> Result<Booking, RepoError> {
        let num_of_rooms = u32::try_from(self.num_of_rooms)
            .map_err(|e| RepoError::Database(e.to_string()))?;

        #[cfg(not(feature = "sqlite"))]
        let (from_date, to_date, booked_on) = (self.from_date, self.to_date, self.booked_on);

        #[cfg(feature = "sqlite")]
        let (from_date, to_date, booked_on) = (
            parse_date(&self.from_date)?,
            parse_date(&self.to_date)?,
            parse_date(&self.booked_on)?,
        );

        Ok(Booking {
            id: BookingId::from_i64(self.id),
            from_date,
            to_date,
            aadhar_number: self.aadhar_number,
            num_of_rooms,
            room_numbers: self.room_numbers,
            room_price: self.room_price,
            transaction_id: self.transaction_id.map(TransactionId::from_i64),
            booked_on,
        })
    }
}

impl DbTransaction {
    /// Convert database row to domain Transaction.
    pub fn into_domain(self) -> Transaction {
        Transaction {
            id: TransactionId::from_i64(self.id),
            payment_mode: self.payment_mode,
            booking_id: BookingId::from_i64(self.booking_id),
            upi_id: self.upi_id,
            card_number: self.card_number,
        }
    }
}
