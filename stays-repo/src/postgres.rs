//! PostgreSQL repository adapter.

use async_trait::async_trait;
use sqlx::PgPool;

use stays_types::{
    Booking, BookingId, BookingRepository, NewBooking, PaymentRequest, RepoError, Transaction,
    TransactionId, TransactionRepository,
};

use crate::types::{DbBooking, DbTransaction};

// ─────────────────────────────────────────────────────────────────────────────
// PostgreSQL Repository
// ─────────────────────────────────────────────────────────────────────────────

/// PostgreSQL repository implementation.
pub struct PostgresRepo {
    pool: PgPool,
}

impl PostgresRepo {
    /// Creates a new PostgreSQL repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPool::connect(database_url).await?;

        tracing::debug!("Running PostgreSQL migrations");
        let ddl = include_str!("../migrations/postgres/0001_create_bookings.sql");
        sqlx::query(ddl).execute(&pool).await?;

        let ddl_transactions = include_str!("../migrations/postgres/0002_create_transactions.sql");
        sqlx::query(ddl_transactions).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementations
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl BookingRepository for PostgresRepo {
    async fn create_booking(&self, new: NewBooking) -> Result<Booking, RepoError> {
        let id: i64 = sqlx::query_scalar(
            r#"INSERT INTO bookings
               (from_date, to_date, aadhar_number, num_of_rooms, room_numbers, room_price, transaction_id, booked_on)
               VALUES ($1, $2, $3, $4, $5, $6, NULL, $7)
               RETURNING id"#,
        )
        .bind(new.from_date)
        .bind(new.to_date)
        .bind(&new.aadhar_number)
        .bind(new.num_of_rooms as i32)
        .bind(&new.room_numbers)
        .bind(new.room_price)
        .bind(new.booked_on)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(new.into_booking(BookingId::from_i64(id)))
    }

    async fn get_booking(&self, id: BookingId) -> Result<Option<Booking>, RepoError> {
        let row: Option<DbBooking> = sqlx::query_as(
            r#"SELECT id, from_date, to_date, aadhar_number, num_of_rooms, room_numbers, room_price, transaction_id, booked_on
               FROM bookings WHERE id = $1"#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(DbBooking::into_domain).transpose()
    }

    async fn set_transaction_id(
        &self,
        id: BookingId,
        transaction_id: TransactionId,
    ) -> Result<Booking, RepoError> {
        let result = sqlx::query(r#"UPDATE bookings SET transaction_id = $1 WHERE id = $2"#)
            .bind(transaction_id.as_i64())
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }

        self.get_booking(id).await?.ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl TransactionRepository for PostgresRepo {
    async fn create_transaction(&self, req: PaymentRequest) -> Result<Transaction, RepoError> {
        let id: i64 = sqlx::query_scalar(
            r#"INSERT INTO transactions (payment_mode, booking_id, upi_id, card_number)
               VALUES ($1, $2, $3, $4)
               RETURNING id"#,
        )
        .bind(&req.payment_mode)
        .bind(req.booking_id.as_i64())
        .bind(req.upi_id.as_deref())
        .bind(req.card_number.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(Transaction::from_request(TransactionId::from_i64(id), req))
    }

    async fn get_transaction(&self, id: TransactionId) -> Result<Option<Transaction>, RepoError> {
        let row: Option<DbTransaction> = sqlx::query_as(
            r#"SELECT id, payment_mode, booking_id, upi_id, card_number
               FROM transactions WHERE id = $1"#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(row.map(DbTransaction::into_domain))
    }
}
