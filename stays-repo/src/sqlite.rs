//! SQLite repository adapter.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

use stays_types::{
    Booking, BookingId, BookingRepository, NewBooking, PaymentRequest, RepoError, Transaction,
    TransactionId, TransactionRepository,
};

use crate::types::{DbBooking, DbTransaction};

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite repository implementation.
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // An in-memory database exists per connection; a pool of one keeps
        // every query on the same database.
        let pool = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .connect_with(options)
                .await?
        } else {
            SqlitePool::connect_with(options).await?
        };

        tracing::debug!("Running SQLite migrations");
        let ddl = include_str!("../migrations/sqlite/0001_create_bookings.sql");
        sqlx::query(ddl).execute(&pool).await?;

        let ddl_transactions = include_str!("../migrations/sqlite/0002_create_transactions.sql");
        sqlx::query(ddl_transactions).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementations
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl BookingRepository for SqliteRepo {
    async fn create_booking(&self, new: NewBooking) -> Result<Booking, RepoError> {
        let result = sqlx::query(
            r#"INSERT INTO bookings
               (from_date, to_date, aadhar_number, num_of_rooms, room_numbers, room_price, transaction_id, booked_on)
               VALUES (?, ?, ?, ?, ?, ?, NULL, ?)"#,
        )
        .bind(new.from_date.to_string())
        .bind(new.to_date.to_string())
        .bind(&new.aadhar_number)
        .bind(new.num_of_rooms as i64)
        .bind(&new.room_numbers)
        .bind(new.room_price)
        .bind(new.booked_on.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        let id = BookingId::from_i64(result.last_insert_rowid());
        Ok(new.into_booking(id))
    }

    async fn get_booking(&self, id: BookingId) -> Result<Option<Booking>, RepoError> {
        let row: Option<DbBooking> = sqlx::query_as(
            r#"SELECT id, from_date, to_date, aadhar_number, num_of_rooms, room_numbers, room_price, transaction_id, booked_on
               FROM bookings WHERE id = ?"#,
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
        let result = sqlx::query(r#"UPDATE bookings SET transaction_id = ? WHERE id = ?"#)
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
impl TransactionRepository for SqliteRepo {
    async fn create_transaction(&self, req: PaymentRequest) -> Result<Transaction, RepoError> {
        let result = sqlx::query(
            r#"INSERT INTO transactions (payment_mode, booking_id, upi_id, card_number)
               VALUES (?, ?, ?, ?)"#,
        )
        .bind(&req.payment_mode)
        .bind(req.booking_id.as_i64())
        .bind(req.upi_id.as_deref())
        .bind(req.card_number.as_deref())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        let id = TransactionId::from_i64(result.last_insert_rowid());
        Ok(Transaction::from_request(id, req))
    }

    async fn get_transaction(&self, id: TransactionId) -> Result<Option<Transaction>, RepoError> {
        let row: Option<DbTransaction> = sqlx::query_as(
            r#"SELECT id, payment_mode, booking_id, upi_id, card_number
               FROM transactions WHERE id = ?"#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(row.map(DbTransaction::into_domain))
    }
}
