//! Payment Application Service
//!
//! Records transactions through the store port. Contains NO infrastructure
//! logic - pure business orchestration.

use stays_types::{
    AppError, PaymentRequest, Transaction, TransactionId, TransactionRepository,
};

/// Application service for payment operations.
///
/// Generic over `R: TransactionRepository` - the adapter is injected at
/// compile time.
pub struct PaymentService<R: TransactionRepository> {
    repo: R,
}

impl<R: TransactionRepository> PaymentService<R> {
    /// Creates a new payment service with the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Records a transaction verbatim from the request and returns its id.
    ///
    /// The payment mode is not re-validated here and the referenced booking
    /// is not checked for existence; a row is created regardless.
    pub async fn process_transaction(
        &self,
        req: PaymentRequest,
    ) -> Result<TransactionId, AppError> {
        let tx = self.repo.create_transaction(req).await?;

        tracing::info!(
            transaction_id = %tx.id,
            booking_id = %tx.booking_id,
            payment_mode = %tx.payment_mode,
            "Transaction recorded"
        );

        Ok(tx.id)
    }

    /// Gets a transaction by ID.
    pub async fn transaction(&self, id: TransactionId) -> Result<Transaction, AppError> {
        self.repo
            .get_transaction(id)
            .await
            .map_err(Into::into)
            .and_then(|opt| opt.ok_or_else(|| AppError::NotFound(format!("Transaction {}", id))))
    }
}
