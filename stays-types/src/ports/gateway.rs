//! Payment gateway port.
//!
//! This trait is the domain-level interface for the cross-service call from
//! the booking orchestrator to the payment processor. Implementations can be
//! HTTP clients, in-process stubs, etc.

use crate::domain::TransactionId;
use crate::dto::PaymentRequest;
use crate::error::GatewayError;

/// Port trait for submitting payments to the payment processor.
///
/// The call is synchronous from the caller's point of view: it blocks until
/// the processor answers or fails. No retries happen at this layer.
#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
    /// Submits a payment request and returns the recorded transaction id.
    async fn submit(&self, req: &PaymentRequest) -> Result<TransactionId, GatewayError>;
}
