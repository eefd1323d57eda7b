//! # Stays Client SDK
//!
//! Typed Rust clients for the Booking and Payment APIs.
//!
//! [`PaymentsClient`] also implements the [`PaymentGateway`] port, so the
//! booking server uses it as its outbound adapter for the cross-service
//! payment call.

use reqwest::Client;
use serde::de::DeserializeOwned;

use stays_types::{
    Booking, BookingId, CreateBookingRequest, GatewayError, PaymentGateway, PaymentRequest,
    ProcessPaymentRequest, Transaction, TransactionId,
};

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ─────────────────────────────────────────────────────────────────────────────
// Booking API client
// ─────────────────────────────────────────────────────────────────────────────

/// Booking API client.
pub struct BookingsClient {
    base_url: String,
    http: Client,
}

impl BookingsClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Creates a new booking.
    pub async fn create_booking(
        &self,
        req: &CreateBookingRequest,
    ) -> Result<Booking, ClientError> {
        post(&self.http, &self.base_url, "/booking", req).await
    }

    /// Settles a booking through the payment service.
    pub async fn process_payment(
        &self,
        id: BookingId,
        req: &ProcessPaymentRequest,
    ) -> Result<Booking, ClientError> {
        post(
            &self.http,
            &self.base_url,
            &format!("/booking/{}/transaction", id),
            req,
        )
        .await
    }

    /// Gets a booking by ID.
    pub async fn get_booking(&self, id: BookingId) -> Result<Booking, ClientError> {
        get(&self.http, &self.base_url, &format!("/booking/{}", id)).await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Payment API client
// ─────────────────────────────────────────────────────────────────────────────

/// Payment API client.
pub struct PaymentsClient {
    base_url: String,
    http: Client,
}

impl PaymentsClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Records a transaction; the response body is the bare transaction id.
    pub async fn create_transaction(
        &self,
        req: &PaymentRequest,
    ) -> Result<TransactionId, ClientError> {
        post(&self.http, &self.base_url, "/transaction", req).await
    }

    /// Gets a transaction by ID.
    pub async fn get_transaction(&self, id: TransactionId) -> Result<Transaction, ClientError> {
        get(&self.http, &self.base_url, &format!("/transaction/{}", id)).await
    }
}

/// The booking orchestrator reaches the payment service through this impl.
#[async_trait::async_trait]
impl PaymentGateway for PaymentsClient {
    async fn submit(&self, req: &PaymentRequest) -> Result<TransactionId, GatewayError> {
        self.create_transaction(req).await.map_err(|e| match e {
            ClientError::Api { status, message } => GatewayError::Rejected { status, message },
            other => GatewayError::Unreachable(other.to_string()),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Request helpers
// ─────────────────────────────────────────────────────────────────────────────

async fn get<T: DeserializeOwned>(
    http: &Client,
    base_url: &str,
    path: &str,
) -> Result<T, ClientError> {
    let resp = http.get(format!("{}{}", base_url, path)).send().await?;
    handle_response(resp).await
}

async fn post<T: DeserializeOwned, B: serde::Serialize>(
    http: &Client,
    base_url: &str,
    path: &str,
    body: &B,
) -> Result<T, ClientError> {
    let resp = http
        .post(format!("{}{}", base_url, path))
        .json(body)
        .send()
        .await?;
    handle_response(resp).await
}

async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let status = resp.status();
    if status.is_success() {
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    } else {
        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or(body);
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
