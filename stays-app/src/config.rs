//! Configuration loading from environment.

use std::env;

/// Booking server configuration.
pub struct BookingConfig {
    pub port: u16,
    pub database_url: String,
    pub payment_service_url: String,
}

impl BookingConfig {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()?;

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let payment_service_url = env::var("PAYMENT_SERVICE_URL")
            .unwrap_or_else(|_| "http://localhost:8081".to_string());

        Ok(Self {
            port,
            database_url,
            payment_service_url,
        })
    }
}

/// Payment server configuration.
pub struct PaymentConfig {
    pub port: u16,
    pub database_url: String,
}

impl PaymentConfig {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8081".to_string())
            .parse()?;

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        Ok(Self { port, database_url })
    }
}
