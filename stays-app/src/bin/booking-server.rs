//! # Booking Server
//!
//! Binary that wires together the booking service:
//! - Load configuration from environment
//! - Initialize the repository adapter
//! - Point the payment gateway at the payment service
//! - Start the HTTP server

use stays_app::config::BookingConfig;
use stays_app::telemetry;
use stays_client::PaymentsClient;
use stays_hex::BookingService;
use stays_hex::booking::inbound::HttpServer;
use stays_repo::build_repo;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    telemetry::init("info,stays_app=debug,stays_hex=debug");

    // Load configuration
    let config = BookingConfig::from_env()?;

    tracing::info!("Starting booking server on port {}", config.port);
    tracing::info!("Using database: {}", config.database_url);
    tracing::info!("Payment service at: {}", config.payment_service_url);

    // Build repository (handles connection and migration)
    let repo = build_repo(&config.database_url).await?;

    // The payment client is the gateway adapter for the cross-service call
    let gateway = PaymentsClient::new(config.payment_service_url);

    let service = BookingService::new(repo, gateway);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
