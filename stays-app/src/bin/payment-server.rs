//! # Payment Server
//!
//! Binary that wires together the payment service:
//! - Load configuration from environment
//! - Initialize the repository adapter
//! - Start the HTTP server

use stays_app::config::PaymentConfig;
use stays_app::telemetry;
use stays_hex::PaymentService;
use stays_hex::payment::inbound::HttpServer;
use stays_repo::build_repo;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    telemetry::init("info,stays_app=debug,stays_hex=debug");

    // Load configuration
    let config = PaymentConfig::from_env()?;

    tracing::info!("Starting payment server on port {}", config.port);
    tracing::info!("Using database: {}", config.database_url);

    // Build repository (handles connection and migration)
    let repo = build_repo(&config.database_url).await?;

    let service = PaymentService::new(repo);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
