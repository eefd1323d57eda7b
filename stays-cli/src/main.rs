//! Stays CLI
//!
//! Command-line interface for the Booking and Payment APIs.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use stays_client::{BookingsClient, PaymentsClient};
use stays_types::{BookingId, CreateBookingRequest, ProcessPaymentRequest, TransactionId};

#[derive(Parser)]
#[command(name = "stays")]
#[command(author, version, about = "Booking API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Booking API
    #[arg(
        long,
        env = "BOOKING_API_URL",
        default_value = "http://localhost:8080"
    )]
    booking_url: String,

    /// Base URL of the Payment API
    #[arg(
        long,
        env = "PAYMENT_API_URL",
        default_value = "http://localhost:8081"
    )]
    payment_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Booking operations
    Booking {
        #[command(subcommand)]
        action: BookingCommands,
    },
    /// Transaction operations
    Transaction {
        #[command(subcommand)]
        action: TransactionCommands,
    },
    /// Check API health
    Health,
}

#[derive(Subcommand)]
enum BookingCommands {
    /// Create a new booking
    Create {
        /// First night of the stay (YYYY-MM-DD)
        #[arg(long)]
        from: NaiveDate,
        /// Checkout date (YYYY-MM-DD)
        #[arg(long)]
        to: NaiveDate,
        /// Guest aadhar number
        #[arg(long)]
        aadhar: String,
        /// Number of rooms
        #[arg(long, default_value = "1")]
        rooms: u32,
    },
    /// Get booking details
    Get {
        /// Booking ID
        id: BookingId,
    },
    /// Settle a booking
    Pay {
        /// Booking ID
        id: BookingId,
        /// Payment mode (UPI or CARD)
        #[arg(long)]
        mode: String,
        /// UPI handle, when paying by UPI
        #[arg(long)]
        upi_id: Option<String>,
        /// Card number, when paying by card
        #[arg(long)]
        card_number: Option<String>,
    },
}

#[derive(Subcommand)]
enum TransactionCommands {
    /// Get transaction details
    Get {
        /// Transaction ID
        id: TransactionId,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let bookings = BookingsClient::new(&cli.booking_url);
    let payments = PaymentsClient::new(&cli.payment_url);

    match cli.command {
        Commands::Booking { action } => match action {
            BookingCommands::Create {
                from,
                to,
                aadhar,
                rooms,
            } => {
                let booking = bookings
                    .create_booking(&CreateBookingRequest {
                        from_date: from,
                        to_date: to,
                        aadhar_number: aadhar,
                        num_of_rooms: rooms,
                    })
                    .await?;
                println!("{}", serde_json::to_string_pretty(&booking)?);
            }
            BookingCommands::Get { id } => {
                let booking = bookings.get_booking(id).await?;
                println!("{}", serde_json::to_string_pretty(&booking)?);
            }
            BookingCommands::Pay {
                id,
                mode,
                upi_id,
                card_number,
            } => {
                let booking = bookings
                    .process_payment(
                        id,
                        &ProcessPaymentRequest {
                            payment_mode: mode,
                            upi_id,
                            card_number,
                        },
                    )
                    .await?;
                println!("{}", serde_json::to_string_pretty(&booking)?);
            }
        },
        Commands::Transaction { action } => match action {
            TransactionCommands::Get { id } => {
                let tx = payments.get_transaction(id).await?;
                println!("{}", serde_json::to_string_pretty(&tx)?);
            }
        },
        Commands::Health => {
            let booking_ok = bookings.health().await.unwrap_or(false);
            let payment_ok = payments.health().await.unwrap_or(false);
            println!("booking-service: {}", if booking_ok { "healthy" } else { "unreachable" });
            println!("payment-service: {}", if payment_ok { "healthy" } else { "unreachable" });
        }
    }

    Ok(())
}
