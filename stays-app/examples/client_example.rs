//! Drives the booking flow against locally running servers.
//!
//! Start both servers first:
//! ```sh
//! DATABASE_URL=sqlite://payment.db?mode=rwc cargo run --bin payment-server
//! DATABASE_URL=sqlite://booking.db?mode=rwc cargo run --bin booking-server
//! ```

use chrono::NaiveDate;

use stays_client::BookingsClient;
use stays_types::{CreateBookingRequest, ProcessPaymentRequest};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let base_url =
        std::env::var("BOOKING_API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let client = BookingsClient::new(base_url);

    let booking = client
        .create_booking(&CreateBookingRequest {
            from_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            to_date: NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
            aadhar_number: "1234-5678-9012".to_string(),
            num_of_rooms: 2,
        })
        .await?;

    println!(
        "Created booking {} for rooms [{}] at {}",
        booking.id, booking.room_numbers, booking.room_price
    );

    let paid = client
        .process_payment(
            booking.id,
            &ProcessPaymentRequest {
                payment_mode: "UPI".to_string(),
                upi_id: Some("guest@bank".to_string()),
                card_number: None,
            },
        )
        .await?;

    println!(
        "Booking {} settled by transaction {:?}",
        paid.id, paid.transaction_id
    );

    Ok(())
}
