//! Booking Application Service
//!
//! Orchestrates booking creation and payment completion through the store
//! and gateway ports. Contains NO infrastructure logic - pure business
//! orchestration.

use rand::Rng;

use room_tariff::RatePlan;
use stays_types::{
    AppError, Booking, BookingId, BookingRepository, CreateBookingRequest, DomainError,
    NewBooking, PaymentGateway, PaymentMode, PaymentRequest, ProcessPaymentRequest,
};

/// Draws `count` room labels, each a uniform random integer in [1, 100].
///
/// Draws are independent: the same label can come up twice within one
/// booking, and nothing is checked against rooms already allocated to other
/// bookings.
pub fn allocate_room_numbers(count: u32) -> Vec<String> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| rng.random_range(1..=100u32).to_string())
        .collect()
}

/// Application service for booking operations.
///
/// Generic over `R: BookingRepository` and `G: PaymentGateway` - the
/// adapters are injected at compile time. This enables:
/// - Swapping the store without code changes
/// - Reaching the payment processor through any transport
/// - Testing with in-memory ports
pub struct BookingService<R: BookingRepository, G: PaymentGateway> {
    repo: R,
    gateway: G,
    rate_plan: RatePlan,
}

impl<R: BookingRepository, G: PaymentGateway> BookingService<R, G> {
    /// Creates a booking service with the default tariff.
    pub fn new(repo: R, gateway: G) -> Self {
        Self::with_rate_plan(repo, gateway, RatePlan::default())
    }

    /// Creates a booking service with a custom tariff.
    pub fn with_rate_plan(repo: R, gateway: G, rate_plan: RatePlan) -> Self {
        Self {
            repo,
            gateway,
            rate_plan,
        }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Returns a reference to the payment gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Creates a booking: allocates rooms, prices the stay, stamps the
    /// creation date, and persists.
    ///
    /// The date range is not validated; an inverted range prices negative.
    pub async fn create_booking(&self, req: CreateBookingRequest) -> Result<Booking, AppError> {
        let room_numbers = allocate_room_numbers(req.num_of_rooms);
        let quote = self
            .rate_plan
            .quote(req.num_of_rooms, req.from_date, req.to_date);

        let new = NewBooking {
            from_date: req.from_date,
            to_date: req.to_date,
            aadhar_number: req.aadhar_number,
            num_of_rooms: req.num_of_rooms,
            room_numbers: room_numbers.join(","),
            room_price: quote.total,
            booked_on: chrono::Utc::now().date_naive(),
        };

        self.repo.create_booking(new).await.map_err(Into::into)
    }

    /// Drives payment completion: lookup, mode validation, gateway call,
    /// then records the transaction id on the booking.
    ///
    /// A gateway failure propagates and leaves the booking unpaid; there is
    /// no compensation for a transaction recorded remotely but not linked
    /// here.
    pub async fn process_payment(
        &self,
        booking_id: BookingId,
        req: ProcessPaymentRequest,
    ) -> Result<Booking, AppError> {
        let booking = self
            .repo
            .get_booking(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {}", booking_id)))?;

        // The enum only gates the request; the wire request keeps the
        // caller's original string.
        let _mode: PaymentMode = req
            .payment_mode
            .parse()
            .map_err(|e: DomainError| AppError::BadRequest(e.to_string()))?;

        let payment = PaymentRequest::for_booking(booking.id, req);
        let transaction_id = self.gateway.submit(&payment).await?;

        let updated = self
            .repo
            .set_transaction_id(booking.id, transaction_id)
            .await?;

        tracing::info!(
            booking_id = %updated.id,
            aadhar_number = %updated.aadhar_number,
            transaction_id = %transaction_id,
            rooms = %updated.room_numbers,
            "Booking confirmed"
        );

        Ok(updated)
    }

    /// Gets a booking by id.
    pub async fn booking(&self, id: BookingId) -> Result<Booking, AppError> {
        self.repo
            .get_booking(id)
            .await
            .map_err(Into::into)
            .and_then(|opt| opt.ok_or_else(|| AppError::NotFound(format!("Booking {}", id))))
    }
}
