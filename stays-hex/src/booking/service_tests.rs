//! BookingService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicI64, Ordering};

    use async_trait::async_trait;
    use chrono::NaiveDate;

    use stays_types::{
        AppError, Booking, BookingId, BookingRepository, CreateBookingRequest, GatewayError,
        NewBooking, PaymentGateway, PaymentRequest, ProcessPaymentRequest, RepoError,
        TransactionId,
    };

    use crate::BookingService;
    use crate::booking::service::allocate_room_numbers;

    /// Simple in-memory booking store for testing the service layer.
    pub struct MockRepo {
        bookings: Mutex<HashMap<i64, Booking>>,
        next_id: AtomicI64,
    }

    impl MockRepo {
        pub fn new() -> Self {
            Self {
                bookings: Mutex::new(HashMap::new()),
                next_id: AtomicI64::new(1),
            }
        }
    }

    #[async_trait]
    impl BookingRepository for MockRepo {
        async fn create_booking(&self, new: NewBooking) -> Result<Booking, RepoError> {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let booking = new.into_booking(BookingId::from_i64(id));
            self.bookings.lock().unwrap().insert(id, booking.clone());
            Ok(booking)
        }

        async fn get_booking(&self, id: BookingId) -> Result<Option<Booking>, RepoError> {
            Ok(self.bookings.lock().unwrap().get(&id.as_i64()).cloned())
        }

        async fn set_transaction_id(
            &self,
            id: BookingId,
            transaction_id: TransactionId,
        ) -> Result<Booking, RepoError> {
            let mut bookings = self.bookings.lock().unwrap();
            let booking = bookings.get_mut(&id.as_i64()).ok_or(RepoError::NotFound)?;
            booking.transaction_id = Some(transaction_id);
            Ok(booking.clone())
        }
    }

    /// Gateway stub that records every submitted request.
    pub struct MockGateway {
        pub submitted: Mutex<Vec<PaymentRequest>>,
        pub response: Result<TransactionId, String>,
    }

    impl MockGateway {
        pub fn returning(id: i64) -> Self {
            Self {
                submitted: Mutex::new(Vec::new()),
                response: Ok(TransactionId::from_i64(id)),
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                submitted: Mutex::new(Vec::new()),
                response: Err(message.to_string()),
            }
        }

        pub fn submitted_count(&self) -> usize {
            self.submitted.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl PaymentGateway for MockGateway {
        async fn submit(&self, req: &PaymentRequest) -> Result<TransactionId, GatewayError> {
            self.submitted.lock().unwrap().push(req.clone());
            self.response
                .clone()
                .map_err(GatewayError::Unreachable)
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_request(rooms: u32) -> CreateBookingRequest {
        CreateBookingRequest {
            from_date: date(2024, 1, 1),
            to_date: date(2024, 1, 4),
            aadhar_number: "1234".to_string(),
            num_of_rooms: rooms,
        }
    }

    fn payment_request(mode: &str) -> ProcessPaymentRequest {
        ProcessPaymentRequest {
            payment_mode: mode.to_string(),
            upi_id: Some("guest@bank".to_string()),
            card_number: None,
        }
    }

    #[test]
    fn test_allocation_draws_labels_in_range() {
        for count in [0u32, 1, 2, 50] {
            let labels = allocate_room_numbers(count);
            assert_eq!(labels.len(), count as usize);
            for label in labels {
                let n: u32 = label.parse().unwrap();
                assert!((1..=100).contains(&n), "label {} out of range", n);
            }
        }
    }

    #[tokio::test]
    async fn test_create_booking_prices_the_stay() {
        let service = BookingService::new(MockRepo::new(), MockGateway::returning(1));

        let booking = service.create_booking(create_request(2)).await.unwrap();

        // 1000 * 2 rooms * 3 nights
        assert_eq!(booking.room_price, 6000);
        assert_eq!(booking.room_numbers.split(',').count(), 2);
        assert_eq!(booking.transaction_id, None);
        assert_eq!(booking.id, BookingId::from_i64(1));
    }

    #[tokio::test]
    async fn test_create_booking_zero_rooms() {
        let service = BookingService::new(MockRepo::new(), MockGateway::returning(1));

        let booking = service.create_booking(create_request(0)).await.unwrap();

        assert_eq!(booking.room_price, 0);
        assert_eq!(booking.room_numbers, "");
    }

    #[tokio::test]
    async fn test_create_booking_inverted_range_prices_negative() {
        let service = BookingService::new(MockRepo::new(), MockGateway::returning(1));

        let req = CreateBookingRequest {
            from_date: date(2024, 1, 4),
            to_date: date(2024, 1, 1),
            aadhar_number: "1234".to_string(),
            num_of_rooms: 2,
        };

        let booking = service.create_booking(req).await.unwrap();

        assert_eq!(booking.room_price, -6000);
    }

    #[tokio::test]
    async fn test_process_payment_unknown_booking() {
        let gateway = MockGateway::returning(1);
        let service = BookingService::new(MockRepo::new(), gateway);

        let result = service
            .process_payment(BookingId::from_i64(999), payment_request("UPI"))
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(service.gateway().submitted_count(), 0);
    }

    #[tokio::test]
    async fn test_process_payment_invalid_mode_skips_gateway() {
        let service = BookingService::new(MockRepo::new(), MockGateway::returning(1));
        let booking = service.create_booking(create_request(1)).await.unwrap();

        let result = service
            .process_payment(booking.id, payment_request("CASH"))
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert_eq!(service.gateway().submitted_count(), 0);
    }

    #[tokio::test]
    async fn test_process_payment_mode_is_case_insensitive() {
        let service = BookingService::new(MockRepo::new(), MockGateway::returning(42));
        let booking = service.create_booking(create_request(1)).await.unwrap();

        let updated = service
            .process_payment(booking.id, payment_request("upi"))
            .await
            .unwrap();

        assert_eq!(updated.transaction_id, Some(TransactionId::from_i64(42)));
    }

    #[tokio::test]
    async fn test_process_payment_links_transaction_and_keeps_fields() {
        let service = BookingService::new(MockRepo::new(), MockGateway::returning(7));
        let booking = service.create_booking(create_request(2)).await.unwrap();

        let updated = service
            .process_payment(booking.id, payment_request("CARD"))
            .await
            .unwrap();

        assert_eq!(updated.transaction_id, Some(TransactionId::from_i64(7)));
        assert_eq!(updated.room_price, booking.room_price);
        assert_eq!(updated.room_numbers, booking.room_numbers);
        assert_eq!(updated.aadhar_number, booking.aadhar_number);

        let fetched = service.booking(booking.id).await.unwrap();
        assert_eq!(fetched.transaction_id, Some(TransactionId::from_i64(7)));
    }

    #[tokio::test]
    async fn test_process_payment_forwards_mode_verbatim() {
        let service = BookingService::new(MockRepo::new(), MockGateway::returning(7));
        let booking = service.create_booking(create_request(1)).await.unwrap();

        service
            .process_payment(booking.id, payment_request("card"))
            .await
            .unwrap();

        let submitted = service.gateway().submitted.lock().unwrap();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].payment_mode, "card");
        assert_eq!(submitted[0].booking_id, booking.id);
    }

    #[tokio::test]
    async fn test_gateway_failure_leaves_booking_unpaid() {
        let service = BookingService::new(MockRepo::new(), MockGateway::failing("connection refused"));
        let booking = service.create_booking(create_request(1)).await.unwrap();

        let result = service
            .process_payment(booking.id, payment_request("UPI"))
            .await;

        assert!(matches!(result, Err(AppError::UpstreamPayment(_))));

        let fetched = service.booking(booking.id).await.unwrap();
        assert_eq!(fetched.transaction_id, None);
    }

    #[tokio::test]
    async fn test_get_booking_not_found() {
        let service = BookingService::new(MockRepo::new(), MockGateway::returning(1));

        let result = service.booking(BookingId::from_i64(404)).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
