//! SQLite repository integration tests.

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use stays_types::{
        BookingId, BookingRepository, NewBooking, PaymentRequest, RepoError, TransactionId,
        TransactionRepository,
    };

    use crate::SqliteRepo;

    async fn setup_repo() -> SqliteRepo {
        SqliteRepo::new("sqlite::memory:").await.unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_booking() -> NewBooking {
        NewBooking {
            from_date: date(2024, 1, 1),
            to_date: date(2024, 1, 4),
            aadhar_number: "1234".to_string(),
            num_of_rooms: 2,
            room_numbers: "12,87".to_string(),
            room_price: 6000,
            booked_on: date(2024, 1, 1),
        }
    }

    fn payment_request(booking_id: i64) -> PaymentRequest {
        PaymentRequest {
            payment_mode: "UPI".to_string(),
            booking_id: BookingId::from_i64(booking_id),
            upi_id: Some("guest@bank".to_string()),
            card_number: None,
        }
    }

    #[tokio::test]
    async fn test_create_booking_assigns_sequential_ids() {
        let repo = setup_repo().await;

        let first = repo.create_booking(new_booking()).await.unwrap();
        let second = repo.create_booking(new_booking()).await.unwrap();

        assert_eq!(first.id, BookingId::from_i64(1));
        assert_eq!(second.id, BookingId::from_i64(2));
        assert_eq!(first.transaction_id, None);
    }

    #[tokio::test]
    async fn test_get_booking_roundtrip() {
        let repo = setup_repo().await;

        let created = repo.create_booking(new_booking()).await.unwrap();
        let fetched = repo.get_booking(created.id).await.unwrap().unwrap();

        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.from_date, date(2024, 1, 1));
        assert_eq!(fetched.to_date, date(2024, 1, 4));
        assert_eq!(fetched.aadhar_number, "1234");
        assert_eq!(fetched.num_of_rooms, 2);
        assert_eq!(fetched.room_numbers, "12,87");
        assert_eq!(fetched.room_price, 6000);
        assert_eq!(fetched.transaction_id, None);
        assert_eq!(fetched.booked_on, date(2024, 1, 1));
    }

    #[tokio::test]
    async fn test_get_booking_not_found() {
        let repo = setup_repo().await;

        let result = repo.get_booking(BookingId::from_i64(999)).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_negative_price_roundtrips() {
        let repo = setup_repo().await;

        let mut booking = new_booking();
        booking.from_date = date(2024, 1, 4);
        booking.to_date = date(2024, 1, 1);
        booking.room_price = -6000;

        let created = repo.create_booking(booking).await.unwrap();
        let fetched = repo.get_booking(created.id).await.unwrap().unwrap();

        assert_eq!(fetched.room_price, -6000);
    }

    #[tokio::test]
    async fn test_set_transaction_id_updates_row() {
        let repo = setup_repo().await;

        let created = repo.create_booking(new_booking()).await.unwrap();
        let updated = repo
            .set_transaction_id(created.id, TransactionId::from_i64(7))
            .await
            .unwrap();

        assert_eq!(updated.transaction_id, Some(TransactionId::from_i64(7)));
        assert_eq!(updated.room_price, created.room_price);

        let fetched = repo.get_booking(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.transaction_id, Some(TransactionId::from_i64(7)));
    }

    #[tokio::test]
    async fn test_set_transaction_id_unknown_booking() {
        let repo = setup_repo().await;

        let result = repo
            .set_transaction_id(BookingId::from_i64(999), TransactionId::from_i64(7))
            .await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_create_transaction_assigns_ids_and_stores_verbatim() {
        let repo = setup_repo().await;

        // The store does not care whether the booking exists.
        let tx = repo.create_transaction(payment_request(999)).await.unwrap();

        assert_eq!(tx.id, TransactionId::from_i64(1));

        let fetched = repo.get_transaction(tx.id).await.unwrap().unwrap();
        assert_eq!(fetched.payment_mode, "UPI");
        assert_eq!(fetched.booking_id, BookingId::from_i64(999));
        assert_eq!(fetched.upi_id.as_deref(), Some("guest@bank"));
        assert_eq!(fetched.card_number, None);
    }

    #[tokio::test]
    async fn test_get_transaction_not_found() {
        let repo = setup_repo().await;

        let result = repo
            .get_transaction(TransactionId::from_i64(999))
            .await
            .unwrap();

        assert!(result.is_none());
    }
}
