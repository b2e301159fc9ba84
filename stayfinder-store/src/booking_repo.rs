use async_trait::async_trait;
use chrono::{Datelike, Utc};
use tokio::sync::RwLock;

use stayfinder_booking::policy;
use stayfinder_core::repository::BookingRepository;
use stayfinder_core::{
    Booking, BookingStatus, CoreResult, NewBooking, PaymentStatus, ServiceError,
};

use crate::simulation::Simulation;

/// Mock booking collaborator. Mutations are last-write-wins over the shared
/// vector; there is exactly one implicit caller at a time, so no further
/// coordination is layered on.
pub struct InMemoryBookingRepo {
    bookings: RwLock<Vec<Booking>>,
    simulation: Simulation,
}

impl InMemoryBookingRepo {
    pub fn new(bookings: Vec<Booking>, simulation: Simulation) -> Self {
        Self {
            bookings: RwLock::new(bookings),
            simulation,
        }
    }

    fn next_id(bookings: &[Booking]) -> i64 {
        bookings.iter().map(|b| b.id).max().unwrap_or(0) + 1
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepo {
    async fn list(&self) -> CoreResult<Vec<Booking>> {
        self.simulation.read("bookings.list").await?;
        Ok(self.bookings.read().await.clone())
    }

    async fn list_by_user(&self, user_id: &str) -> CoreResult<Vec<Booking>> {
        self.simulation.read("bookings.list_by_user").await?;
        Ok(self
            .bookings
            .read()
            .await
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get(&self, id: i64) -> CoreResult<Booking> {
        self.simulation.read("bookings.get").await?;
        self.bookings
            .read()
            .await
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("Booking", id))
    }

    async fn get_by_reference(&self, reference: &str) -> CoreResult<Booking> {
        self.simulation.read("bookings.get_by_reference").await?;
        self.bookings
            .read()
            .await
            .iter()
            .find(|b| b.booking_reference == reference)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("Booking {reference}")))
    }

    async fn create(&self, draft: NewBooking) -> CoreResult<Booking> {
        self.simulation.write("bookings.create").await?;

        if draft.check_out_date <= draft.check_in_date {
            return Err(ServiceError::Validation(
                "Check-out must be after check-in".into(),
            ));
        }

        let now = Utc::now();
        let mut bookings = self.bookings.write().await;
        let id = Self::next_id(&bookings);
        let booking = Booking {
            id,
            user_id: draft.user_id,
            hotel_id: draft.hotel_id,
            room_id: draft.room_id,
            check_in_date: draft.check_in_date,
            check_out_date: draft.check_out_date,
            guest_count: draft.guest_count,
            guest_details: draft.guest_details,
            special_requests: draft.special_requests,
            total_price: draft.total_price,
            status: BookingStatus::Confirmed,
            payment_status: PaymentStatus::Paid,
            booking_reference: format!("SF{id:03}-{}", now.year()),
            cancellation_reason: None,
            created_at: now,
            modified_at: now,
        };
        bookings.push(booking.clone());

        tracing::info!(
            booking_id = id,
            reference = %booking.booking_reference,
            "booking created"
        );
        Ok(booking)
    }

    async fn cancel(&self, id: i64, reason: &str) -> CoreResult<Booking> {
        self.simulation.write("bookings.cancel").await?;

        let now = Utc::now();
        let mut bookings = self.bookings.write().await;
        let booking = bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| ServiceError::not_found("Booking", id))?;

        policy::ensure_cancellable(booking, now)?;

        booking.status = BookingStatus::Cancelled;
        booking.payment_status = PaymentStatus::Refunded;
        booking.cancellation_reason = Some(reason.to_string());
        booking.modified_at = now;

        tracing::info!(booking_id = id, %reason, "booking cancelled");
        Ok(booking.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Fixtures;
    use chrono::{Duration, NaiveDate};
    use stayfinder_core::{GuestCount, GuestDetails, PrimaryGuest};

    fn repo() -> InMemoryBookingRepo {
        InMemoryBookingRepo::new(Fixtures::load().unwrap().bookings, Simulation::instant())
    }

    fn draft(check_in: NaiveDate, check_out: NaiveDate) -> NewBooking {
        NewBooking {
            user_id: "user1".into(),
            hotel_id: 1,
            room_id: 1,
            check_in_date: check_in,
            check_out_date: check_out,
            guest_count: GuestCount::default(),
            guest_details: GuestDetails {
                primary_guest: PrimaryGuest {
                    name: "Ada Lovelace".into(),
                    email: "ada@example.com".into(),
                    phone: "+1 305 555 0100".into(),
                },
            },
            special_requests: String::new(),
            total_price: 361.0,
        }
    }

    fn future_stay(days_out: i64, nights: i64) -> (NaiveDate, NaiveDate) {
        let check_in = (Utc::now() + Duration::days(days_out)).date_naive();
        (check_in, check_in + Duration::days(nights))
    }

    #[tokio::test]
    async fn create_assigns_reference_and_confirms() {
        let repo = repo();
        let (check_in, check_out) = future_stay(30, 3);
        let booking = repo.create(draft(check_in, check_out)).await.unwrap();

        assert_eq!(booking.id, 4, "next id after the fixtures");
        assert_eq!(
            booking.booking_reference,
            format!("SF004-{}", Utc::now().year())
        );
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.payment_status, PaymentStatus::Paid);
        assert_eq!(booking.total_price, 361.0);

        let fetched = repo.get(booking.id).await.unwrap();
        assert_eq!(fetched.booking_reference, booking.booking_reference);
    }

    #[tokio::test]
    async fn create_rejects_inverted_stay() {
        let repo = repo();
        let (check_in, _) = future_stay(30, 3);
        let err = repo.create(draft(check_in, check_in)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn cancel_refunds_and_records_reason() {
        let repo = repo();
        let (check_in, check_out) = future_stay(30, 2);
        let booking = repo.create(draft(check_in, check_out)).await.unwrap();

        let cancelled = repo.cancel(booking.id, "Change of plans").await.unwrap();
        assert_eq!(cancelled.status, BookingStatus::Cancelled);
        assert_eq!(cancelled.payment_status, PaymentStatus::Refunded);
        assert_eq!(cancelled.cancellation_reason.as_deref(), Some("Change of plans"));
    }

    #[tokio::test]
    async fn cancel_within_the_window_is_rejected() {
        let repo = repo();
        // Check-in tomorrow morning: inside the 24h window relative to the
        // 15:00 check-in instant whenever it is past 15:00 minus one day.
        let (check_in, check_out) = future_stay(0, 2);
        let booking = repo.create(draft(check_in, check_out)).await.unwrap();
        let err = repo.cancel(booking.id, "too late").await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn double_cancel_is_rejected_not_a_crash() {
        let repo = repo();
        let (check_in, check_out) = future_stay(30, 2);
        let booking = repo.create(draft(check_in, check_out)).await.unwrap();

        repo.cancel(booking.id, "first").await.unwrap();
        let err = repo.cancel(booking.id, "second").await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        // The first cancellation's reason stands.
        let fetched = repo.get(booking.id).await.unwrap();
        assert_eq!(fetched.cancellation_reason.as_deref(), Some("first"));
    }

    #[tokio::test]
    async fn lookup_by_reference() {
        let repo = repo();
        let booking = repo.get_by_reference("SF001-2026").await.unwrap();
        assert_eq!(booking.id, 1);
        assert!(repo.get_by_reference("SF999-2020").await.is_err());
    }
}
