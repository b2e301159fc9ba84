use std::sync::Arc;

use stayfinder_booking::{quote, BookingFlow, BookingStep, FlowError, PriceBreakdown, PricingConfig};
use stayfinder_core::repository::{BookingRepository, HotelRepository, RoomRepository};
use stayfinder_core::{Booking, Hotel, Room, ServiceError};

use crate::view::ViewState;

/// Controller for the booking wizard page. Owns the flow state machine,
/// the hotel/room context it is booking against, and the single-flight
/// submission guard.
pub struct BookingFlowPage {
    hotels: Arc<dyn HotelRepository>,
    rooms: Arc<dyn RoomRepository>,
    bookings: Arc<dyn BookingRepository>,
    pricing: PricingConfig,
    flow: BookingFlow,
    context: ViewState<(Hotel, Room)>,
    /// Render signal for disabling the submit control while a call is
    /// pending; `submit` takes `&mut self`, which already serializes calls.
    submitting: bool,
}

impl BookingFlowPage {
    pub fn new(
        hotels: Arc<dyn HotelRepository>,
        rooms: Arc<dyn RoomRepository>,
        bookings: Arc<dyn BookingRepository>,
        pricing: PricingConfig,
    ) -> Self {
        Self {
            hotels,
            rooms,
            bookings,
            pricing,
            flow: BookingFlow::new(),
            context: ViewState::Loading,
            submitting: false,
        }
    }

    pub fn flow(&self) -> &BookingFlow {
        &self.flow
    }

    pub fn flow_mut(&mut self) -> &mut BookingFlow {
        &mut self.flow
    }

    pub fn context(&self) -> &ViewState<(Hotel, Room)> {
        &self.context
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Fetch the hotel and room being booked, in parallel. A fresh flow
    /// starts alongside them.
    pub async fn load(&mut self, hotel_id: i64, room_id: i64) {
        self.context = ViewState::Loading;
        self.flow = BookingFlow::new();

        let (hotel, room) = tokio::join!(self.hotels.get(hotel_id), self.rooms.get(room_id));
        self.context = match (hotel, room) {
            (Ok(hotel), Ok(room)) => ViewState::Ready((hotel, room)),
            (Err(ServiceError::NotFound(_)), _) | (_, Err(ServiceError::NotFound(_))) => {
                ViewState::NotFound
            }
            (Err(err), _) | (_, Err(err)) => ViewState::Failed(err.to_string()),
        };
    }

    /// The summary-panel price for the draft as it stands. Recomputed on
    /// every call, never stored on the draft.
    pub fn price(&self) -> Option<PriceBreakdown> {
        let (_, room) = self.context.clone().ready()?;
        Some(quote(room.base_price, self.flow.draft().nights(), &self.pricing))
    }

    /// Submit the completed draft. The party must fit the room's maximum
    /// occupancy; at most one submission is in flight at a time; on
    /// failure the flow parks in `Failed` with the draft kept for retry.
    pub async fn submit(&mut self, user_id: &str) -> Result<Booking, SubmitError> {
        if self.submitting {
            return Err(SubmitError::AlreadyInFlight);
        }
        let (hotel, room) = self
            .context
            .clone()
            .ready()
            .ok_or(SubmitError::ContextMissing)?;
        self.flow.ready_to_submit().map_err(SubmitError::Flow)?;

        let guests = self.flow.draft().guest_count.total();
        if !room.fits(guests) {
            return Err(SubmitError::Overcapacity {
                guests,
                max: room.max_occupancy,
            });
        }

        let total = quote(room.base_price, self.flow.draft().nights(), &self.pricing).total;
        let draft = self
            .flow
            .draft()
            .clone()
            .into_new_booking(user_id, hotel.id, room.id, total)
            .ok_or(SubmitError::Flow(FlowError::MissingFields(vec![
                "checkInDate",
                "checkOutDate",
            ])))?;

        self.submitting = true;
        let outcome = self.bookings.create(draft).await;
        self.submitting = false;

        match outcome {
            Ok(booking) => {
                self.flow
                    .complete(booking.booking_reference.clone())
                    .map_err(SubmitError::Flow)?;
                Ok(booking)
            }
            Err(err) => {
                tracing::warn!(error = %err, "booking submission failed");
                self.flow
                    .fail(err.to_string())
                    .map_err(SubmitError::Flow)?;
                Err(SubmitError::Service(err))
            }
        }
    }

    /// Recover from a failed submission back to the payment step.
    pub fn retry(&mut self) -> Result<BookingStep, FlowError> {
        self.flow.retry()
    }

    /// Look up a created booking for the confirmation page.
    pub async fn confirmation(&self, booking_id: i64) -> ViewState<Booking> {
        ViewState::from_result(self.bookings.get(booking_id).await)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("A submission is already in flight")]
    AlreadyInFlight,
    #[error("Hotel and room are not loaded")]
    ContextMissing,
    #[error("Party of {guests} exceeds the room's maximum occupancy of {max}")]
    Overcapacity { guests: u32, max: u32 },
    #[error(transparent)]
    Flow(FlowError),
    #[error(transparent)]
    Service(ServiceError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Duration, NaiveDate, Utc};
    use stayfinder_booking::BookingStep;
    use stayfinder_core::PrimaryGuest;
    use stayfinder_store::{
        Fixtures, InMemoryBookingRepo, InMemoryHotelRepo, InMemoryRoomRepo, Simulation,
    };

    fn page(booking_sim: Simulation) -> BookingFlowPage {
        let fixtures = Fixtures::load().unwrap();
        BookingFlowPage::new(
            Arc::new(InMemoryHotelRepo::new(
                fixtures.hotels.clone(),
                Simulation::instant(),
            )),
            Arc::new(InMemoryRoomRepo::new(
                fixtures.rooms.clone(),
                Simulation::instant(),
            )),
            Arc::new(InMemoryBookingRepo::new(fixtures.bookings, booking_sim)),
            PricingConfig::default(),
        )
    }

    fn fill_draft(page: &mut BookingFlowPage, check_in: NaiveDate, nights: i64) {
        let draft = page.flow_mut().draft_mut();
        draft.check_in_date = Some(check_in);
        draft.check_out_date = Some(check_in + Duration::days(nights));
        draft.guest_details.primary_guest = PrimaryGuest {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "+1 305 555 0100".into(),
        };
        draft.payment_info.card_number = "4111 1111 1111 1111".into();
        draft.payment_info.expiry_date = "09/28".into();
        draft.payment_info.cvv = "123".into();
        draft.payment_info.cardholder_name = "Ada Lovelace".into();
    }

    fn advance_to_payment(page: &mut BookingFlowPage) {
        page.flow_mut().advance().unwrap();
        page.flow_mut().advance().unwrap();
    }

    #[tokio::test]
    async fn summary_price_matches_the_persisted_total() {
        let mut page = page(Simulation::instant());
        page.load(1, 1).await;

        let check_in = (Utc::now() + Duration::days(30)).date_naive();
        fill_draft(&mut page, check_in, 3);
        advance_to_payment(&mut page);

        let quoted = page.price().unwrap();
        let booking = page.submit("user1").await.unwrap();
        assert_eq!(booking.total_price, quoted.total);
        assert_eq!(page.flow().step(), BookingStep::Submitted);
        assert_eq!(
            page.flow().reference(),
            Some(booking.booking_reference.as_str())
        );
        assert!(booking
            .booking_reference
            .ends_with(&Utc::now().year().to_string()));
    }

    #[tokio::test]
    async fn missing_room_renders_not_found() {
        let mut page = page(Simulation::instant());
        page.load(1, 999).await;
        assert_eq!(*page.context(), ViewState::NotFound);
        assert!(matches!(
            page.submit("user1").await,
            Err(SubmitError::ContextMissing)
        ));
    }

    #[tokio::test]
    async fn failed_submission_keeps_the_draft_for_retry() {
        let mut page = page(Simulation::always_failing());
        page.load(1, 1).await;

        let check_in = (Utc::now() + Duration::days(30)).date_naive();
        fill_draft(&mut page, check_in, 2);
        advance_to_payment(&mut page);

        let err = page.submit("user1").await.unwrap_err();
        assert!(matches!(err, SubmitError::Service(ServiceError::Transient(_))));
        assert_eq!(page.flow().step(), BookingStep::Failed);
        assert_eq!(
            page.flow().draft().guest_details.primary_guest.name,
            "Ada Lovelace"
        );
        assert!(!page.is_submitting());

        assert_eq!(page.retry().unwrap(), BookingStep::Payment);
    }

    #[tokio::test]
    async fn oversized_party_is_rejected_before_the_collaborator() {
        // Room 1 sleeps two.
        let mut page = page(Simulation::instant());
        page.load(1, 1).await;

        let check_in = (Utc::now() + Duration::days(30)).date_naive();
        fill_draft(&mut page, check_in, 2);
        page.flow_mut().draft_mut().guest_count.adults = 5;
        advance_to_payment(&mut page);

        assert!(matches!(
            page.submit("user1").await,
            Err(SubmitError::Overcapacity { guests: 5, max: 2 })
        ));
        // The flow stays on the payment step for the guest to adjust.
        assert_eq!(page.flow().step(), BookingStep::Payment);
    }

    #[tokio::test]
    async fn submit_control_reenables_after_every_attempt() {
        let mut page = page(Simulation::instant());
        page.load(1, 1).await;

        let check_in = (Utc::now() + Duration::days(30)).date_naive();
        fill_draft(&mut page, check_in, 2);
        advance_to_payment(&mut page);

        assert!(!page.is_submitting());
        page.submit("user1").await.unwrap();
        assert!(!page.is_submitting());

        // A second click after success is refused by the flow, not the flag.
        assert!(matches!(
            page.submit("user1").await,
            Err(SubmitError::Flow(FlowError::InvalidTransition { .. }))
        ));
    }

    #[tokio::test]
    async fn submit_refuses_before_payment_step() {
        let mut page = page(Simulation::instant());
        page.load(1, 1).await;

        let check_in = (Utc::now() + Duration::days(30)).date_naive();
        fill_draft(&mut page, check_in, 2);
        // Still on step one.
        assert!(matches!(
            page.submit("user1").await,
            Err(SubmitError::Flow(FlowError::InvalidTransition { .. }))
        ));
    }
}
