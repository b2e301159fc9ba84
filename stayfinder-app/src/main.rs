use chrono::{Duration, Utc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stayfinder_app::{BookingFlowPage, MyBookingsPage, RoomServicePage, SearchAction, SearchPage};
use stayfinder_booking::{PaymentInfo, PricingConfig};
use stayfinder_core::{PrimaryGuest, RoomRepository, RoomServiceRepository};
use stayfinder_search::SearchCriteria;
use stayfinder_store::{Config, MemoryStore, Simulation};

/// Walks one guest journey against the seeded in-memory collaborators:
/// search Miami, book a room, order breakfast, review the bookings list.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stayfinder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    let store = MemoryStore::seeded(Simulation::new(&config.simulation))?;
    let user_id = "demo-user";

    // Search.
    let mut search = SearchPage::new(
        store.hotels.clone(),
        config.search.page_size,
        config.search.suggestion_limit,
    );
    let check_in = (Utc::now() + Duration::days(30)).date_naive();
    let check_out = check_in + Duration::days(3);
    let mut criteria = SearchCriteria::for_destination("Miami");
    criteria.check_in = Some(check_in);
    criteria.check_out = Some(check_out);
    search.dispatch(SearchAction::SetCriteria(criteria));
    search.load().await;
    let page = search
        .view()
        .ready()
        .ok_or_else(|| anyhow::anyhow!("search did not produce results"))?;
    tracing::info!(total = page.total_items, "search returned hotels");
    let hotel = page
        .items
        .first()
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("no hotels matched"))?;

    // Book the first room of the top hotel.
    let rooms = store.rooms.list_by_hotel(hotel.id).await?;
    let room = rooms
        .first()
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("hotel {} has no rooms", hotel.id))?;

    let pricing = PricingConfig {
        tax_rate: config.business_rules.tax_rate,
        service_fee: config.business_rules.service_fee,
    };
    let mut booking_page = BookingFlowPage::new(
        store.hotels.clone(),
        store.rooms.clone(),
        store.bookings.clone(),
        pricing,
    );
    booking_page.load(hotel.id, room.id).await;

    let draft = booking_page.flow_mut().draft_mut();
    draft.check_in_date = Some(check_in);
    draft.check_out_date = Some(check_out);
    draft.guest_details.primary_guest = PrimaryGuest {
        name: "Demo Guest".into(),
        email: "demo@example.com".into(),
        phone: "555-0100".into(),
    };
    draft.payment_info = PaymentInfo {
        card_number: "4242424242424242".into(),
        expiry_date: "12/27".into(),
        cvv: "123".into(),
        cardholder_name: "Demo Guest".into(),
        billing_address: String::new(),
    };
    booking_page.flow_mut().advance()?;
    booking_page.flow_mut().advance()?;
    let booking = booking_page.submit(user_id).await?;
    tracing::info!(
        reference = %booking.booking_reference,
        total = booking.total_price,
        "booking confirmed"
    );

    // Order room service against the new booking.
    let mut dining = RoomServicePage::new(store.room_service.clone(), booking.id);
    dining.load_menu().await;
    if let Some(first) = dining.category("breakfast").first().cloned() {
        dining.cart.add_item(&first);
        dining.room_number = "1204".into();
        let order = dining.submit().await?;
        let delivered = store.room_service.get_order(order.id).await?;
        tracing::info!(
            order = delivered.id,
            eta = %delivered.estimated_delivery,
            "room service order placed"
        );
    }

    // The bookings list now shows the stay as upcoming.
    let mut my_bookings = MyBookingsPage::new(store.bookings.clone(), user_id);
    my_bookings.load().await;
    if let Some(upcoming) = my_bookings.view().ready() {
        for b in upcoming {
            tracing::info!(
                reference = %b.booking_reference,
                check_in = %b.check_in_date,
                "upcoming stay"
            );
        }
    }

    Ok(())
}
