use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::booking::{Booking, NewBooking};
use crate::hotel::Hotel;
use crate::review::Review;
use crate::room::Room;
use crate::room_service::{MenuItem, NewRoomServiceOrder, RoomServiceOrder};
use crate::CoreResult;

/// Server-side pre-filter applied by the hotel collaborator. This is the
/// coarse query the data layer understands; the fine-grained filter axes
/// (price, distance, property type) are applied client-side by the search
/// pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelQuery {
    /// Case-insensitive substring matched against the city name.
    pub city: String,
    pub min_rating: f64,
    pub star_ratings: Vec<u8>,
    /// Hotel must offer every listed amenity.
    pub amenities: Vec<String>,
}

#[async_trait]
pub trait HotelRepository: Send + Sync {
    async fn list(&self) -> CoreResult<Vec<Hotel>>;
    async fn get(&self, id: i64) -> CoreResult<Hotel>;
    async fn search(&self, query: &HotelQuery) -> CoreResult<Vec<Hotel>>;
}

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn get(&self, id: i64) -> CoreResult<Room>;
    async fn list_by_hotel(&self, hotel_id: i64) -> CoreResult<Vec<Room>>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn list(&self) -> CoreResult<Vec<Booking>>;
    async fn list_by_user(&self, user_id: &str) -> CoreResult<Vec<Booking>>;
    async fn get(&self, id: i64) -> CoreResult<Booking>;
    async fn get_by_reference(&self, reference: &str) -> CoreResult<Booking>;
    /// Assigns id, reference, confirmed/paid statuses and timestamps.
    async fn create(&self, draft: NewBooking) -> CoreResult<Booking>;
    /// Fails unless the booking is currently confirmed and outside the
    /// cancellation window.
    async fn cancel(&self, id: i64, reason: &str) -> CoreResult<Booking>;
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn list_by_hotel(&self, hotel_id: i64) -> CoreResult<Vec<Review>>;
    async fn mark_helpful(&self, id: i64) -> CoreResult<Review>;
}

#[async_trait]
pub trait RoomServiceRepository: Send + Sync {
    async fn menu(&self) -> CoreResult<Vec<MenuItem>>;
    async fn menu_by_category(&self, category: &str) -> CoreResult<Vec<MenuItem>>;
    async fn create_order(&self, order: NewRoomServiceOrder) -> CoreResult<RoomServiceOrder>;
    async fn get_order(&self, id: i64) -> CoreResult<RoomServiceOrder>;
    async fn cancel_order(&self, id: i64) -> CoreResult<RoomServiceOrder>;
}
