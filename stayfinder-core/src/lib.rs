pub mod booking;
pub mod hotel;
pub mod repository;
pub mod review;
pub mod room;
pub mod room_service;

pub use booking::{
    Booking, BookingStatus, GuestCount, GuestDetails, NewBooking, PaymentStatus, PrimaryGuest,
};
pub use hotel::{Hotel, HotelPolicies, Location};
pub use repository::{
    BookingRepository, HotelQuery, HotelRepository, ReviewRepository, RoomRepository,
    RoomServiceRepository,
};
pub use review::Review;
pub use room::Room;
pub use room_service::{MenuItem, NewRoomServiceOrder, OrderLine, OrderStatus, RoomServiceOrder};

/// Shared failure taxonomy for the collaborator layer. Every repository
/// operation resolves to one of these three cases; pages translate them
/// into display states and never crash on them.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Service temporarily unavailable: {0}")]
    Transient(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: i64) -> Self {
        Self::NotFound(format!("{entity} {id}"))
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transient(_))
    }
}

pub type CoreResult<T> = Result<T, ServiceError>;
