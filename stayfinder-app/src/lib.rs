pub mod booking_page;
pub mod my_bookings;
pub mod room_service_page;
pub mod search_page;
pub mod view;

pub use booking_page::{BookingFlowPage, SubmitError};
pub use my_bookings::{partition_bookings, BookingsTab, MyBookingsPage};
pub use room_service_page::{Cart, OrderError, RoomServicePage};
pub use search_page::{FetchTicket, SearchAction, SearchPage, SearchPageState};
pub use view::ViewState;
