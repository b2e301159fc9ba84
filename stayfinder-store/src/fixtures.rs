use stayfinder_core::{Booking, Hotel, MenuItem, Review, Room};

const HOTELS_JSON: &str = include_str!("../data/hotels.json");
const ROOMS_JSON: &str = include_str!("../data/rooms.json");
const BOOKINGS_JSON: &str = include_str!("../data/bookings.json");
const REVIEWS_JSON: &str = include_str!("../data/reviews.json");
const MENU_JSON: &str = include_str!("../data/room_service_menu.json");

/// The static records every mock collaborator starts from. Nothing is
/// persisted: reseeding from the fixtures discards all mutations.
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub hotels: Vec<Hotel>,
    pub rooms: Vec<Room>,
    pub bookings: Vec<Booking>,
    pub reviews: Vec<Review>,
    pub menu: Vec<MenuItem>,
}

impl Fixtures {
    pub fn load() -> Result<Self, serde_json::Error> {
        Ok(Self {
            hotels: serde_json::from_str(HOTELS_JSON)?,
            rooms: serde_json::from_str(ROOMS_JSON)?,
            bookings: serde_json::from_str(BOOKINGS_JSON)?,
            reviews: serde_json::from_str(REVIEWS_JSON)?,
            menu: serde_json::from_str(MENU_JSON)?,
        })
    }
}
