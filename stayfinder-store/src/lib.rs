pub mod app_config;
pub mod booking_repo;
pub mod fixtures;
pub mod hotel_repo;
pub mod review_repo;
pub mod room_repo;
pub mod room_service_repo;
pub mod simulation;

pub use app_config::Config;
pub use booking_repo::InMemoryBookingRepo;
pub use fixtures::Fixtures;
pub use hotel_repo::InMemoryHotelRepo;
pub use review_repo::InMemoryReviewRepo;
pub use room_repo::InMemoryRoomRepo;
pub use room_service_repo::InMemoryRoomServiceRepo;
pub use simulation::Simulation;

use std::sync::Arc;

/// All five collaborators wired over one fixture set and one simulation
/// profile, the way the application boots them.
#[derive(Clone)]
pub struct MemoryStore {
    pub hotels: Arc<InMemoryHotelRepo>,
    pub rooms: Arc<InMemoryRoomRepo>,
    pub bookings: Arc<InMemoryBookingRepo>,
    pub reviews: Arc<InMemoryReviewRepo>,
    pub room_service: Arc<InMemoryRoomServiceRepo>,
}

impl MemoryStore {
    pub fn seeded(simulation: Simulation) -> Result<Self, serde_json::Error> {
        let fixtures = Fixtures::load()?;
        Ok(Self::from_fixtures(fixtures, simulation))
    }

    pub fn from_fixtures(fixtures: Fixtures, simulation: Simulation) -> Self {
        Self {
            hotels: Arc::new(InMemoryHotelRepo::new(fixtures.hotels, simulation.clone())),
            rooms: Arc::new(InMemoryRoomRepo::new(fixtures.rooms, simulation.clone())),
            bookings: Arc::new(InMemoryBookingRepo::new(
                fixtures.bookings,
                simulation.clone(),
            )),
            reviews: Arc::new(InMemoryReviewRepo::new(fixtures.reviews, simulation.clone())),
            room_service: Arc::new(InMemoryRoomServiceRepo::new(fixtures.menu, simulation)),
        }
    }
}
