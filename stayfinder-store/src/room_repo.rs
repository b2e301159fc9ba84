use async_trait::async_trait;
use tokio::sync::RwLock;

use stayfinder_core::repository::RoomRepository;
use stayfinder_core::{CoreResult, Room, ServiceError};

use crate::simulation::Simulation;

pub struct InMemoryRoomRepo {
    rooms: RwLock<Vec<Room>>,
    simulation: Simulation,
}

impl InMemoryRoomRepo {
    pub fn new(rooms: Vec<Room>, simulation: Simulation) -> Self {
        Self {
            rooms: RwLock::new(rooms),
            simulation,
        }
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepo {
    async fn get(&self, id: i64) -> CoreResult<Room> {
        self.simulation.read("rooms.get").await?;
        self.rooms
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("Room", id))
    }

    async fn list_by_hotel(&self, hotel_id: i64) -> CoreResult<Vec<Room>> {
        self.simulation.read("rooms.list_by_hotel").await?;
        Ok(self
            .rooms
            .read()
            .await
            .iter()
            .filter(|r| r.hotel_id == hotel_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Fixtures;

    #[tokio::test]
    async fn rooms_are_keyed_by_hotel() {
        let repo = InMemoryRoomRepo::new(Fixtures::load().unwrap().rooms, Simulation::instant());
        let rooms = repo.list_by_hotel(1).await.unwrap();
        assert_eq!(rooms.len(), 2);
        assert!(rooms.iter().all(|r| r.hotel_id == 1));

        // An unknown hotel yields an empty list, not an error.
        assert!(repo.list_by_hotel(999).await.unwrap().is_empty());
    }
}
