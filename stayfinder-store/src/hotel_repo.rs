use async_trait::async_trait;
use tokio::sync::RwLock;

use stayfinder_core::repository::{HotelQuery, HotelRepository};
use stayfinder_core::{CoreResult, Hotel, ServiceError};

use crate::simulation::Simulation;

/// Mock hotel collaborator over the fixture records.
pub struct InMemoryHotelRepo {
    hotels: RwLock<Vec<Hotel>>,
    simulation: Simulation,
}

impl InMemoryHotelRepo {
    pub fn new(hotels: Vec<Hotel>, simulation: Simulation) -> Self {
        Self {
            hotels: RwLock::new(hotels),
            simulation,
        }
    }
}

#[async_trait]
impl HotelRepository for InMemoryHotelRepo {
    async fn list(&self) -> CoreResult<Vec<Hotel>> {
        self.simulation.read("hotels.list").await?;
        Ok(self.hotels.read().await.clone())
    }

    async fn get(&self, id: i64) -> CoreResult<Hotel> {
        self.simulation.read("hotels.get").await?;
        self.hotels
            .read()
            .await
            .iter()
            .find(|h| h.id == id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("Hotel", id))
    }

    async fn search(&self, query: &HotelQuery) -> CoreResult<Vec<Hotel>> {
        self.simulation.read("hotels.search").await?;

        let city = query.city.trim().to_lowercase();
        let results: Vec<Hotel> = self
            .hotels
            .read()
            .await
            .iter()
            .filter(|h| city.is_empty() || h.location.city.to_lowercase().contains(&city))
            .filter(|h| h.rating >= query.min_rating)
            .filter(|h| query.star_ratings.is_empty() || query.star_ratings.contains(&h.star_rating))
            .filter(|h| h.has_all_amenities(&query.amenities))
            .cloned()
            .collect();

        tracing::debug!(city = %query.city, hits = results.len(), "hotel search");
        Ok(results)
    }
}
