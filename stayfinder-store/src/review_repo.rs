use async_trait::async_trait;
use tokio::sync::RwLock;

use stayfinder_core::repository::ReviewRepository;
use stayfinder_core::{CoreResult, Review, ServiceError};

use crate::simulation::Simulation;

pub struct InMemoryReviewRepo {
    reviews: RwLock<Vec<Review>>,
    simulation: Simulation,
}

impl InMemoryReviewRepo {
    pub fn new(reviews: Vec<Review>, simulation: Simulation) -> Self {
        Self {
            reviews: RwLock::new(reviews),
            simulation,
        }
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepo {
    async fn list_by_hotel(&self, hotel_id: i64) -> CoreResult<Vec<Review>> {
        self.simulation.read("reviews.list_by_hotel").await?;
        Ok(self
            .reviews
            .read()
            .await
            .iter()
            .filter(|r| r.hotel_id == hotel_id)
            .cloned()
            .collect())
    }

    async fn mark_helpful(&self, id: i64) -> CoreResult<Review> {
        self.simulation.write("reviews.mark_helpful").await?;
        let mut reviews = self.reviews.write().await;
        let review = reviews
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ServiceError::not_found("Review", id))?;
        review.helpful_count += 1;
        Ok(review.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Fixtures;

    #[tokio::test]
    async fn helpful_votes_accumulate() {
        let repo = InMemoryReviewRepo::new(Fixtures::load().unwrap().reviews, Simulation::instant());
        let before = repo.list_by_hotel(1).await.unwrap()[0].clone();
        let after = repo.mark_helpful(before.id).await.unwrap();
        assert_eq!(after.helpful_count, before.helpful_count + 1);
    }

    #[tokio::test]
    async fn hotel_without_reviews_is_an_empty_list() {
        let repo = InMemoryReviewRepo::new(Fixtures::load().unwrap().reviews, Simulation::instant());
        assert!(repo.list_by_hotel(4).await.unwrap().is_empty());
    }
}
