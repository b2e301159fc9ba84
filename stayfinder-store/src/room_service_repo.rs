use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;

use stayfinder_core::repository::RoomServiceRepository;
use stayfinder_core::room_service::NewRoomServiceOrder;
use stayfinder_core::{CoreResult, MenuItem, OrderStatus, RoomServiceOrder, ServiceError};

use crate::simulation::Simulation;

/// Minutes between order placement and the promised delivery.
const DELIVERY_ESTIMATE_MINUTES: i64 = 30;

pub struct InMemoryRoomServiceRepo {
    menu: RwLock<Vec<MenuItem>>,
    orders: RwLock<Vec<RoomServiceOrder>>,
    simulation: Simulation,
}

impl InMemoryRoomServiceRepo {
    pub fn new(menu: Vec<MenuItem>, simulation: Simulation) -> Self {
        Self {
            menu: RwLock::new(menu),
            orders: RwLock::new(Vec::new()),
            simulation,
        }
    }
}

#[async_trait]
impl RoomServiceRepository for InMemoryRoomServiceRepo {
    async fn menu(&self) -> CoreResult<Vec<MenuItem>> {
        self.simulation.read("room_service.menu").await?;
        Ok(self.menu.read().await.clone())
    }

    async fn menu_by_category(&self, category: &str) -> CoreResult<Vec<MenuItem>> {
        self.simulation.read("room_service.menu_by_category").await?;
        Ok(self
            .menu
            .read()
            .await
            .iter()
            .filter(|item| item.category.eq_ignore_ascii_case(category))
            .cloned()
            .collect())
    }

    async fn create_order(&self, order: NewRoomServiceOrder) -> CoreResult<RoomServiceOrder> {
        self.simulation.write("room_service.create_order").await?;

        if order.items.is_empty() {
            return Err(ServiceError::Validation("Order has no items".into()));
        }
        if order.room_number.trim().is_empty() {
            return Err(ServiceError::Validation("Room number is required".into()));
        }

        let now = Utc::now();
        let mut orders = self.orders.write().await;
        let id = orders.iter().map(|o| o.id).max().unwrap_or(0) + 1;
        let created = RoomServiceOrder {
            id,
            booking_id: order.booking_id,
            room_number: order.room_number,
            items: order.items,
            special_instructions: order.special_instructions,
            total_amount: order.total_amount,
            status: OrderStatus::Preparing,
            ordered_at: now,
            estimated_delivery: now + Duration::minutes(DELIVERY_ESTIMATE_MINUTES),
        };
        orders.push(created.clone());

        tracing::info!(order_id = id, room = %created.room_number, "room service order placed");
        Ok(created)
    }

    async fn get_order(&self, id: i64) -> CoreResult<RoomServiceOrder> {
        self.simulation.read("room_service.get_order").await?;
        self.orders
            .read()
            .await
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("Order", id))
    }

    async fn cancel_order(&self, id: i64) -> CoreResult<RoomServiceOrder> {
        self.simulation.write("room_service.cancel_order").await?;
        let mut orders = self.orders.write().await;
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| ServiceError::not_found("Order", id))?;

        if order.status != OrderStatus::Preparing {
            return Err(ServiceError::Validation(format!(
                "Order {id} can no longer be cancelled"
            )));
        }
        order.status = OrderStatus::Cancelled;
        Ok(order.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Fixtures;
    use stayfinder_core::OrderLine;

    fn repo() -> InMemoryRoomServiceRepo {
        InMemoryRoomServiceRepo::new(Fixtures::load().unwrap().menu, Simulation::instant())
    }

    fn breakfast_order() -> NewRoomServiceOrder {
        NewRoomServiceOrder {
            booking_id: 1,
            room_number: "1205".into(),
            items: vec![
                OrderLine {
                    menu_item_id: 1,
                    name: "Continental Breakfast".into(),
                    price: 28.0,
                    quantity: 2,
                },
                OrderLine {
                    menu_item_id: 7,
                    name: "Fresh Orange Juice".into(),
                    price: 8.0,
                    quantity: 2,
                },
            ],
            special_instructions: "Please deliver by 8 AM".into(),
            total_amount: 72.0,
        }
    }

    #[tokio::test]
    async fn category_lookup_is_case_insensitive() {
        let items = repo().menu_by_category("breakfast").await.unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.category == "Breakfast"));
    }

    #[tokio::test]
    async fn order_starts_preparing_with_a_delivery_estimate() {
        let order = repo().create_order(breakfast_order()).await.unwrap();
        assert_eq!(order.status, OrderStatus::Preparing);
        assert_eq!(
            order.estimated_delivery - order.ordered_at,
            Duration::minutes(DELIVERY_ESTIMATE_MINUTES)
        );
        assert_eq!(order.total_amount, 72.0);
    }

    #[tokio::test]
    async fn empty_cart_and_missing_room_are_validation_errors() {
        let repo = repo();
        let mut order = breakfast_order();
        order.items.clear();
        assert!(matches!(
            repo.create_order(order).await,
            Err(ServiceError::Validation(_))
        ));

        let mut order = breakfast_order();
        order.room_number = "  ".into();
        assert!(matches!(
            repo.create_order(order).await,
            Err(ServiceError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn cancel_only_while_preparing() {
        let repo = repo();
        let order = repo.create_order(breakfast_order()).await.unwrap();
        let cancelled = repo.cancel_order(order.id).await.unwrap();
        assert_eq!(cancelled.status, OrderStatus::Cancelled);
        assert!(repo.cancel_order(order.id).await.is_err());
    }
}
