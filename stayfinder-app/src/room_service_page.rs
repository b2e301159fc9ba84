use std::sync::Arc;

use stayfinder_core::repository::RoomServiceRepository;
use stayfinder_core::{
    MenuItem, NewRoomServiceOrder, OrderLine, RoomServiceOrder, ServiceError,
};

use crate::view::ViewState;

/// Lines the guest has picked off the menu, keyed by menu item. Prices are
/// captured when the item is added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<OrderLine>,
}

impl Cart {
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one of the given item, merging into an existing line if the item
    /// is already in the cart. Unavailable items are ignored.
    pub fn add_item(&mut self, item: &MenuItem) {
        if !item.available {
            return;
        }
        match self.lines.iter_mut().find(|l| l.menu_item_id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(OrderLine {
                menu_item_id: item.id,
                name: item.name.clone(),
                price: item.price,
                quantity: 1,
            }),
        }
    }

    /// Set the quantity of a line; zero removes it.
    pub fn set_quantity(&mut self, menu_item_id: i64, quantity: u32) {
        if quantity == 0 {
            self.lines.retain(|l| l.menu_item_id != menu_item_id);
        } else if let Some(line) = self.lines.iter_mut().find(|l| l.menu_item_id == menu_item_id)
        {
            line.quantity = quantity;
        }
    }

    pub fn remove(&mut self, menu_item_id: i64) {
        self.set_quantity(menu_item_id, 0);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn total(&self) -> f64 {
        self.lines.iter().map(OrderLine::line_total).sum()
    }
}

/// Why an order could not be placed.
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("another order submission is in flight")]
    AlreadyInFlight,
    #[error("cart is empty")]
    EmptyCart,
    #[error("room number is required")]
    MissingRoomNumber,
    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Controller for the in-room dining page: menu, cart and order submission.
pub struct RoomServicePage {
    room_service: Arc<dyn RoomServiceRepository>,
    booking_id: i64,
    menu: ViewState<Vec<MenuItem>>,
    pub cart: Cart,
    pub room_number: String,
    pub special_instructions: String,
    submitting: bool,
}

impl RoomServicePage {
    pub fn new(room_service: Arc<dyn RoomServiceRepository>, booking_id: i64) -> Self {
        Self {
            room_service,
            booking_id,
            menu: ViewState::Loading,
            cart: Cart::default(),
            room_number: String::new(),
            special_instructions: String::new(),
            submitting: false,
        }
    }

    pub async fn load_menu(&mut self) {
        self.menu = ViewState::from_result(self.room_service.menu().await);
    }

    /// Menu entries under one category, in menu order. Empty until loaded.
    pub fn category(&self, category: &str) -> Vec<MenuItem> {
        match &self.menu {
            ViewState::Ready(items) => items
                .iter()
                .filter(|i| i.category.eq_ignore_ascii_case(category))
                .cloned()
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn menu(&self) -> &ViewState<Vec<MenuItem>> {
        &self.menu
    }

    /// Place the order. At most one submission runs at a time; on success
    /// the cart is emptied so a re-render starts fresh.
    pub async fn submit(&mut self) -> Result<RoomServiceOrder, OrderError> {
        if self.submitting {
            return Err(OrderError::AlreadyInFlight);
        }
        if self.cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        if self.room_number.trim().is_empty() {
            return Err(OrderError::MissingRoomNumber);
        }

        self.submitting = true;
        let order = NewRoomServiceOrder {
            booking_id: self.booking_id,
            room_number: self.room_number.clone(),
            items: self.cart.lines().to_vec(),
            special_instructions: self.special_instructions.clone(),
            total_amount: self.cart.total(),
        };
        let result = self.room_service.create_order(order).await;
        self.submitting = false;

        let placed = result?;
        self.cart.clear();
        self.special_instructions.clear();
        Ok(placed)
    }
}
