use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An entry on the in-room dining menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub dietary_tags: Vec<String>,
    /// Kitchen prep time in minutes.
    pub preparation_time: u32,
    pub available: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Preparing,
    Delivered,
    Cancelled,
}

/// A priced line within an order; price is captured at order time so later
/// menu edits cannot change what the guest was charged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub menu_item_id: i64,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl OrderLine {
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomServiceOrder {
    pub id: i64,
    pub booking_id: i64,
    pub room_number: String,
    pub items: Vec<OrderLine>,
    #[serde(default)]
    pub special_instructions: String,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub ordered_at: DateTime<Utc>,
    pub estimated_delivery: DateTime<Utc>,
}

/// Payload for order creation; id, status and timestamps are assigned by
/// the collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoomServiceOrder {
    pub booking_id: i64,
    pub room_number: String,
    pub items: Vec<OrderLine>,
    pub special_instructions: String,
    pub total_amount: f64,
}
