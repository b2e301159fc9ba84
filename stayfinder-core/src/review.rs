use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A guest review attached to a hotel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub hotel_id: i64,
    pub user_id: String,
    pub user_name: String,
    /// 1..=5.
    pub rating: u8,
    pub title: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub helpful_count: u32,
}
