use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A room category within a hotel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub hotel_id: i64,
    pub room_type: String,
    pub bed_configuration: String,
    pub max_occupancy: u32,
    /// Nightly rate before taxes and fees.
    pub base_price: f64,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    /// Dates the room can be booked for.
    pub availability: Vec<NaiveDate>,
}

impl Room {
    pub fn fits(&self, guests: u32) -> bool {
        guests <= self.max_occupancy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupancy_bounds() {
        let room = Room {
            id: 1,
            hotel_id: 1,
            room_type: "Deluxe King".into(),
            bed_configuration: "1 King Bed".into(),
            max_occupancy: 2,
            base_price: 189.0,
            amenities: vec!["WiFi".into()],
            images: vec![],
            availability: vec![],
        };
        assert!(room.fits(2));
        assert!(!room.fits(3));
    }
}
