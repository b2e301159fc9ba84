use serde::{Deserialize, Serialize};

/// A bookable property as it appears in the catalog. Record ids are small
/// integers assigned by the fixture data, not database keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub location: Location,
    /// Official star classification, 1..=5.
    pub star_rating: u8,
    /// Aggregate guest score, 0.0..=5.0.
    pub rating: f64,
    pub review_count: u32,
    pub amenities: Vec<String>,
    pub price_per_night: f64,
    pub images: Vec<String>,
    pub property_type: String,
    /// Kilometres from the city centre.
    pub distance_from_center: f64,
    pub policies: HotelPolicies,
}

impl Hotel {
    /// True when the hotel offers every amenity in `required`.
    pub fn has_all_amenities<S: AsRef<str>>(&self, required: &[S]) -> bool {
        required
            .iter()
            .all(|a| self.amenities.iter().any(|own| own == a.as_ref()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotelPolicies {
    /// Local check-in time, e.g. "15:00".
    pub check_in_time: String,
    pub check_out_time: String,
    pub cancellation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Hotel {
        serde_json::from_str(
            r#"{
                "id": 1,
                "name": "Ocean Breeze Resort",
                "location": {
                    "address": "100 Collins Ave",
                    "city": "Miami",
                    "state": "FL",
                    "country": "USA",
                    "latitude": 25.7617,
                    "longitude": -80.1918
                },
                "starRating": 4,
                "rating": 4.5,
                "reviewCount": 812,
                "amenities": ["WiFi", "Pool", "Spa"],
                "pricePerNight": 289.0,
                "images": ["https://example.com/ocean-1.jpg"],
                "propertyType": "Resort",
                "distanceFromCenter": 2.1,
                "policies": {
                    "checkInTime": "15:00",
                    "checkOutTime": "11:00",
                    "cancellation": "Free cancellation up to 24 hours before check-in"
                }
            }"#,
        )
        .expect("hotel fixture should deserialize")
    }

    #[test]
    fn deserializes_camel_case_fixture() {
        let hotel = sample();
        assert_eq!(hotel.location.city, "Miami");
        assert_eq!(hotel.star_rating, 4);
        assert_eq!(hotel.price_per_night, 289.0);
    }

    #[test]
    fn amenity_superset_check() {
        let hotel = sample();
        assert!(hotel.has_all_amenities(&["WiFi", "Pool"]));
        assert!(!hotel.has_all_amenities(&["WiFi", "Gym"]));
        assert!(hotel.has_all_amenities::<&str>(&[]));
    }
}
