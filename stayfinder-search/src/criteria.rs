use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Nightly-price slider cap in the results UI; a max at or above this value
/// means "no price ceiling".
pub const PRICE_UNCAPPED: f64 = 1000.0;

/// What the visitor asked for in the search bar.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    /// Free text matched against city names; empty means "browse all".
    pub destination: String,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub adults: u32,
    pub children: u32,
    pub rooms: u32,
}

impl SearchCriteria {
    pub fn for_destination(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            adults: 2,
            children: 0,
            rooms: 1,
            ..Default::default()
        }
    }

    pub fn nights(&self) -> i64 {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => (check_out - check_in).num_days(),
            _ => 0,
        }
    }

    /// A criteria set that can actually be searched: guest counts sane and,
    /// when dates are given, a positive-length stay.
    pub fn validate(&self) -> Result<(), CriteriaError> {
        if self.adults < 1 {
            return Err(CriteriaError::NoAdults);
        }
        if self.rooms < 1 {
            return Err(CriteriaError::NoRooms);
        }
        if let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out) {
            if check_out <= check_in {
                return Err(CriteriaError::InvalidStay {
                    check_in,
                    check_out,
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CriteriaError {
    #[error("At least one adult is required")]
    NoAdults,
    #[error("At least one room is required")]
    NoRooms,
    #[error("Check-out {check_out} must be after check-in {check_in}")]
    InvalidStay {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
}

/// Sidebar filter axes. Every default value is a no-op: filtering with
/// `FilterState::default()` returns the input unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub price_min: f64,
    /// At or above [`PRICE_UNCAPPED`] the ceiling is disabled.
    pub price_max: f64,
    /// Accepted star classes; empty accepts all.
    pub star_ratings: BTreeSet<u8>,
    /// Hotel must offer every listed amenity; empty accepts all.
    pub amenities: BTreeSet<String>,
    /// Minimum guest score; 0 accepts all.
    pub min_guest_rating: f64,
    /// Accepted property types; empty accepts all.
    pub property_types: BTreeSet<String>,
    /// Maximum kilometres from the centre; `None` accepts all.
    pub max_distance_km: Option<f64>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            price_min: 0.0,
            price_max: PRICE_UNCAPPED,
            star_ratings: BTreeSet::new(),
            amenities: BTreeSet::new(),
            min_guest_rating: 0.0,
            property_types: BTreeSet::new(),
            max_distance_km: None,
        }
    }
}

impl FilterState {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Ordering applied to filtered results.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    #[serde(rename = "recommended")]
    Recommended,
    #[serde(rename = "rating")]
    Rating,
    #[serde(rename = "price-low")]
    PriceLowToHigh,
    #[serde(rename = "price-high")]
    PriceHighToLow,
    #[serde(rename = "stars")]
    Stars,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_state_is_a_no_op_marker() {
        assert!(FilterState::default().is_default());
        let mut state = FilterState::default();
        state.star_ratings.insert(4);
        assert!(!state.is_default());
    }

    #[test]
    fn stay_must_have_positive_length() {
        let mut criteria = SearchCriteria::for_destination("Miami");
        criteria.check_in = NaiveDate::from_ymd_opt(2026, 9, 10);
        criteria.check_out = NaiveDate::from_ymd_opt(2026, 9, 10);
        assert!(matches!(
            criteria.validate(),
            Err(CriteriaError::InvalidStay { .. })
        ));

        criteria.check_out = NaiveDate::from_ymd_opt(2026, 9, 12);
        assert!(criteria.validate().is_ok());
        assert_eq!(criteria.nights(), 2);
    }

    #[test]
    fn guest_counts_are_bounded_below() {
        let mut criteria = SearchCriteria::for_destination("Miami");
        criteria.adults = 0;
        assert_eq!(criteria.validate(), Err(CriteriaError::NoAdults));
    }

    #[test]
    fn sort_key_round_trips_wire_names() {
        let key: SortKey = serde_json::from_str(r#""price-low""#).unwrap();
        assert_eq!(key, SortKey::PriceLowToHigh);
        assert_eq!(
            serde_json::to_string(&SortKey::Recommended).unwrap(),
            r#""recommended""#
        );
    }
}
