use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use stayfinder_core::Hotel;

use crate::criteria::{FilterState, SearchCriteria, SortKey, PRICE_UNCAPPED};

/// Narrow the collection to the searched destination. Empty destination is
/// the "browse all" entry point and returns the collection unchanged, in
/// input order.
pub fn search(hotels: &[Hotel], criteria: &SearchCriteria) -> Vec<Hotel> {
    let needle = criteria.destination.trim().to_lowercase();
    if needle.is_empty() {
        return hotels.to_vec();
    }
    hotels
        .iter()
        .filter(|h| h.location.city.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Apply every enabled filter axis conjunctively. Axes left at their
/// defaults do not exclude anything, so the default state is the identity.
pub fn filter(hotels: &[Hotel], state: &FilterState) -> Vec<Hotel> {
    hotels
        .iter()
        .filter(|h| matches_filters(h, state))
        .cloned()
        .collect()
}

fn matches_filters(hotel: &Hotel, state: &FilterState) -> bool {
    // Price compares each hotel's own nightly rate, and the ceiling is only
    // active below the uncapped sentinel.
    if hotel.price_per_night < state.price_min {
        return false;
    }
    if state.price_max < PRICE_UNCAPPED && hotel.price_per_night > state.price_max {
        return false;
    }
    if !state.star_ratings.is_empty() && !state.star_ratings.contains(&hotel.star_rating) {
        return false;
    }
    if !state.amenities.is_empty()
        && !state.amenities.iter().all(|a| hotel.amenities.contains(a))
    {
        return false;
    }
    if hotel.rating < state.min_guest_rating {
        return false;
    }
    if !state.property_types.is_empty() && !state.property_types.contains(&hotel.property_type) {
        return false;
    }
    if let Some(max_km) = state.max_distance_km {
        if hotel.distance_from_center > max_km {
            return false;
        }
    }
    true
}

/// Composite score behind the "Recommended" ordering. Higher is better.
pub fn recommended_score(hotel: &Hotel) -> f64 {
    hotel.rating * 0.4
        + f64::from(hotel.star_rating) * 0.3
        + (5.0 - hotel.distance_from_center) * 0.3
}

/// Order the results by the active sort key. The sort is stable: hotels
/// that compare equal keep their relative input order.
pub fn sort(mut hotels: Vec<Hotel>, key: SortKey) -> Vec<Hotel> {
    match key {
        SortKey::Recommended => {
            hotels.sort_by(|a, b| total_cmp_desc(recommended_score(a), recommended_score(b)))
        }
        SortKey::Rating => hotels.sort_by(|a, b| total_cmp_desc(a.rating, b.rating)),
        SortKey::PriceLowToHigh => {
            hotels.sort_by(|a, b| total_cmp_desc(b.price_per_night, a.price_per_night))
        }
        SortKey::PriceHighToLow => {
            hotels.sort_by(|a, b| total_cmp_desc(a.price_per_night, b.price_per_night))
        }
        SortKey::Stars => hotels.sort_by(|a, b| b.star_rating.cmp(&a.star_rating)),
    }
    hotels
}

fn total_cmp_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// One display page of an ordered result set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub items: Vec<Hotel>,
    /// 1-indexed.
    pub page: u32,
    pub page_size: u32,
    pub total_items: usize,
    pub total_pages: u32,
}

impl Page {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Slice one page out of the ordered results. Pages are 1-indexed; a page
/// past the end is an empty slice, not an error.
pub fn paginate(hotels: &[Hotel], page: u32, page_size: u32) -> Page {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let total_items = hotels.len();
    let total_pages = total_items.div_ceil(page_size as usize) as u32;

    let start = (page as usize - 1) * page_size as usize;
    let items = if start >= total_items {
        Vec::new()
    } else {
        let end = (start + page_size as usize).min(total_items);
        hotels[start..end].to_vec()
    };

    Page {
        items,
        page,
        page_size,
        total_items,
        total_pages,
    }
}
