use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stayfinder_core::repository::BookingRepository;
use stayfinder_core::{Booking, CoreResult};

use crate::view::ViewState;

/// Tabs on the my-bookings page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingsTab {
    Upcoming,
    Past,
    Cancelled,
}

/// Split a user's bookings into the tab the page files them under, newest
/// check-in first within each tab.
pub fn partition_bookings(
    mut bookings: Vec<Booking>,
    tab: BookingsTab,
    now: DateTime<Utc>,
) -> Vec<Booking> {
    bookings.retain(|b| match tab {
        BookingsTab::Upcoming => b.is_upcoming(now),
        BookingsTab::Cancelled => b.status == stayfinder_core::BookingStatus::Cancelled,
        BookingsTab::Past => {
            b.status != stayfinder_core::BookingStatus::Cancelled && !b.is_upcoming(now)
        }
    });
    bookings.sort_by(|a, b| b.check_in_date.cmp(&a.check_in_date));
    bookings
}

/// Controller for the my-bookings list and the cancel action.
pub struct MyBookingsPage {
    bookings: Arc<dyn BookingRepository>,
    user_id: String,
    list: ViewState<Vec<Booking>>,
    pub tab: BookingsTab,
}

impl MyBookingsPage {
    pub fn new(bookings: Arc<dyn BookingRepository>, user_id: impl Into<String>) -> Self {
        Self {
            bookings,
            user_id: user_id.into(),
            list: ViewState::Loading,
            tab: BookingsTab::Upcoming,
        }
    }

    pub async fn load(&mut self) {
        self.list = ViewState::from_result(self.bookings.list_by_user(&self.user_id).await);
    }

    /// Bookings under the active tab, or the non-ready state of the list.
    pub fn view(&self) -> ViewState<Vec<Booking>> {
        match &self.list {
            ViewState::Ready(bookings) => {
                let shown = partition_bookings(bookings.clone(), self.tab, Utc::now());
                if shown.is_empty() {
                    ViewState::EmptyResults
                } else {
                    ViewState::Ready(shown)
                }
            }
            other => other.clone(),
        }
    }

    /// Cancel a booking, then reload so the list reflects the new status.
    pub async fn cancel(&mut self, booking_id: i64, reason: &str) -> CoreResult<Booking> {
        let cancelled = self.bookings.cancel(booking_id, reason).await?;
        self.load().await;
        Ok(cancelled)
    }
}
