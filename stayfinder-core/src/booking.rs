use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Hour of day (UTC) a stay nominally begins; used when a policy decision
/// needs an instant rather than a calendar date.
pub const CHECK_IN_HOUR: u32 = 15;

/// Booking lifecycle. Closed set so every consumer matches exhaustively.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Refunded,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GuestCount {
    pub adults: u32,
    pub children: u32,
}

impl GuestCount {
    pub fn total(&self) -> u32 {
        self.adults + self.children
    }
}

impl Default for GuestCount {
    fn default() -> Self {
        Self {
            adults: 2,
            children: 0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryGuest {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GuestDetails {
    pub primary_guest: PrimaryGuest,
}

/// A confirmed reservation, the record handed back by the booking
/// collaborator once a draft is submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub user_id: String,
    pub hotel_id: i64,
    pub room_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub guest_count: GuestCount,
    pub guest_details: GuestDetails,
    #[serde(default)]
    pub special_requests: String,
    pub total_price: f64,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    /// Unique, format `SF###-YYYY`.
    pub booking_reference: String,
    #[serde(default)]
    pub cancellation_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Booking {
    pub fn nights(&self) -> i64 {
        (self.check_out_date - self.check_in_date).num_days()
    }

    /// The instant the stay begins, anchored at the standard check-in hour.
    pub fn check_in_at(&self) -> DateTime<Utc> {
        self.check_in_date
            .and_hms_opt(CHECK_IN_HOUR, 0, 0)
            .expect("static check-in hour is valid")
            .and_utc()
    }

    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.status == BookingStatus::Confirmed && self.check_in_at() >= now
    }
}

/// Payload for the create operation. Id, reference, statuses and timestamps
/// are assigned by the collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub user_id: String,
    pub hotel_id: i64,
    pub room_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub guest_count: GuestCount,
    pub guest_details: GuestDetails,
    pub special_requests: String,
    pub total_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(check_in: NaiveDate, check_out: NaiveDate) -> Booking {
        let now = Utc::now();
        Booking {
            id: 1,
            user_id: "user1".into(),
            hotel_id: 1,
            room_id: 1,
            check_in_date: check_in,
            check_out_date: check_out,
            guest_count: GuestCount::default(),
            guest_details: GuestDetails::default(),
            special_requests: String::new(),
            total_price: 361.0,
            status: BookingStatus::Confirmed,
            payment_status: PaymentStatus::Paid,
            booking_reference: "SF001-2026".into(),
            cancellation_reason: None,
            created_at: now,
            modified_at: now,
        }
    }

    #[test]
    fn nights_spans_the_stay() {
        let b = booking(
            NaiveDate::from_ymd_opt(2026, 9, 10).unwrap(),
            NaiveDate::from_ymd_opt(2026, 9, 13).unwrap(),
        );
        assert_eq!(b.nights(), 3);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&BookingStatus::Confirmed).unwrap();
        assert_eq!(json, r#""confirmed""#);
    }

    #[test]
    fn upcoming_requires_confirmed_status() {
        let mut b = booking(
            NaiveDate::from_ymd_opt(2030, 1, 10).unwrap(),
            NaiveDate::from_ymd_opt(2030, 1, 12).unwrap(),
        );
        assert!(b.is_upcoming(Utc::now()));
        b.status = BookingStatus::Cancelled;
        assert!(!b.is_upcoming(Utc::now()));
    }
}
