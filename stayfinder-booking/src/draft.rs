use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stayfinder_core::{GuestCount, GuestDetails, NewBooking};

/// Card details collected in the payment step. Only presence is checked;
/// format validation (Luhn, expiry) is deliberately not performed here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub cardholder_name: String,
    #[serde(default)]
    pub billing_address: String,
}

/// The in-progress booking accumulated across the wizard steps. Created
/// empty on flow entry, mutated step by step, submitted once, then
/// discarded.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub guest_count: GuestCount,
    pub guest_details: GuestDetails,
    pub special_requests: String,
    pub payment_info: PaymentInfo,
}

impl BookingDraft {
    pub fn nights(&self) -> i64 {
        match (self.check_in_date, self.check_out_date) {
            (Some(check_in), Some(check_out)) => (check_out - check_in).num_days(),
            _ => 0,
        }
    }

    /// Build the create payload for the booking collaborator. Callers must
    /// only do this once the flow has validated every step.
    pub fn into_new_booking(
        self,
        user_id: &str,
        hotel_id: i64,
        room_id: i64,
        total_price: f64,
    ) -> Option<NewBooking> {
        Some(NewBooking {
            user_id: user_id.to_string(),
            hotel_id,
            room_id,
            check_in_date: self.check_in_date?,
            check_out_date: self.check_out_date?,
            guest_count: self.guest_count,
            guest_details: self.guest_details,
            special_requests: self.special_requests,
            total_price,
        })
    }
}
