use chrono::{DateTime, Duration, Utc};

use stayfinder_core::{Booking, BookingStatus, ServiceError};

/// Free cancellation closes this many hours before the check-in instant.
pub const CANCELLATION_WINDOW_HOURS: i64 = 24;

/// A booking may be cancelled only while confirmed and strictly more than
/// the window ahead of check-in.
pub fn can_cancel(status: BookingStatus, check_in_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    status == BookingStatus::Confirmed
        && check_in_at - now > Duration::hours(CANCELLATION_WINDOW_HOURS)
}

/// Same decision as [`can_cancel`] but with the reason spelled out, for the
/// collaborator's cancel operation.
pub fn ensure_cancellable(booking: &Booking, now: DateTime<Utc>) -> Result<(), ServiceError> {
    match booking.status {
        BookingStatus::Cancelled => Err(ServiceError::Validation(format!(
            "Booking {} is already cancelled",
            booking.id
        ))),
        BookingStatus::Pending => Err(ServiceError::Validation(format!(
            "Booking {} is not confirmed",
            booking.id
        ))),
        BookingStatus::Confirmed => {
            if booking.check_in_at() - now > Duration::hours(CANCELLATION_WINDOW_HOURS) {
                Ok(())
            } else {
                Err(ServiceError::Validation(format!(
                    "Booking {} is within {CANCELLATION_WINDOW_HOURS} hours of check-in",
                    booking.id
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancellable_just_outside_the_window() {
        let now = Utc::now();
        let check_in = now + Duration::hours(24) + Duration::minutes(1);
        assert!(can_cancel(BookingStatus::Confirmed, check_in, now));
    }

    #[test]
    fn not_cancellable_just_inside_the_window() {
        let now = Utc::now();
        let check_in = now + Duration::hours(23) + Duration::minutes(59);
        assert!(!can_cancel(BookingStatus::Confirmed, check_in, now));
    }

    #[test]
    fn exactly_at_the_boundary_is_too_late() {
        let now = Utc::now();
        let check_in = now + Duration::hours(24);
        assert!(!can_cancel(BookingStatus::Confirmed, check_in, now));
    }

    #[test]
    fn only_confirmed_bookings_cancel() {
        let now = Utc::now();
        let check_in = now + Duration::days(7);
        assert!(!can_cancel(BookingStatus::Cancelled, check_in, now));
        assert!(!can_cancel(BookingStatus::Pending, check_in, now));
    }
}
