use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Booking status in the lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

/// A reservation of one flat for a date range.
///
/// Bookings are never deleted; cancellation flips the status and the record
/// stays in the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: u32,
    pub flat_id: u32,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    /// First night of the stay
    pub check_in: NaiveDate,
    /// Departure day, exclusive: the flat is free for a new check-in that day
    pub check_out: NaiveDate,
    pub total_guests: u32,
    pub total_price_cents: i32,
    pub booking_date: DateTime<Utc>,
    pub status: BookingStatus,
    pub special_requests: String,
}

impl Booking {
    /// Number of nights covered by the stay
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == BookingStatus::Confirmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Confirmed).unwrap(),
            "\"CONFIRMED\""
        );
        assert_eq!(
            serde_json::to_string(&BookingStatus::Cancelled).unwrap(),
            "\"CANCELLED\""
        );

        let status: BookingStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(status, BookingStatus::Cancelled);
    }

    #[test]
    fn test_nights() {
        let booking = Booking {
            id: 1,
            flat_id: 7,
            guest_name: "Ada Lovelace".to_string(),
            guest_email: "ada@example.com".to_string(),
            guest_phone: "+44 20 7946 0000".to_string(),
            check_in: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2024, 7, 4).unwrap(),
            total_guests: 2,
            total_price_cents: 54000,
            booking_date: Utc::now(),
            status: BookingStatus::Confirmed,
            special_requests: String::new(),
        };
        assert_eq!(booking.nights(), 3);
        assert!(booking.is_confirmed());
    }
}
