//! Inspection booking domain model

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hourly inspection slots offered on every day
pub const TIME_SLOTS: [&str; 9] = [
    "9:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "1:00 PM", "2:00 PM", "3:00 PM", "4:00 PM",
    "5:00 PM",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            _ => None,
        }
    }
}

/// A scheduled inspection of a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub property_id: String,
    /// Copied from the catalog when the booking is made
    pub property_name: String,
    pub user_id: String,
    pub user_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date: NaiveDate,
    pub time: String,
    pub notes: String,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// What the booking form submits. Date and time are optional here because
/// the form can be submitted without them; the service rejects that.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingRequest {
    pub property_id: String,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    /// Contact overrides, defaulting to the session user's profile
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

/// The bookable dates: the `days` days following `today`, stopping at the
/// end of the calendar
pub fn available_dates(today: NaiveDate, days: u32) -> Vec<NaiveDate> {
    (1..=i64::from(days))
        .map_while(|offset| today.checked_add_signed(Duration::days(offset)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_dates_start_tomorrow() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
        let dates = available_dates(today, 30);

        assert_eq!(dates.len(), 30);
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2024, 2, 28).unwrap());
        assert_eq!(dates[2], NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert!(!dates.contains(&today));
    }

    #[test]
    fn test_available_dates_stop_at_calendar_end() {
        let dates = available_dates(NaiveDate::MAX - Duration::days(2), 30);
        assert_eq!(dates.len(), 2);
        assert_eq!(dates.last(), Some(&NaiveDate::MAX));
    }

    #[test]
    fn test_booking_status_strings() {
        assert_eq!(BookingStatus::parse("pending"), Some(BookingStatus::Pending));
        assert_eq!(BookingStatus::Confirmed.as_str(), "confirmed");
        assert_eq!(BookingStatus::parse("cancelled"), None);
    }
}
