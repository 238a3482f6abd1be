//! Booking Model

use chrono::{DateTime, Local, NaiveDate};
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Booking entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "_id")]
    pub id: String,
    /// Customer who placed the booking
    #[serde(rename = "createdBy", default)]
    pub created_by: BookingCustomer,
    /// Booked activity reference
    #[serde(rename = "activityId", default)]
    pub activity: ActivityRef,
    #[serde(rename = "totalMembers", default)]
    pub total_members: u32,
    /// Booking time as sent by the server (RFC 3339)
    #[serde(rename = "bookedTime")]
    pub booked_time: String,
    pub status: BookingStatus,
    #[serde(default)]
    pub is_deleted: bool,
}

impl Booking {
    /// Calendar day of `booked_time` in the local timezone
    ///
    /// `None` when the server sent an unparseable timestamp.
    pub fn booked_local_day(&self) -> Option<NaiveDate> {
        DateTime::parse_from_rfc3339(&self.booked_time)
            .ok()
            .map(|t| t.with_timezone(&Local).date_naive())
    }

    /// Short display id (last six characters, as rendered in the list)
    pub fn short_id(&self) -> &str {
        let start = self
            .id
            .char_indices()
            .rev()
            .nth(5)
            .map_or(0, |(i, _)| i);
        &self.id[start..]
    }
}

/// Customer details embedded in a booking
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingCustomer {
    #[serde(default)]
    pub business_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
}

/// Activity reference embedded in a booking
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityRef {
    #[serde(default)]
    pub title: String,
}

/// Booking status
///
/// Tri-state on the wire: boolean `true` means a new booking, while
/// completed/cancelled are strings. Serde is hand-written to keep that
/// shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    New,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Value shown in the status selector
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::New => "new booking",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Parse a selector value back into a status
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "new booking" => Some(BookingStatus::New),
            "completed" => Some(BookingStatus::Completed),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }
}

impl Serialize for BookingStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BookingStatus::New => serializer.serialize_bool(true),
            BookingStatus::Completed => serializer.serialize_str("completed"),
            BookingStatus::Cancelled => serializer.serialize_str("cancelled"),
        }
    }
}

impl<'de> Deserialize<'de> for BookingStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::Bool(_) => Ok(BookingStatus::New),
            serde_json::Value::String(s) => match s.as_str() {
                "completed" => Ok(BookingStatus::Completed),
                "cancelled" => Ok(BookingStatus::Cancelled),
                other => Err(de::Error::unknown_variant(other, &["completed", "cancelled"])),
            },
            _ => Err(de::Error::custom("booking status must be a bool or a string")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(status: &str) -> String {
        format!(
            r#"{{"_id":"book-000042","createdBy":{{"business_name":"Acme Tours","email":"ops@acme.in","phone_number":"9876500001"}},"activityId":{{"title":"River Rafting"}},"totalMembers":4,"bookedTime":"2025-03-14T10:00:00+05:30","status":{status}}}"#
        )
    }

    #[test]
    fn test_status_wire_shape() {
        let booking: Booking = serde_json::from_str(&sample("true")).unwrap();
        assert_eq!(booking.status, BookingStatus::New);

        let booking: Booking = serde_json::from_str(&sample(r#""completed""#)).unwrap();
        assert_eq!(booking.status, BookingStatus::Completed);

        let booking: Booking = serde_json::from_str(&sample(r#""cancelled""#)).unwrap();
        assert_eq!(booking.status, BookingStatus::Cancelled);

        assert_eq!(serde_json::to_value(BookingStatus::New).unwrap(), serde_json::json!(true));
        assert_eq!(
            serde_json::to_value(BookingStatus::Completed).unwrap(),
            serde_json::json!("completed")
        );
    }

    #[test]
    fn test_status_rejects_unknown_string() {
        assert!(serde_json::from_str::<Booking>(&sample(r#""archived""#)).is_err());
    }

    #[test]
    fn test_booked_local_day_roundtrip() {
        // Build the wire timestamp from a local datetime so the expected day
        // is timezone-independent.
        let local = Local.with_ymd_and_hms(2025, 3, 14, 10, 0, 0).unwrap();
        let mut booking: Booking = serde_json::from_str(&sample("true")).unwrap();
        booking.booked_time = local.to_rfc3339();

        assert_eq!(
            booking.booked_local_day(),
            Some(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap())
        );
    }

    #[test]
    fn test_booked_local_day_unparseable() {
        let mut booking: Booking = serde_json::from_str(&sample("true")).unwrap();
        booking.booked_time = "not a timestamp".to_string();
        assert_eq!(booking.booked_local_day(), None);
    }

    #[test]
    fn test_short_id() {
        let booking: Booking = serde_json::from_str(&sample("true")).unwrap();
        assert_eq!(booking.short_id(), "000042");
    }

    #[test]
    fn test_short_id_handles_multibyte_and_short_ids() {
        let mut booking: Booking = serde_json::from_str(&sample("true")).unwrap();

        booking.id = "预订-00042".to_string();
        assert_eq!(booking.short_id(), "-00042");

        booking.id = "预订编号".to_string();
        assert_eq!(booking.short_id(), "预订编号");

        booking.id = "b1".to_string();
        assert_eq!(booking.short_id(), "b1");
    }
}
