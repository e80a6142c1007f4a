use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use ulid::Ulid;

use crate::clock::Stamp;

/// A stored reservation. Never mutated or deleted once inserted; the
/// collection lives for the process lifetime only.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Ulid,
    pub user_id: String,
    pub start_time: Stamp,
    pub end_time: Stamp,
    /// Set at validation time; audit/display only, never used for conflicts.
    #[serde(serialize_with = "rfc3339_millis")]
    pub created_at: DateTime<Utc>,
}

fn rfc3339_millis<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Creation request body. All fields optional at the wire level so the
/// presence check owns the missing-field error, not the JSON decoder.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingRequest {
    pub user_id: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn booking_wire_shape() {
        let booking = Booking {
            id: Ulid::new(),
            user_id: "u1".into(),
            start_time: Stamp::parse("2099-01-01T10:00:00+02:00").unwrap(),
            end_time: Stamp::parse("2099-01-01T11:00:00+02:00").unwrap(),
            created_at: Utc.with_ymd_and_hms(2026, 8, 31, 12, 0, 0).unwrap(),
        };
        let json: serde_json::Value = serde_json::to_value(&booking).unwrap();

        assert_eq!(json["id"], booking.id.to_string());
        assert_eq!(json["userId"], "u1");
        // Timestamps echo the client's original text, offset and all
        assert_eq!(json["startTime"], "2099-01-01T10:00:00+02:00");
        assert_eq!(json["endTime"], "2099-01-01T11:00:00+02:00");
        assert_eq!(json["createdAt"], "2026-08-31T12:00:00.000Z");
        assert_eq!(json.as_object().unwrap().len(), 5);
    }

    #[test]
    fn request_tolerates_missing_fields() {
        let req: BookingRequest = serde_json::from_str(r#"{"userId":"u1"}"#).unwrap();
        assert_eq!(req.user_id.as_deref(), Some("u1"));
        assert!(req.start_time.is_none());
        assert!(req.end_time.is_none());

        let empty: BookingRequest = serde_json::from_str("{}").unwrap();
        assert!(empty.user_id.is_none());
    }
}
