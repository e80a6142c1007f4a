use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Serialize, Serializer};

/// Naive formats accepted in addition to RFC 3339. Inputs without an offset
/// are interpreted as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// A parsed timestamp: the normalized UTC instant plus the text it came from.
///
/// Comparisons use only the instant. The originating text is kept so a stored
/// booking echoes back exactly what the client sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    instant: DateTime<Utc>,
    raw: String,
}

impl Stamp {
    /// Parse a textual timestamp. Returns `None` when the text matches no
    /// recognized date-time format.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Some(Self {
                instant: dt.with_timezone(&Utc),
                raw: text.to_string(),
            });
        }
        for fmt in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, fmt) {
                return Some(Self {
                    instant: Utc.from_utc_datetime(&naive),
                    raw: text.to_string(),
                });
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Some(Self {
                instant: Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)),
                raw: text.to_string(),
            });
        }
        None
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_before(&self, other: &Stamp) -> bool {
        self.instant < other.instant
    }

    pub fn is_after(&self, other: &Stamp) -> bool {
        self.instant > other.instant
    }

    pub fn is_same_or_before(&self, other: &Stamp) -> bool {
        self.instant <= other.instant
    }

    pub fn is_same_or_after(&self, other: &Stamp) -> bool {
        self.instant >= other.instant
    }

    /// True if this instant lies strictly inside `(start, end)` — open at
    /// both ends, so an instant equal to either boundary is outside.
    pub fn is_strictly_within(&self, start: &Stamp, end: &Stamp) -> bool {
        start.instant < self.instant && self.instant < end.instant
    }
}

impl Serialize for Stamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp(text: &str) -> Stamp {
        Stamp::parse(text).unwrap()
    }

    #[test]
    fn parse_rfc3339_utc() {
        let s = stamp("2099-01-01T10:00:00Z");
        assert_eq!(s.raw(), "2099-01-01T10:00:00Z");
        assert_eq!(s.instant(), Utc.with_ymd_and_hms(2099, 1, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn parse_rfc3339_offset_normalized() {
        // +02:00 and Z spellings of the same instant compare equal
        let offset = stamp("2099-01-01T10:00:00+02:00");
        let utc = stamp("2099-01-01T08:00:00Z");
        assert_eq!(offset.instant(), utc.instant());
        assert_ne!(offset.raw(), utc.raw());
    }

    #[test]
    fn parse_naive_as_utc() {
        let s = stamp("2099-01-01T10:00:00");
        assert_eq!(s.instant(), Utc.with_ymd_and_hms(2099, 1, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn parse_space_separated() {
        let s = stamp("2099-01-01 10:30:00");
        assert_eq!(s.instant(), Utc.with_ymd_and_hms(2099, 1, 1, 10, 30, 0).unwrap());
    }

    #[test]
    fn parse_minutes_only() {
        let s = stamp("2099-01-01T10:30");
        assert_eq!(s.instant(), Utc.with_ymd_and_hms(2099, 1, 1, 10, 30, 0).unwrap());
    }

    #[test]
    fn parse_date_only_is_midnight() {
        let s = stamp("2099-01-01");
        assert_eq!(s.instant(), Utc.with_ymd_and_hms(2099, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn parse_fractional_seconds() {
        let s = stamp("2099-01-01T10:00:00.500");
        assert!(s.is_after(&stamp("2099-01-01T10:00:00")));
    }

    #[test]
    fn parse_invalid() {
        assert!(Stamp::parse("not-a-date").is_none());
        assert!(Stamp::parse("").is_none());
        assert!(Stamp::parse("   ").is_none());
        assert!(Stamp::parse("2099-13-40").is_none());
        assert!(Stamp::parse("10:00:00").is_none());
    }

    #[test]
    fn ordering_predicates() {
        let a = stamp("2099-01-01T10:00:00Z");
        let b = stamp("2099-01-01T11:00:00Z");
        let a2 = stamp("2099-01-01T10:00:00Z");

        assert!(a.is_before(&b));
        assert!(b.is_after(&a));
        assert!(!a.is_before(&a2));
        assert!(a.is_same_or_before(&a2));
        assert!(a.is_same_or_after(&a2));
        assert!(a.is_same_or_before(&b));
        assert!(!a.is_same_or_after(&b));
    }

    #[test]
    fn strictly_within_open_boundaries() {
        let start = stamp("2099-01-01T10:00:00Z");
        let end = stamp("2099-01-01T11:00:00Z");

        assert!(stamp("2099-01-01T10:30:00Z").is_strictly_within(&start, &end));
        // Boundary instants are outside the open interval
        assert!(!start.is_strictly_within(&start, &end));
        assert!(!end.is_strictly_within(&start, &end));
        assert!(!stamp("2099-01-01T09:00:00Z").is_strictly_within(&start, &end));
    }

    #[test]
    fn serializes_as_original_text() {
        let s = stamp("2099-01-01T10:00:00+02:00");
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "\"2099-01-01T10:00:00+02:00\"");
    }
}
