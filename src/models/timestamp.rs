// src/models/timestamp.rs
use chrono::{DateTime, Local, SecondsFormat};
use serde::{Serialize, Serializer};

/// Wire form of a date cell that could not be parsed. Consumers read it as "unknown", not "epoch".
pub const ZERO_TIMESTAMP: &str = "0001-01-01T00:00:00Z";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    Known(DateTime<Local>),
    Unknown,
}

impl Timestamp {
    pub fn known(&self) -> Option<DateTime<Local>> {
        match self {
            Timestamp::Known(dt) => Some(*dt),
            Timestamp::Unknown => None,
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Timestamp::Known(dt) => serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Timestamp::Unknown => serializer.serialize_str(ZERO_TIMESTAMP),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn unknown_serializes_as_zero_instant() {
        let json = serde_json::to_string(&Timestamp::Unknown).unwrap();
        assert_eq!(json, format!("\"{ZERO_TIMESTAMP}\""));
    }

    #[test]
    fn utc_offset_is_written_as_z() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap().with_timezone(&Local);
        let json = serde_json::to_value(Timestamp::Known(dt)).unwrap();
        let text = json.as_str().unwrap();
        if dt.offset().local_minus_utc() == 0 {
            assert_eq!(text, "2024-01-02T00:00:00Z");
        } else {
            assert!(!text.ends_with('Z'));
        }
        assert!(!text.contains('.'));
    }

    #[test]
    fn known_serializes_as_rfc3339() {
        let dt = Local.with_ymd_and_hms(2024, 1, 2, 12, 0, 0).earliest().unwrap();
        let json = serde_json::to_value(Timestamp::Known(dt)).unwrap();
        let parsed = DateTime::parse_from_rfc3339(json.as_str().unwrap()).unwrap();
        assert_eq!(parsed, dt);
    }
}
