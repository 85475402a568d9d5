// src/metrics.rs
use chrono::{DateTime, Local};
use serde::{Serialize, Serializer};
use crate::models::timestamp::Timestamp;

/// Wire value for a recency that could not be computed.
pub const UNKNOWN_DAYS: i64 = -1;

/// Whole days elapsed since an account event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recency {
    Known(i64),
    Unknown,
}

impl Recency {
    pub fn as_days(&self) -> i64 {
        match self {
            Recency::Known(days) => *days,
            Recency::Unknown => UNKNOWN_DAYS,
        }
    }
}

impl Serialize for Recency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_days())
    }
}

/// Days between `event` and `now`, truncated.
///
/// Unknown when the event is missing, lies after `now`, or predates `created`.
/// A missing creation date puts no lower bound on the event.
pub fn days_since(now: DateTime<Local>, created: Timestamp, event: Timestamp) -> Recency {
    let Some(event) = event.known() else {
        return Recency::Unknown;
    };
    if event > now {
        return Recency::Unknown;
    }
    if let Some(created) = created.known() {
        if event < created {
            return Recency::Unknown;
        }
    }
    Recency::Known((now - event).num_hours() / 24)
}
