use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::fields::FormFields;

/// Identity of a stored response
///
/// New records get a UUIDv7 (millisecond timestamp plus a monotonic counter
/// and random bits), so ids stay distinct for appends within the same tick.
/// Payloads written by older front ends carry a numeric id; those are kept
/// exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseId {
    Text(String),
    Number(serde_json::Number),
}

impl ResponseId {
    /// Generate a fresh id
    pub fn generate() -> Self {
        ResponseId::Text(Uuid::now_v7().to_string())
    }

    /// Whether this id renders as `candidate`
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            ResponseId::Text(s) => s == candidate,
            ResponseId::Number(n) => n.to_string() == candidate,
        }
    }
}

impl std::fmt::Display for ResponseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseId::Text(s) => f.write_str(s),
            ResponseId::Number(n) => write!(f, "{}", n),
        }
    }
}

/// One persisted survey submission
///
/// Immutable once appended: the store never updates a record in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub id: ResponseId,

    /// Creation time, stored as ISO-8601 UTC with millisecond precision
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,

    /// Submitted answers; older payloads without a `data` object load as empty
    #[serde(default)]
    pub data: FormFields,
}

impl ResponseRecord {
    /// Create a record with a fresh id and the current time
    pub fn new(data: FormFields) -> Self {
        Self::with_timestamp(data, Utc::now())
    }

    /// Create a record with a fresh id at `timestamp`
    ///
    /// The timestamp is truncated to milliseconds so the record compares
    /// equal to its own deserialized form.
    pub fn with_timestamp(data: FormFields, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: ResponseId::generate(),
            timestamp: timestamp.trunc_subsecs(3),
            data,
        }
    }
}

mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
