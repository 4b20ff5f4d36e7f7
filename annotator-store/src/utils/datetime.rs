//! Timestamp serialization helpers
//!
//! - Serialize: `DateTime<Utc>` -> RFC 3339 string
//! - Deserialize: store-local `YYYY-MM-DD HH:MM:SS` (UTC), RFC 3339 string,
//!   or Unix timestamp (seconds/milliseconds detected automatically) -> `DateTime<Utc>`

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Format the document store writes `createtime` / `lastmatchtime` in.
const STORE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Serialize `DateTime<Utc>` as an RFC 3339 string
pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&dt.to_rfc3339())
}

/// Deserialize from any of the accepted timestamp shapes
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Timestamp {
        String(String),
        I64(i64),
    }

    match Timestamp::deserialize(deserializer)? {
        Timestamp::String(s) => {
            parse_timestamp(&s).ok_or_else(|| Error::custom(format!("Invalid timestamp: {s}")))
        }
        Timestamp::I64(ts) => {
            parse_unix_timestamp(ts).ok_or_else(|| Error::custom("Invalid Unix timestamp"))
        }
    }
}

/// Parse a textual timestamp, trying the store format first and RFC 3339 second.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, STORE_FORMAT)
        .map(|naive| naive.and_utc())
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc))
        })
}

/// Parse a Unix timestamp (seconds or milliseconds)
pub fn parse_unix_timestamp(ts: i64) -> Option<DateTime<Utc>> {
    // > 10^11 is treated as milliseconds
    if ts > 100_000_000_000 {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    }
}
