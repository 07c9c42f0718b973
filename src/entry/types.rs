//! Core data types for waste entries
//!
//! - `EntryId`: opaque identity, the only key used for deletion
//! - `WasteEntry`: one logged disposal event
//!
//! The wire format is lenient on the way in: ids may be strings or integers,
//! days may be ISO or US-style dates, timestamps may be epoch milliseconds or
//! ISO-8601 strings. On the way out everything is normalized.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Unique identifier of an entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<i64> for EntryId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for EntryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => EntryId(s),
            RawId::Signed(n) => EntryId(n.to_string()),
            RawId::Unsigned(n) => EntryId(n.to_string()),
        })
    }
}

/// One recorded waste item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WasteEntry {
    /// Stable identity for the entry's lifetime
    pub id: EntryId,
    /// User-supplied label
    pub item: String,
    /// Day bucket
    #[serde(with = "day_format")]
    pub date: NaiveDate,
    /// Creation instant, Unix milliseconds
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: i64,
}

impl WasteEntry {
    pub fn new(id: impl Into<EntryId>, item: impl Into<String>, date: NaiveDate, timestamp: i64) -> Self {
        Self {
            id: id.into(),
            item: item.into(),
            date,
            timestamp,
        }
    }
}

impl From<String> for EntryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Format used when a day is shown to users
pub const DISPLAY_DAY_FORMAT: &str = "%m/%d/%Y";

/// Accepted day formats, tried in order. `%m`/`%d` also accept unpadded values.
const DAY_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Parse a day label in any accepted format
pub fn parse_day(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    DAY_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
}

/// Parse a timestamp string (RFC 3339, or naive ISO-8601 read as UTC)
pub fn parse_timestamp(input: &str) -> Option<i64> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.timestamp_millis());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map(|naive| naive.and_utc().timestamp_millis())
        .or_else(|| input.parse::<i64>().ok())
}

mod day_format {
    use super::parse_day;
    use chrono::NaiveDate;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format("%Y-%m-%d"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_day(&raw).ok_or_else(|| D::Error::custom(format!("unrecognized date: {raw}")))
    }
}

fn deserialize_timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Millis(i64),
        Fractional(f64),
        Text(String),
    }

    match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Millis(ms) => Ok(ms),
        RawTimestamp::Fractional(ms) => Ok(ms as i64),
        RawTimestamp::Text(s) => {
            parse_timestamp(&s).ok_or_else(|| D::Error::custom(format!("unrecognized timestamp: {s}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_day_formats() {
        assert_eq!(parse_day("2026-10-18"), Some(day(2026, 10, 18)));
        assert_eq!(parse_day("10/18/2026"), Some(day(2026, 10, 18)));
        assert_eq!(parse_day("1/5/2026"), Some(day(2026, 1, 5)));
        assert_eq!(parse_day("01/05/2026"), Some(day(2026, 1, 5)));
        assert_eq!(parse_day("yesterday"), None);
    }

    #[test]
    fn test_padded_and_unpadded_labels_are_the_same_day() {
        assert_eq!(parse_day("3/7/2026"), parse_day("03/07/2026"));
    }

    #[test]
    fn test_parse_timestamp() {
        assert_eq!(parse_timestamp("1970-01-01T00:00:01Z"), Some(1000));
        assert_eq!(parse_timestamp("1970-01-01T00:00:01.500"), Some(1500));
        assert_eq!(parse_timestamp("1970-01-01 00:00:02"), Some(2000));
        assert_eq!(parse_timestamp("42"), Some(42));
        assert_eq!(parse_timestamp("soon"), None);
    }

    #[test]
    fn test_deserialize_server_entry() {
        let json = r#"{"id": 7, "item": "Banana peel", "date": "10/18/2026", "timestamp": 1760781600000}"#;
        let entry: WasteEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.id, EntryId::new("7"));
        assert_eq!(entry.item, "Banana peel");
        assert_eq!(entry.date, day(2026, 10, 18));
        assert_eq!(entry.timestamp, 1_760_781_600_000);
    }

    #[test]
    fn test_deserialize_iso_timestamp_and_string_id() {
        let json = r#"{"id": "abc", "item": "cup", "date": "2026-10-18", "timestamp": "2026-10-18T09:00:00Z"}"#;
        let entry: WasteEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.id.as_str(), "abc");
        assert_eq!(entry.timestamp, 1_792_314_000_000);
    }

    #[test]
    fn test_deserialize_rejects_bad_date() {
        let json = r#"{"id": 1, "item": "cup", "date": "someday", "timestamp": 0}"#;
        assert!(serde_json::from_str::<WasteEntry>(json).is_err());
    }

    #[test]
    fn test_serialize_normalizes() {
        let entry = WasteEntry::new(12_i64, "CUP", day(2026, 1, 5), 99);
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["id"], "12");
        assert_eq!(value["date"], "2026-01-05");
        assert_eq!(value["timestamp"], 99);
    }
}
