//! Shapes shared by several feature areas

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

/// Payload of a successful call whose shape the caller does not care about
pub type RawPayload = Value;

/// Timestamps from the server come either as RFC 3339 or as naive ISO 8601
/// (`2024-05-01T10:00:00.123456`), which is read as UTC.
pub mod timestamp {
    use super::{DateTime, Deserialize, Deserializer, NaiveDateTime, Serializer, Utc};

    pub(crate) fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
            .ok()
            .map(|naive| naive.and_utc())
    }

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
    }

    /// Same rules for `Option<DateTime<Utc>>`; `null` and missing map to `None`
    pub mod option {
        use super::{parse, DateTime, Deserialize, Deserializer, Serializer, Utc};

        #[allow(clippy::ref_option)]
        pub fn serialize<S: Serializer>(
            value: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(dt) => serializer.serialize_str(&dt.to_rfc3339()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                Some(raw) => parse(&raw)
                    .map(Some)
                    .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}"))),
                None => Ok(None),
            }
        }
    }

    /// Same rules applied to every element of a list
    pub mod list {
        use super::{parse, DateTime, Deserialize, Deserializer, Serializer, Utc};
        use serde::ser::SerializeSeq;

        pub fn serialize<S: Serializer>(
            values: &[DateTime<Utc>],
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(values.len()))?;
            for dt in values {
                seq.serialize_element(&dt.to_rfc3339())?;
            }
            seq.end()
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Vec<DateTime<Utc>>, D::Error> {
            Vec::<String>::deserialize(deserializer)?
                .into_iter()
                .map(|raw| {
                    parse(&raw)
                        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Stamped {
        #[serde(with = "timestamp")]
        at: DateTime<Utc>,
        #[serde(default, with = "timestamp::option")]
        maybe: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_naive_timestamp_is_read_as_utc() {
        let stamped: Stamped =
            serde_json::from_str(r#"{"at":"2024-05-01T10:30:00.123456","maybe":null}"#).unwrap();
        assert_eq!(stamped.at.year(), 2024);
        assert_eq!(stamped.at.hour(), 10);
        assert!(stamped.maybe.is_none());
    }

    #[test]
    fn test_rfc3339_timestamp_is_normalized() {
        let stamped: Stamped = serde_json::from_str(
            r#"{"at":"2024-05-01T10:30:00+03:00","maybe":"2024-05-02T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(stamped.at.hour(), 7);
        assert_eq!(stamped.maybe.unwrap().day(), 2);
    }

    #[test]
    fn test_missing_optional_timestamp() {
        let stamped: Stamped = serde_json::from_str(r#"{"at":"2024-05-01 08:00:00"}"#).unwrap();
        assert!(stamped.maybe.is_none());
    }

    #[derive(Debug, Deserialize)]
    struct Series {
        #[serde(default, with = "timestamp::list")]
        dates: Vec<DateTime<Utc>>,
    }

    #[test]
    fn test_timestamp_list_mixes_naive_and_offset_forms() {
        let series: Series = serde_json::from_str(
            r#"{"dates":["2024-01-15T00:00:00","2024-04-15T09:00:00+03:00"]}"#,
        )
        .unwrap();
        assert_eq!(series.dates.len(), 2);
        assert_eq!(series.dates[0].month(), 1);
        assert_eq!(series.dates[1].hour(), 6);

        let empty: Series = serde_json::from_str("{}").unwrap();
        assert!(empty.dates.is_empty());
        assert!(serde_json::from_str::<Series>(r#"{"dates":["soon"]}"#).is_err());
    }

    #[test]
    fn test_garbage_timestamp_is_rejected() {
        assert!(serde_json::from_str::<Stamped>(r#"{"at":"yesterday"}"#).is_err());
    }
}
