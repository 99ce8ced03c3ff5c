//! Wire format for timestamps.
//!
//! All timestamps cross the HTTP boundary as `YYYY-MM-DD HH:MM:SS` (UTC),
//! the format the legacy clients already speak. Database storage stays
//! `TIMESTAMPTZ`; only JSON serialization goes through these modules.

/// The fixed textual timestamp format.
pub const SQL_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Serde adapter for non-nullable timestamps.
///
/// Use with `#[serde(with = "punchlist_core::time::sql_datetime")]`.
pub mod sql_datetime {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    use super::SQL_DATETIME_FORMAT;

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(SQL_DATETIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let naive = NaiveDateTime::parse_from_str(&raw, SQL_DATETIME_FORMAT)
            .map_err(serde::de::Error::custom)?;
        Ok(naive.and_utc())
    }
}

/// Serde adapter for nullable timestamps (`Option<DateTime<Utc>>`).
///
/// Use with `#[serde(with = "punchlist_core::time::sql_datetime_opt")]`.
pub mod sql_datetime_opt {
    use chrono::{DateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    use super::sql_datetime;

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => sql_datetime::serialize(ts, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wrapper(#[serde(with = "sql_datetime")] DateTime<Utc>);

        let opt = Option::<Wrapper>::deserialize(deserializer)?;
        Ok(opt.map(|Wrapper(ts)| ts))
    }
}
