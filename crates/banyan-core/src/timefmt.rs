//! Fixed UTC timestamp formats for persisted artifacts.
//!
//! Two renderings of the same instant: the wire form
//! (`2026-03-01T14:30:00Z`, second precision, `Z` suffix) used inside
//! records, state, and log entries, and a colon-free form
//! (`20260301T143000Z`) safe for filenames on every filesystem.

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};

/// Wire format for timestamps in records, state, and logs.
pub const UTC_SECOND_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Colon-free variant used in evidence filenames.
pub const FILE_STAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Current time truncated to whole seconds, matching the wire precision.
pub fn now_utc_second() -> DateTime<Utc> {
    let now = Utc::now();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Render a timestamp in the wire format.
pub fn format_utc(ts: &DateTime<Utc>) -> String {
    ts.format(UTC_SECOND_FORMAT).to_string()
}

/// Render a timestamp in the filesystem-safe form.
pub fn file_stamp(ts: &DateTime<Utc>) -> String {
    ts.format(FILE_STAMP_FORMAT).to_string()
}

/// Parse a wire-format timestamp back into a `DateTime<Utc>`.
pub fn parse_utc(raw: &str) -> chrono::ParseResult<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, UTC_SECOND_FORMAT).map(|naive| naive.and_utc())
}

/// Serde adapter serializing `DateTime<Utc>` in the wire format.
///
/// Use as `#[serde(with = "banyan_core::timefmt::utc_second")]`.
pub mod utc_second {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{format_utc, parse_utc};

    pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_utc(ts))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_utc(&raw).map_err(serde::de::Error::custom)
    }

    /// Variant for `Option<DateTime<Utc>>` fields.
    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer};

        use super::super::{format_utc, parse_utc};

        pub fn serialize<S>(
            ts: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match ts {
                Some(ts) => serializer.serialize_some(&format_utc(ts)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let raw = Option::<String>::deserialize(deserializer)?;
            raw.map(|s| parse_utc(&s).map_err(serde::de::Error::custom))
                .transpose()
        }
    }
}
