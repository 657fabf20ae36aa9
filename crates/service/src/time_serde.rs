//! ISO-8601 UTC timestamps with millisecond precision (`2023-01-01T00:00:00.000Z`).

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;

    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Serialize, Deserialize)]
    struct Stamp {
        #[serde(with = "crate::time_serde")]
        at: DateTime<Utc>,
    }

    #[test]
    fn formats_with_millis_and_zulu_suffix() {
        let at = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let json = serde_json::to_string(&Stamp { at }).unwrap();
        assert_eq!(json, r#"{"at":"2023-01-01T00:00:00.000Z"}"#);
    }

    #[test]
    fn accepts_offset_timestamps() {
        let s: Stamp = serde_json::from_str(r#"{"at":"2023-01-01T07:00:00.000+07:00"}"#).unwrap();
        assert_eq!(s.at, Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap());
    }
}
