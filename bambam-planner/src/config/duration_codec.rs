//! (de)serializers for optional durations written in human-readable form,
//! such as "30s" or "2m".
use std::time::Duration;

use serde::{de::Error, Deserialize, Deserializer, Serializer};

pub fn deserialize_optional_duration<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    let duration_str: Option<String> = Option::deserialize(deserializer)?;
    match duration_str {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => humantime::parse_duration(s.trim())
            .map(Some)
            .map_err(|e| D::Error::custom(format!("Invalid duration '{s}': {e}"))),
    }
}

pub fn serialize_optional_duration<S>(
    value: &Option<Duration>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        None => serializer.serialize_none(),
        Some(d) => serializer.collect_str(&humantime::format_duration(*d)),
    }
}
