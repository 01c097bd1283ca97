use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::{GeoPoint, IsoDuration, TimeMode};

/// a partial update to a [`super::QueryState`]. absent fields leave the state
/// untouched. for the nullable fields (the two endpoints and the auxiliary
/// distance) `Some(None)` clears the value, which in JSON is written as an
/// explicit `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryPatch {
    #[serde(
        default,
        deserialize_with = "deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub origin: Option<Option<GeoPoint>>,
    #[serde(
        default,
        deserialize_with = "deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub destination: Option<Option<GeoPoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_or_arrival_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_mode: Option<TimeMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub egress_profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beta_access_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beta_egress_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_query: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_query_duration: Option<IsoDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_street_time: Option<IsoDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_transfers: Option<bool>,
    #[serde(
        default,
        deserialize_with = "deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub auxiliary_distance: Option<Option<f64>>,
}

impl QueryPatch {
    pub fn endpoints(origin: GeoPoint, destination: GeoPoint) -> QueryPatch {
        QueryPatch {
            origin: Some(Some(origin)),
            destination: Some(Some(destination)),
            ..Default::default()
        }
    }

    pub fn destination(destination: Option<GeoPoint>) -> QueryPatch {
        QueryPatch {
            destination: Some(destination),
            ..Default::default()
        }
    }

    pub fn auxiliary_distance(distance: Option<f64>) -> QueryPatch {
        QueryPatch {
            auxiliary_distance: Some(distance),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &QueryPatch::default()
    }
}

/// an absent field is handled by `#[serde(default)]`, so anything reaching
/// this function was present in the input, even if it was `null`.
fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
