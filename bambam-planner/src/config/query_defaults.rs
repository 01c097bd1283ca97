use serde::{Deserialize, Serialize};

use crate::model::{IsoDuration, TimeMode};

/// initial values of the routing parameters before the address bar or the
/// user supplies any.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct QueryDefaults {
    pub time_mode: TimeMode,
    pub access_profile: String,
    pub egress_profile: String,
    pub beta_access_time: f64,
    pub beta_egress_time: f64,
    pub range_query: bool,
    pub range_query_duration: IsoDuration,
    pub limit_street_time: IsoDuration,
    pub ignore_transfers: bool,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            time_mode: TimeMode::Departure,
            access_profile: String::from("foot"),
            egress_profile: String::from("foot"),
            beta_access_time: 1.0,
            beta_egress_time: 1.0,
            range_query: false,
            range_query_duration: IsoDuration::minutes(120),
            limit_street_time: IsoDuration::minutes(30),
            ignore_transfers: false,
        }
    }
}
