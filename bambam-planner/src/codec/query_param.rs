//! query parameter names of the public transit routing API.

pub const POINT: &str = "point";
pub const EARLIEST_DEPARTURE_TIME: &str = "pt.earliest_departure_time";
pub const ARRIVE_BY: &str = "pt.arrive_by";
/// enables a profile (range) query, returning a window of departures
pub const PROFILE_QUERY: &str = "pt.profile";
pub const PROFILE_DURATION: &str = "pt.profile_duration";
pub const ACCESS_PROFILE: &str = "pt.access_profile";
pub const BETA_ACCESS_TIME: &str = "pt.beta_access_time";
pub const EGRESS_PROFILE: &str = "pt.egress_profile";
pub const BETA_EGRESS_TIME: &str = "pt.beta_egress_time";
pub const LIMIT_STREET_TIME: &str = "pt.limit_street_time";
pub const IGNORE_TRANSFERS: &str = "pt.ignore_transfers";
pub const LOCALE: &str = "locale";
pub const PROFILE: &str = "profile";
