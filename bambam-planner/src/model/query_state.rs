use std::fmt::Debug;

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use super::{query_field, GeoPoint, IsoDuration, QueryPatch, TimeMode};
use crate::config::QueryDefaults;

/// the routing intent of the user. owned by the
/// [`crate::coordinator::Orchestrator`] and only ever modified through
/// [`QueryState::apply`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryState {
    pub origin: Option<GeoPoint>,
    pub destination: Option<GeoPoint>,
    pub departure_or_arrival_time: DateTime<Utc>,
    pub time_mode: TimeMode,
    pub access_profile: String,
    pub egress_profile: String,
    pub beta_access_time: f64,
    pub beta_egress_time: f64,
    pub range_query: bool,
    pub range_query_duration: IsoDuration,
    pub limit_street_time: IsoDuration,
    pub ignore_transfers: bool,
    /// not a routing parameter. see [`crate::coordinator::AuxiliaryTrigger`].
    pub auxiliary_distance: Option<f64>,
}

/// summarizes which kinds of fields a [`QueryPatch`] actually modified.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QueryChange {
    pub routing: bool,
    pub auxiliary: bool,
}

impl QueryChange {
    pub fn any(&self) -> bool {
        self.routing || self.auxiliary
    }
}

impl QueryState {
    pub fn new(time: DateTime<Utc>, defaults: &QueryDefaults) -> QueryState {
        QueryState {
            origin: None,
            destination: None,
            departure_or_arrival_time: truncate_to_seconds(time),
            time_mode: defaults.time_mode,
            access_profile: defaults.access_profile.clone(),
            egress_profile: defaults.egress_profile.clone(),
            beta_access_time: defaults.beta_access_time,
            beta_egress_time: defaults.beta_egress_time,
            range_query: defaults.range_query,
            range_query_duration: defaults.range_query_duration.clone(),
            limit_street_time: defaults.limit_street_time.clone(),
            ignore_transfers: defaults.ignore_transfers,
            auxiliary_distance: None,
        }
    }

    /// a query can only be sent to the router once both endpoints are known.
    pub fn is_complete(&self) -> bool {
        self.origin.is_some() && self.destination.is_some()
    }

    /// merges a patch into this state, reporting what changed. timestamps are
    /// truncated to whole seconds, the resolution of the query encoding.
    /// fields that would not survive a round trip through a link are skipped
    /// with a warning, see [`query_field`].
    pub fn apply(&mut self, patch: &QueryPatch) -> QueryChange {
        let time = patch.departure_or_arrival_time.map(truncate_to_seconds);
        let origin = checked("origin", &patch.origin, valid_endpoint);
        let destination = checked("destination", &patch.destination, valid_endpoint);
        let access_profile = checked("access_profile", &patch.access_profile, |v| {
            query_field::profile_name(v)
        });
        let egress_profile = checked("egress_profile", &patch.egress_profile, |v| {
            query_field::profile_name(v)
        });
        let beta_access_time = checked("beta_access_time", &patch.beta_access_time, |v| {
            query_field::beta(*v)
        });
        let beta_egress_time = checked("beta_egress_time", &patch.beta_egress_time, |v| {
            query_field::beta(*v)
        });
        let routing = [
            assign(&mut self.origin, &origin),
            assign(&mut self.destination, &destination),
            assign(&mut self.departure_or_arrival_time, &time),
            assign(&mut self.time_mode, &patch.time_mode),
            assign(&mut self.access_profile, &access_profile),
            assign(&mut self.egress_profile, &egress_profile),
            assign(&mut self.beta_access_time, &beta_access_time),
            assign(&mut self.beta_egress_time, &beta_egress_time),
            assign(&mut self.range_query, &patch.range_query),
            assign(&mut self.range_query_duration, &patch.range_query_duration),
            assign(&mut self.limit_street_time, &patch.limit_street_time),
            assign(&mut self.ignore_transfers, &patch.ignore_transfers),
        ]
        .into_iter()
        .any(|changed| changed);
        let auxiliary = assign(&mut self.auxiliary_distance, &patch.auxiliary_distance);
        QueryChange { routing, auxiliary }
    }
}

fn assign<T: PartialEq + Clone>(target: &mut T, value: &Option<T>) -> bool {
    match value {
        Some(v) if v != &*target => {
            *target = v.clone();
            true
        }
        _ => false,
    }
}

fn checked<T, U>(
    field: &str,
    value: &Option<T>,
    rule: impl Fn(&T) -> Result<U, String>,
) -> Option<U>
where
    T: Debug,
{
    value.as_ref().and_then(|v| match rule(v) {
        Ok(valid) => Some(valid),
        Err(e) => {
            log::warn!("ignoring {field} {v:?}: {e}");
            None
        }
    })
}

fn valid_endpoint(point: &Option<GeoPoint>) -> Result<Option<GeoPoint>, String> {
    match point {
        Some(p) => GeoPoint::new(p.lat, p.lon)
            .map(Some)
            .map_err(|e| e.to_string()),
        None => Ok(None),
    }
}

fn truncate_to_seconds(time: DateTime<Utc>) -> DateTime<Utc> {
    time.with_nanosecond(0).unwrap_or(time)
}

#[cfg(test)]
mod test {
    use super::QueryState;
    use crate::config::QueryDefaults;
    use crate::model::{GeoPoint, QueryPatch, TimeMode};
    use chrono::{DateTime, Utc};

    fn mock_time() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-05-02T08:15:30.250Z")
            .expect("test invariant failed")
            .with_timezone(&Utc)
    }

    fn mock_point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).expect("test invariant failed")
    }

    #[test]
    fn test_defaults() {
        let state = QueryState::new(mock_time(), &QueryDefaults::default());
        assert!(!state.is_complete());
        assert_eq!(state.access_profile, "foot");
        assert_eq!(state.range_query_duration.as_str(), "PT120M");
        assert_eq!(state.limit_street_time.as_str(), "PT30M");
        assert_eq!(state.time_mode, TimeMode::Departure);
        assert_eq!(state.departure_or_arrival_time.timestamp_subsec_nanos(), 0);
    }

    #[test]
    fn test_apply_reports_changes() {
        let mut state = QueryState::new(mock_time(), &QueryDefaults::default());
        let patch = QueryPatch::endpoints(mock_point(1.0, 2.0), mock_point(3.0, 4.0));

        let change = state.apply(&patch);
        assert!(change.routing);
        assert!(!change.auxiliary);
        assert!(state.is_complete());

        // re-applying an identical patch changes nothing
        let change = state.apply(&patch);
        assert!(!change.any());

        let change = state.apply(&QueryPatch::auxiliary_distance(Some(500.0)));
        assert!(!change.routing);
        assert!(change.auxiliary);
    }

    #[test]
    fn test_apply_skips_unencodable_fields() {
        let mut state = QueryState::new(mock_time(), &QueryDefaults::default());
        let change = state.apply(&QueryPatch {
            origin: Some(Some(GeoPoint { lat: 95.0, lon: 2.0 })),
            access_profile: Some(String::new()),
            egress_profile: Some(String::from(" bike ")),
            beta_access_time: Some(-1.0),
            beta_egress_time: Some(f64::NAN),
            ..Default::default()
        });
        assert!(change.routing);
        assert_eq!(state.origin, None);
        assert_eq!(state.access_profile, "foot");
        assert_eq!(state.egress_profile, "bike");
        assert_eq!(state.beta_access_time, 1.0);
        assert_eq!(state.beta_egress_time, 1.0);

        // nothing valid left in the patch, nothing changes
        let change = state.apply(&QueryPatch {
            beta_access_time: Some(f64::INFINITY),
            ..Default::default()
        });
        assert!(!change.any());
    }

    #[test]
    fn test_apply_clears_endpoint() {
        let mut state = QueryState::new(mock_time(), &QueryDefaults::default());
        state.apply(&QueryPatch::endpoints(mock_point(1.0, 2.0), mock_point(3.0, 4.0)));
        let change = state.apply(&QueryPatch::destination(None));
        assert!(change.routing);
        assert_eq!(state.destination, None);
        assert!(!state.is_complete());
    }
}
