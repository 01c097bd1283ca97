use chrono::{DateTime, Utc};
use clap::Args;

use crate::model::{GeoPoint, IsoDuration, QueryPatch, TimeMode};

/// query fields that can be given on the command line. anything omitted
/// keeps the value from the initial url or the configured defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct QueryArguments {
    /// origin as "lat,lon"
    #[arg(long)]
    pub from: Option<GeoPoint>,
    /// destination as "lat,lon"
    #[arg(long)]
    pub to: Option<GeoPoint>,
    /// departure (or with --arrive-by, arrival) time in RFC 3339 format
    #[arg(long)]
    pub time: Option<DateTime<Utc>>,
    /// interpret --time as the latest arrival time
    #[arg(long)]
    pub arrive_by: bool,
    #[arg(long)]
    pub access_profile: Option<String>,
    #[arg(long)]
    pub egress_profile: Option<String>,
    #[arg(long)]
    pub beta_access_time: Option<f64>,
    #[arg(long)]
    pub beta_egress_time: Option<f64>,
    /// request a window of departures instead of a single itinerary
    #[arg(long)]
    pub range_query: bool,
    /// length of the departure window, ISO-8601 such as PT120M
    #[arg(long)]
    pub range_query_duration: Option<IsoDuration>,
    /// maximum time on foot for access and egress, ISO-8601 such as PT30M
    #[arg(long)]
    pub limit_street_time: Option<IsoDuration>,
    #[arg(long)]
    pub ignore_transfers: bool,
}

impl QueryArguments {
    pub fn to_patch(&self) -> QueryPatch {
        QueryPatch {
            origin: self.from.map(Some),
            destination: self.to.map(Some),
            departure_or_arrival_time: self.time,
            time_mode: self.arrive_by.then_some(TimeMode::Arrival),
            access_profile: self.access_profile.clone(),
            egress_profile: self.egress_profile.clone(),
            beta_access_time: self.beta_access_time,
            beta_egress_time: self.beta_egress_time,
            range_query: self.range_query.then_some(true),
            range_query_duration: self.range_query_duration.clone(),
            limit_street_time: self.limit_street_time.clone(),
            ignore_transfers: self.ignore_transfers.then_some(true),
            auxiliary_distance: None,
        }
    }
}
