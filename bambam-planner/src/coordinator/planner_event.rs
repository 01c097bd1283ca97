use crate::client::{ClientError, RouteResponse};
use crate::model::{QueryPatch, ServerInfo};

/// everything that can change planner state. user input and network
/// completions arrive through the same entry point,
/// [`super::Orchestrator::update`].
#[derive(Debug, Clone)]
pub enum PlannerEvent {
    /// the planner became visible, load the server capabilities
    Mount,
    /// the user edited one or more query fields
    Patch(QueryPatch),
    /// the user picked a route by index
    SelectRoute(usize),
    /// the user asked to send the current query again
    Refresh,
    InfoFetched(Result<ServerInfo, ClientError>),
    /// a route request finished. only the request identity travels with the
    /// outcome; whether it is still wanted is decided against the state at
    /// the time this event is handled.
    RoutesFetched {
        request: String,
        outcome: Result<RouteResponse, ClientError>,
    },
}
