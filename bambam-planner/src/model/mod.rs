mod fetch_status;
mod geo_point;
mod iso_duration;
mod planner_error;
mod query_patch;
pub mod query_field;
mod query_state;
mod route_path;
mod route_result;
mod server_info;
mod time_mode;

pub use fetch_status::FetchStatus;
pub use geo_point::GeoPoint;
pub use iso_duration::IsoDuration;
pub use planner_error::PlannerError;
pub use query_patch::QueryPatch;
pub use query_state::{QueryChange, QueryState};
pub use route_path::RoutePath;
pub use route_result::RouteResult;
pub use server_info::ServerInfo;
pub use time_mode::TimeMode;
