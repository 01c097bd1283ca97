mod planner_app;
mod planner_session;
mod query_arguments;

pub use planner_app::{PlannerApp, PlannerOperation};
pub use planner_session::PlannerSession;
pub use query_arguments::QueryArguments;
