mod duration_codec;
mod planner_config;
mod query_defaults;

pub use planner_config::PlannerConfig;
pub use query_defaults::QueryDefaults;
