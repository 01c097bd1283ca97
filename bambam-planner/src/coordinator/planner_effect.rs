/// work requested by the [`super::Orchestrator`] that has to leave the
/// planner, executed by [`crate::app::PlannerSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannerEffect {
    FetchInfo,
    /// fetch the canonical route request, an absolute URL
    FetchRoutes { request: String },
}
