use serde::Serialize;

use crate::model::{QueryState, RouteResult, ServerInfo};

/// read-only snapshot handed to presentation. only exists once the server
/// capabilities are known.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlannerView<'a> {
    pub info: &'a ServerInfo,
    pub query: &'a QueryState,
    pub routes: &'a RouteResult,
}
