use serde::{Deserialize, Serialize};

use super::{FetchStatus, RoutePath};

/// the outcome of the most recently dispatched and accepted route request.
/// a new value replaces the old one on every transition, it is never
/// patched field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    /// canonical request this result answers, `None` before the first dispatch
    pub dispatched_request: Option<String>,
    pub status: FetchStatus,
    /// candidate paths in the rank order of the server
    pub paths: Vec<RoutePath>,
    /// index into `paths`, or [`RouteResult::NO_SELECTION`]
    pub selected_index: i64,
}

impl Default for RouteResult {
    fn default() -> Self {
        RouteResult::idle()
    }
}

impl RouteResult {
    pub const NO_SELECTION: i64 = -1;

    pub fn idle() -> RouteResult {
        RouteResult {
            dispatched_request: None,
            status: FetchStatus::Idle,
            paths: vec![],
            selected_index: Self::NO_SELECTION,
        }
    }

    /// a request in flight. `previous_paths` may carry the last result along
    /// for display continuity; their selection is cleared.
    pub fn fetching(request: String, previous_paths: Vec<RoutePath>) -> RouteResult {
        let paths = previous_paths
            .into_iter()
            .map(|mut p| {
                p.is_selected = false;
                p
            })
            .collect();
        RouteResult {
            dispatched_request: Some(request),
            status: FetchStatus::Fetching,
            paths,
            selected_index: Self::NO_SELECTION,
        }
    }

    pub fn succeeded(request: String, paths: Vec<RoutePath>, selected_index: i64) -> RouteResult {
        RouteResult {
            dispatched_request: Some(request),
            status: FetchStatus::Succeeded,
            paths,
            selected_index,
        }
    }

    pub fn failed(request: String) -> RouteResult {
        RouteResult {
            dispatched_request: Some(request),
            status: FetchStatus::Failed,
            paths: vec![],
            selected_index: Self::NO_SELECTION,
        }
    }

    /// the selected index as a `usize`, if any path is selected.
    pub fn selection(&self) -> Option<usize> {
        usize::try_from(self.selected_index).ok()
    }

    pub fn selected_path(&self) -> Option<&RoutePath> {
        self.selection().and_then(|idx| self.paths.get(idx))
    }

    pub fn is_fetching(&self) -> bool {
        self.status == FetchStatus::Fetching
    }
}
