use super::SelectionPolicy;
use crate::model::{PlannerError, RoutePath, RouteResult};

/// decides which candidate path is highlighted.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteSelector {
    policy: SelectionPolicy,
}

impl RouteSelector {
    pub fn new(policy: SelectionPolicy) -> RouteSelector {
        RouteSelector { policy }
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// selects the first possible path in server rank order and returns its
    /// index, or [`RouteResult::NO_SELECTION`] when no path is possible.
    pub fn select_initial(paths: &mut [RoutePath]) -> i64 {
        paths.iter_mut().for_each(|p| p.is_selected = false);
        match paths.iter_mut().enumerate().find(|(_, p)| p.is_possible) {
            Some((idx, path)) => {
                path.is_selected = true;
                idx as i64
            }
            None => RouteResult::NO_SELECTION,
        }
    }

    /// moves the selection of `result` to `new_index`, returning the updated
    /// result. the input is left untouched when the selection is rejected.
    pub fn select_explicit(
        &self,
        result: &RouteResult,
        new_index: usize,
    ) -> Result<RouteResult, PlannerError> {
        let target = result
            .paths
            .get(new_index)
            .ok_or(PlannerError::SelectionOutOfRange {
                index: new_index,
                count: result.paths.len(),
            })?;
        if self.policy == SelectionPolicy::FeasibleOnly && !target.is_possible {
            return Err(PlannerError::InfeasibleSelection(new_index));
        }

        let mut updated = result.clone();
        if let Some(previous) = updated
            .selection()
            .and_then(|idx| updated.paths.get_mut(idx))
        {
            previous.is_selected = false;
        }
        updated.paths[new_index].is_selected = true;
        updated.selected_index = new_index as i64;
        Ok(updated)
    }
}
