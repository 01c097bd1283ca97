use url::Url;

use super::{PlannerEffect, RouteSelector};
use crate::client::{ClientError, RouteResponse};
use crate::codec::QueryCodec;
use crate::model::{FetchStatus, QueryState, RouteResult};

/// what became of a finished route request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    Committed(FetchStatus),
    /// the query changed after the request was sent
    Discarded,
}

/// decides when a route request is sent and whether its response still
/// answers the current query.
///
/// requests are identified by their canonical URL. a new request is only sent
/// when that URL differs from the one behind the current [`RouteResult`],
/// and a response is only accepted if the query, read again when the
/// response arrives, still encodes to the URL it was sent for. requests are
/// never cancelled; outdated responses are dropped on arrival.
#[derive(Debug, Clone)]
pub struct FetchCoordinator {
    route_url: Url,
    retain_paths_while_fetching: bool,
}

impl FetchCoordinator {
    pub fn new(route_url: Url, retain_paths_while_fetching: bool) -> FetchCoordinator {
        FetchCoordinator {
            route_url,
            retain_paths_while_fetching,
        }
    }

    /// the request that answers `state`, or `None` while an endpoint is missing.
    pub fn canonical_request(&self, codec: &QueryCodec, state: &QueryState) -> Option<String> {
        if state.is_complete() {
            Some(codec.encode(&self.route_url, state))
        } else {
            None
        }
    }

    /// marks `routes` as fetching and returns the fetch to perform, unless the
    /// query is incomplete or its request was already dispatched. `force`
    /// re-sends a request that was already dispatched.
    pub fn dispatch(
        &self,
        codec: &QueryCodec,
        state: &QueryState,
        routes: &mut RouteResult,
        force: bool,
    ) -> Option<PlannerEffect> {
        let request = self.canonical_request(codec, state)?;
        if !force && routes.dispatched_request.as_deref() == Some(request.as_str()) {
            return None;
        }
        let previous = if self.retain_paths_while_fetching {
            std::mem::take(&mut routes.paths)
        } else {
            vec![]
        };
        log::debug!("dispatching route request {request}");
        *routes = RouteResult::fetching(request.clone(), previous);
        Some(PlannerEffect::FetchRoutes { request })
    }

    /// applies the outcome of `request` to `routes` if `state` still asks for
    /// exactly that request.
    pub fn reconcile(
        &self,
        codec: &QueryCodec,
        state: &QueryState,
        routes: &mut RouteResult,
        request: String,
        outcome: Result<RouteResponse, ClientError>,
    ) -> Reconciliation {
        let current = self.canonical_request(codec, state);
        if current.as_deref() != Some(request.as_str()) {
            log::debug!("discarding response for outdated request {request}");
            return Reconciliation::Discarded;
        }
        match outcome {
            Ok(response) => {
                let mut paths = response.paths;
                let selected_index = RouteSelector::select_initial(&mut paths);
                log::info!(
                    "received {} paths, selected index {selected_index}",
                    paths.len()
                );
                *routes = RouteResult::succeeded(request, paths, selected_index);
                Reconciliation::Committed(FetchStatus::Succeeded)
            }
            Err(e) => {
                log::warn!("route request failed: {e}");
                *routes = RouteResult::failed(request);
                Reconciliation::Committed(FetchStatus::Failed)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::{FetchCoordinator, Reconciliation};
    use crate::client::{ClientError, RouteResponse};
    use crate::codec::QueryCodec;
    use crate::config::QueryDefaults;
    use crate::coordinator::PlannerEffect;
    use crate::model::{FetchStatus, GeoPoint, QueryPatch, QueryState, RoutePath, RouteResult};
    use chrono::{DateTime, Utc};
    use url::Url;

    fn mock_coordinator(retain: bool) -> FetchCoordinator {
        let url = Url::parse("http://localhost:8989/route").expect("test invariant failed");
        FetchCoordinator::new(url, retain)
    }

    fn mock_state(destination_lat: f64) -> QueryState {
        let time = DateTime::parse_from_rfc3339("2024-05-02T08:15:00Z")
            .expect("test invariant failed")
            .with_timezone(&Utc);
        let mut state = QueryState::new(time, &QueryDefaults::default());
        state.apply(&QueryPatch::endpoints(
            GeoPoint::new(52.5, 13.4).expect("test invariant failed"),
            GeoPoint::new(destination_lat, 13.3).expect("test invariant failed"),
        ));
        state
    }

    fn mock_response(possible: &[bool]) -> RouteResponse {
        RouteResponse {
            paths: possible.iter().map(|p| RoutePath::new(*p)).collect(),
        }
    }

    fn expect_request(effect: Option<PlannerEffect>) -> String {
        match effect {
            Some(PlannerEffect::FetchRoutes { request }) => request,
            other => panic!("expected a route fetch, found {other:?}"),
        }
    }

    #[test]
    fn test_incomplete_does_nothing() {
        let codec = QueryCodec::new("en-US", "pt");
        let coordinator = mock_coordinator(false);
        let mut state = mock_state(52.4);
        state.apply(&QueryPatch::destination(None));
        let mut routes = RouteResult::idle();
        assert_eq!(coordinator.dispatch(&codec, &state, &mut routes, false), None);
        assert_eq!(routes, RouteResult::idle());
    }

    #[test]
    fn test_dispatch_is_idempotent() {
        let codec = QueryCodec::new("en-US", "pt");
        let coordinator = mock_coordinator(false);
        let state = mock_state(52.4);
        let mut routes = RouteResult::idle();

        let request = expect_request(coordinator.dispatch(&codec, &state, &mut routes, false));
        assert_eq!(routes.status, FetchStatus::Fetching);
        assert_eq!(routes.dispatched_request.as_deref(), Some(request.as_str()));
        assert_eq!(coordinator.dispatch(&codec, &state, &mut routes, false), None);

        // forcing re-sends the same request
        let again = expect_request(coordinator.dispatch(&codec, &state, &mut routes, true));
        assert_eq!(again, request);
    }

    #[test]
    fn test_reconcile_success_selects_first_possible() {
        let codec = QueryCodec::new("en-US", "pt");
        let coordinator = mock_coordinator(false);
        let state = mock_state(52.4);
        let mut routes = RouteResult::idle();
        let request = expect_request(coordinator.dispatch(&codec, &state, &mut routes, false));

        let result = coordinator.reconcile(
            &codec,
            &state,
            &mut routes,
            request,
            Ok(mock_response(&[false, true])),
        );
        assert_eq!(result, Reconciliation::Committed(FetchStatus::Succeeded));
        assert_eq!(routes.selected_index, 1);
        assert!(routes.paths[1].is_selected);
    }

    #[test]
    fn test_reconcile_discards_stale() {
        let codec = QueryCodec::new("en-US", "pt");
        let coordinator = mock_coordinator(false);
        let mut state = mock_state(52.4);
        let mut routes = RouteResult::idle();
        let first = expect_request(coordinator.dispatch(&codec, &state, &mut routes, false));

        state.apply(&QueryPatch::destination(Some(
            GeoPoint::new(52.3, 13.3).expect("test invariant failed"),
        )));
        let second = expect_request(coordinator.dispatch(&codec, &state, &mut routes, false));
        assert_ne!(first, second);
        let before = routes.clone();

        let result =
            coordinator.reconcile(&codec, &state, &mut routes, first, Ok(mock_response(&[true])));
        assert_eq!(result, Reconciliation::Discarded);
        assert_eq!(routes, before);

        let failed = coordinator.reconcile(
            &codec,
            &state,
            &mut routes,
            String::from("http://localhost:8989/route?old"),
            Err(ClientError::HttpStatus {
                url: String::from("http://localhost:8989/route?old"),
                status: 500,
            }),
        );
        assert_eq!(failed, Reconciliation::Discarded);
        assert_eq!(routes, before);
    }

    #[test]
    fn test_reconcile_failure() {
        let codec = QueryCodec::new("en-US", "pt");
        let coordinator = mock_coordinator(false);
        let state = mock_state(52.4);
        let mut routes = RouteResult::idle();
        let request = expect_request(coordinator.dispatch(&codec, &state, &mut routes, false));

        let outcome = Err(ClientError::HttpStatus {
            url: request.clone(),
            status: 500,
        });
        let result = coordinator.reconcile(&codec, &state, &mut routes, request, outcome);
        assert_eq!(result, Reconciliation::Committed(FetchStatus::Failed));
        assert_eq!(routes.status, FetchStatus::Failed);
        assert!(routes.paths.is_empty());
        assert_eq!(routes.selected_index, RouteResult::NO_SELECTION);
    }

    #[test]
    fn test_retain_paths_while_fetching() {
        let codec = QueryCodec::new("en-US", "pt");
        let coordinator = mock_coordinator(true);
        let mut state = mock_state(52.4);
        let mut routes = RouteResult::idle();
        let request = expect_request(coordinator.dispatch(&codec, &state, &mut routes, false));
        coordinator.reconcile(
            &codec,
            &state,
            &mut routes,
            request,
            Ok(mock_response(&[true, true])),
        );

        state.apply(&QueryPatch::destination(Some(
            GeoPoint::new(52.3, 13.3).expect("test invariant failed"),
        )));
        coordinator.dispatch(&codec, &state, &mut routes, false);
        assert_eq!(routes.status, FetchStatus::Fetching);
        assert_eq!(routes.paths.len(), 2);
        assert_eq!(routes.selected_index, RouteResult::NO_SELECTION);
        assert!(routes.paths.iter().all(|p| !p.is_selected));
    }
}
