#![allow(dead_code)]
use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use bambam_planner::client::{ClientError, RouteClient, RouteResponse};
use bambam_planner::config::PlannerConfig;
use bambam_planner::coordinator::{MemoryAddressBar, Orchestrator};
use bambam_planner::model::{GeoPoint, RoutePath, ServerInfo};
use chrono::{DateTime, Utc};
use futures::{future::LocalBoxFuture, FutureExt};
use tokio::sync::oneshot;
use url::Url;

pub const PAGE_URL: &str = "http://localhost:8989/maps/pt/";

pub fn mock_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-05-02T08:15:00Z")
        .expect("test invariant failed")
        .with_timezone(&Utc)
}

pub fn point(lat: f64, lon: f64) -> GeoPoint {
    GeoPoint::new(lat, lon).expect("test invariant failed")
}

pub fn point_a() -> GeoPoint {
    point(52.5208, 13.4094)
}

pub fn point_b() -> GeoPoint {
    point(52.4986, 13.3822)
}

pub fn point_c() -> GeoPoint {
    point(52.5450, 13.3526)
}

pub fn mock_info() -> ServerInfo {
    serde_json::from_str(r#"{"bbox": [13.0, 52.3, 13.8, 52.7], "version": "9.1"}"#)
        .expect("test invariant failed")
}

pub fn mock_response(possible: &[bool]) -> RouteResponse {
    RouteResponse {
        paths: possible.iter().map(|p| RoutePath::new(*p)).collect(),
    }
}

pub fn mock_orchestrator(config: &PlannerConfig, location: &str) -> Orchestrator<MemoryAddressBar> {
    let location = Url::parse(location).expect("test invariant failed");
    Orchestrator::new(config, MemoryAddressBar::new(location), mock_time())
        .expect("test invariant failed")
}

pub type Responder = oneshot::Sender<Result<RouteResponse, ClientError>>;

/// a [`RouteClient`] whose route requests stay pending until the test
/// answers them through the recorded responders.
#[derive(Clone)]
pub struct ScriptedClient {
    info: Result<ServerInfo, ClientError>,
    pending: Rc<RefCell<VecDeque<(String, Responder)>>>,
    requests: Rc<RefCell<Vec<String>>>,
}

impl ScriptedClient {
    pub fn new(info: Result<ServerInfo, ClientError>) -> ScriptedClient {
        ScriptedClient {
            info,
            pending: Rc::new(RefCell::new(VecDeque::new())),
            requests: Rc::new(RefCell::new(vec![])),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn take_pending(&self) -> Option<(String, Responder)> {
        self.pending.borrow_mut().pop_front()
    }

    /// yields to the session until `count` route requests have been sent
    pub async fn wait_for_requests(&self, count: usize) {
        while self.requests.borrow().len() < count {
            tokio::task::yield_now().await;
        }
    }
}

impl RouteClient for ScriptedClient {
    fn fetch_info(&self) -> LocalBoxFuture<'static, Result<ServerInfo, ClientError>> {
        futures::future::ready(self.info.clone()).boxed_local()
    }

    fn fetch_routes(
        &self,
        request: &str,
    ) -> LocalBoxFuture<'static, Result<RouteResponse, ClientError>> {
        let (tx, rx) = oneshot::channel();
        self.requests.borrow_mut().push(request.to_string());
        self.pending
            .borrow_mut()
            .push_back((request.to_string(), tx));
        let request = request.to_string();
        async move {
            rx.await.unwrap_or_else(|_| {
                Err(ClientError::Transport {
                    url: request,
                    message: String::from("responder dropped"),
                })
            })
        }
        .boxed_local()
    }
}
