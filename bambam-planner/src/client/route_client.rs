use futures::future::LocalBoxFuture;

use super::{ClientError, RouteResponse};
use crate::model::ServerInfo;

/// the network boundary of the planner. the returned futures own everything
/// they need, so the caller can hold many of them while continuing to mutate
/// planner state. they are driven on a single thread and need not be `Send`.
pub trait RouteClient {
    /// `GET /info`
    fn fetch_info(&self) -> LocalBoxFuture<'static, Result<ServerInfo, ClientError>>;

    /// `GET` of a canonical route request, an absolute URL anchored at the
    /// route endpoint. any non-2xx status is an error.
    fn fetch_routes(&self, request: &str)
        -> LocalBoxFuture<'static, Result<RouteResponse, ClientError>>;
}
