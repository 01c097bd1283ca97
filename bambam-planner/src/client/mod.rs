mod client_error;
mod http_route_client;
mod route_client;
mod route_response;

pub use client_error::ClientError;
pub use http_route_client::HttpRouteClient;
pub use route_client::RouteClient;
pub use route_response::RouteResponse;
