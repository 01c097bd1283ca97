use futures::{future::LocalBoxFuture, FutureExt};
use serde::de::DeserializeOwned;
use url::Url;

use super::{ClientError, RouteClient, RouteResponse};
use crate::config::PlannerConfig;
use crate::model::ServerInfo;

/// [`RouteClient`] backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpRouteClient {
    client: reqwest::Client,
    info_url: Url,
}

impl HttpRouteClient {
    pub fn new(client: reqwest::Client, info_url: Url) -> HttpRouteClient {
        HttpRouteClient { client, info_url }
    }

    pub fn info_url(&self) -> &Url {
        &self.info_url
    }
}

impl TryFrom<&PlannerConfig> for HttpRouteClient {
    type Error = ClientError;

    fn try_from(config: &PlannerConfig) -> Result<Self, Self::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;
        let info_url = config
            .info_url()
            .map_err(|e| ClientError::InvalidUrl(config.info_endpoint.clone(), e.to_string()))?;
        Ok(HttpRouteClient::new(client, info_url))
    }
}

impl RouteClient for HttpRouteClient {
    fn fetch_info(&self) -> LocalBoxFuture<'static, Result<ServerInfo, ClientError>> {
        get_json(self.client.clone(), self.info_url.to_string()).boxed_local()
    }

    fn fetch_routes(
        &self,
        request: &str,
    ) -> LocalBoxFuture<'static, Result<RouteResponse, ClientError>> {
        let client = self.client.clone();
        let request = request.to_string();
        async move {
            let url = Url::parse(&request)
                .map_err(|e| ClientError::InvalidUrl(request.clone(), e.to_string()))?;
            get_json(client, url.to_string()).await
        }
        .boxed_local()
    }
}

async fn get_json<T: DeserializeOwned>(
    client: reqwest::Client,
    url: String,
) -> Result<T, ClientError> {
    log::debug!("GET {url}");
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| ClientError::Transport {
            url: url.clone(),
            message: e.to_string(),
        })?;
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::HttpStatus {
            url,
            status: status.as_u16(),
        });
    }
    response.json::<T>().await.map_err(|e| ClientError::Decode {
        url,
        message: e.to_string(),
    })
}
