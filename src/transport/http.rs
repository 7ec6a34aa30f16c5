//! HTTP backend
//!
//! reqwest client for the analytics server's `/analytics` and `/ask` routes.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::Backend;
use crate::api::{endpoint_url, AnalyticsPayload, AskRequest, AskResponse, ANALYTICS_PATH, ASK_PATH};
use crate::config::BackendConfig;
use crate::error::{ClientError, ClientResult};

/// Header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// reqwest-backed [`Backend`]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Build a client from backend configuration
    ///
    /// No timeout is applied unless `request_timeout_secs` is set; a hung
    /// request then stays pending until the server answers.
    pub fn new(config: &BackendConfig) -> ClientResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| ClientError::Network(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request and decode a JSON body, mapping every failure onto [`ClientError`]
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        path: &str,
    ) -> ClientResult<T> {
        let request_id = uuid::Uuid::new_v4().to_string();

        let response = request
            .header(REQUEST_ID_HEADER, &request_id)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClientError::Network(format!("request to {} timed out", path))
                } else {
                    ClientError::from(e)
                }
            })?;

        let status = response.status();
        tracing::debug!(
            request_id = %request_id,
            path = %path,
            status = status.as_u16(),
            "Backend responded"
        );

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::status(status.as_u16(), text));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_analytics(&self) -> ClientResult<AnalyticsPayload> {
        let url = endpoint_url(&self.base_url, ANALYTICS_PATH);
        self.send_json(self.client.get(&url), ANALYTICS_PATH).await
    }

    async fn ask(&self, message: &str) -> ClientResult<AskResponse> {
        let url = endpoint_url(&self.base_url, ASK_PATH);
        let request = self.client.post(&url).json(&AskRequest::new(message));
        self.send_json(request, ASK_PATH).await
    }
}
