//! HTTP API Client
//!
//! `gloo-net` implementation of the analytics backend.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use hotelpulse::api::{endpoint_url, AnalyticsPayload, AskRequest, AskResponse, ANALYTICS_PATH, ASK_PATH};
use hotelpulse::{Backend, CannedBackend, ClientError, ClientResult};

/// Empty base: the dashboard is served by the analytics server itself
pub const DEFAULT_API_BASE: &str = "";

const API_URL_KEY: &str = "hotelpulse_api_url";
const OFFLINE_KEY: &str = "hotelpulse_offline";

fn local_storage_item(key: &str) -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(key)
        .ok()
        .flatten()
}

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    local_storage_item(API_URL_KEY)
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Offline mode is switched on by setting `hotelpulse_offline=true` in local storage
pub fn is_offline() -> bool {
    local_storage_item(OFFLINE_KEY).as_deref() == Some("true")
}

/// Backend for one chat turn or analytics refresh
pub fn backend() -> Box<dyn Backend> {
    if is_offline() {
        Box::new(CannedBackend::new())
    } else {
        Box::new(GlooBackend::new(get_api_base()))
    }
}

/// Backend talking to the analytics server with `fetch`
#[derive(Debug, Clone)]
pub struct GlooBackend {
    base: String,
}

impl GlooBackend {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

#[async_trait(?Send)]
impl Backend for GlooBackend {
    fn name(&self) -> &str {
        "gloo"
    }

    async fn fetch_analytics(&self) -> ClientResult<AnalyticsPayload> {
        let response = Request::get(&endpoint_url(&self.base, ANALYTICS_PATH))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        read_json(response).await
    }

    async fn ask(&self, message: &str) -> ClientResult<AskResponse> {
        let response = Request::post(&endpoint_url(&self.base, ASK_PATH))
            .json(&AskRequest::new(message))
            .map_err(|e| ClientError::Parse(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ClientError::status(status, body));
    }

    Ok(serde_json::from_str(&body)?)
}
