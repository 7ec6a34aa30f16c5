//! Backend transports
//!
//! Controllers talk to the backend only through the [`Backend`] trait so the
//! same chat and dashboard logic runs over reqwest, over `gloo-net` in the
//! browser, against the offline canned replies, or against a test fake.
//!
//! Futures are not required to be `Send`: browser fetches are single-threaded.

mod canned;
#[cfg(feature = "native")]
mod http;

pub use canned::{CannedBackend, CANNED_REPLY};
#[cfg(feature = "native")]
pub use http::HttpBackend;

use async_trait::async_trait;

use crate::api::{AnalyticsPayload, AskResponse};
use crate::error::ClientResult;

/// Capability to reach the analytics/chat backend
#[async_trait(?Send)]
pub trait Backend {
    /// Short name used in log fields
    fn name(&self) -> &str;

    /// `GET /analytics`
    async fn fetch_analytics(&self) -> ClientResult<AnalyticsPayload>;

    /// `POST /ask` with `{"message": message}`
    async fn ask(&self, message: &str) -> ClientResult<AskResponse>;
}

#[async_trait(?Send)]
impl<B: Backend + ?Sized> Backend for &B {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn fetch_analytics(&self) -> ClientResult<AnalyticsPayload> {
        (**self).fetch_analytics().await
    }

    async fn ask(&self, message: &str) -> ClientResult<AskResponse> {
        (**self).ask(message).await
    }
}

#[async_trait(?Send)]
impl<B: Backend + ?Sized> Backend for Box<B> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn fetch_analytics(&self) -> ClientResult<AnalyticsPayload> {
        (**self).fetch_analytics().await
    }

    async fn ask(&self, message: &str) -> ClientResult<AskResponse> {
        (**self).ask(message).await
    }
}
