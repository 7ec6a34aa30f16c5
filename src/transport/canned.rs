//! Offline backend
//!
//! Used when no analytics server is reachable or configured. Every chat
//! message receives the same courtesy reply; analytics are unavailable.

use async_trait::async_trait;

use super::Backend;
use crate::api::{AnalyticsPayload, AskResponse};
use crate::error::{ClientError, ClientResult};

/// Reply given to every message in offline mode
pub const CANNED_REPLY: &str = "Thank you for your message! Our team will respond shortly.";

/// Backend that answers locally without any network access
#[derive(Debug, Clone)]
pub struct CannedBackend {
    reply: String,
}

impl CannedBackend {
    pub fn new() -> Self {
        Self::with_reply(CANNED_REPLY)
    }

    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }

    pub fn reply(&self) -> &str {
        &self.reply
    }
}

impl Default for CannedBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl Backend for CannedBackend {
    fn name(&self) -> &str {
        "canned"
    }

    async fn fetch_analytics(&self) -> ClientResult<AnalyticsPayload> {
        Err(ClientError::Network(
            "analytics are unavailable in offline mode".to_string(),
        ))
    }

    async fn ask(&self, message: &str) -> ClientResult<AskResponse> {
        tracing::debug!(chars = message.chars().count(), "Answering with canned reply");
        Ok(AskResponse {
            response: self.reply.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;

    #[tokio::test]
    async fn test_canned_reply() {
        let backend = CannedBackend::new();
        let reply = backend.ask("When is check-in?").await.unwrap();
        assert_eq!(reply.response, CANNED_REPLY);
    }

    #[tokio::test]
    async fn test_custom_reply() {
        let backend = CannedBackend::with_reply("We are closed today.");
        assert_eq!(backend.ask("hi").await.unwrap().response, "We are closed today.");
    }

    #[tokio::test]
    async fn test_analytics_unavailable() {
        let err = CannedBackend::new().fetch_analytics().await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::Network);
    }
}
