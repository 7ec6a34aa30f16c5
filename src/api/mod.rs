//! Backend wire contract
//!
//! The analytics backend exposes two endpoints:
//!
//! - `GET /analytics` - pre-rendered chart images plus the cancellation rate
//! - `POST /ask` - one chat message in, one reply out
//!
//! Any non-2xx status is a failure. Bodies are JSON in both directions.

pub mod dto;

pub use dto::{AnalyticsPayload, AskRequest, AskResponse};

/// Path of the analytics snapshot endpoint
pub const ANALYTICS_PATH: &str = "/analytics";

/// Path of the chat endpoint
pub const ASK_PATH: &str = "/ask";

/// Join a base URL and an endpoint path without doubling slashes
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url() {
        assert_eq!(
            endpoint_url("http://localhost:5000", ANALYTICS_PATH),
            "http://localhost:5000/analytics"
        );
        assert_eq!(
            endpoint_url("http://localhost:5000/", ASK_PATH),
            "http://localhost:5000/ask"
        );
        assert_eq!(endpoint_url("", ASK_PATH), "/ask");
    }
}
