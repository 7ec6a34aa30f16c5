//! Data Transfer Objects
//!
//! Request and response bodies exchanged with the backend.

use serde::{Deserialize, Serialize};

/// Body of `GET /analytics`
///
/// Every image field is a base64-encoded PNG. All seven fields are required;
/// a body missing any of them fails to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsPayload {
    pub revenue_plot: String,
    pub gauge_plot: String,
    pub country_plot: String,
    pub customer_seg_fig: String,
    pub lead_time_fig: String,
    pub room_meal_fig: String,
    /// Pre-formatted label, e.g. `"37.0%"`
    pub cancellation_rate: String,
}

/// Body of `POST /ask`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub message: String,
}

impl AskRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Successful reply from `POST /ask`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    pub response: String,
}
