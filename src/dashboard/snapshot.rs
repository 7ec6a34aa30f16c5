//! Analytics snapshot
//!
//! Chart images of one `/analytics` body. The backend's base64 strings are
//! passed through to the page untouched; decoding is only needed for saving
//! the PNGs to disk.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::{ChartSlot, CHART_MIME};
use crate::api::AnalyticsPayload;

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

/// One chart as sent by the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartImage {
    slot: ChartSlot,
    encoded: String,
    bytes: Option<Vec<u8>>,
}

impl ChartImage {
    /// Wrap a base64 chart
    ///
    /// Invalid base64 or a non-PNG image is logged and shown anyway.
    pub fn decode(slot: ChartSlot, encoded: &str) -> Self {
        let bytes = match STANDARD.decode(encoded) {
            Ok(bytes) => {
                if !bytes.starts_with(PNG_SIGNATURE) {
                    tracing::warn!(
                        chart = %slot,
                        len = bytes.len(),
                        "Chart is not a PNG, showing it anyway"
                    );
                }
                Some(bytes)
            }
            Err(e) => {
                tracing::warn!(chart = %slot, error = %e, "Chart is not valid base64, showing it anyway");
                None
            }
        };

        Self {
            slot,
            encoded: encoded.to_string(),
            bytes,
        }
    }

    pub fn slot(&self) -> ChartSlot {
        self.slot
    }

    /// Decoded image, `None` when the backend sent invalid base64
    pub fn png_bytes(&self) -> Option<&[u8]> {
        self.bytes.as_deref()
    }

    /// `data:image/png;base64,...` URI for an `<img src>`
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", CHART_MIME, self.encoded)
    }
}

/// All six charts plus the cancellation-rate label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsSnapshot {
    charts: Vec<ChartImage>,
    cancellation_rate: String,
}

impl AnalyticsSnapshot {
    pub fn from_payload(payload: &AnalyticsPayload) -> Self {
        let charts = ChartSlot::ALL
            .iter()
            .map(|slot| ChartImage::decode(*slot, slot.payload_field(payload)))
            .collect();

        Self {
            charts,
            cancellation_rate: payload.cancellation_rate.clone(),
        }
    }

    /// Charts in page order
    pub fn charts(&self) -> &[ChartImage] {
        &self.charts
    }

    pub fn chart(&self, slot: ChartSlot) -> Option<&ChartImage> {
        self.charts.iter().find(|c| c.slot == slot)
    }

    pub fn cancellation_rate(&self) -> &str {
        &self.cancellation_rate
    }

    /// Total decoded image size in bytes
    pub fn total_bytes(&self) -> usize {
        self.charts
            .iter()
            .filter_map(|c| c.bytes.as_ref())
            .map(Vec::len)
            .sum()
    }
}
