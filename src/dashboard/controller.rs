//! Dashboard controller

use chrono::NaiveDate;

use super::{format_long_date, AnalyticsSnapshot, ChartSlot};
use crate::error::ClientError;
use crate::surface::DashboardSurface;
use crate::transport::Backend;

/// Snapshot that was written to the surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedSnapshot {
    pub snapshot: AnalyticsSnapshot,
    /// Slots whose element does not exist on this surface
    pub skipped: Vec<ChartSlot>,
    pub label_written: bool,
}

impl AppliedSnapshot {
    pub fn images_written(&self) -> usize {
        self.snapshot.charts().len() - self.skipped.len()
    }
}

/// Result of one [`DashboardController::fetch_analytics`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchReport {
    Applied(AppliedSnapshot),
    /// Nothing on the surface was touched
    Failed(ClientError),
}

impl FetchReport {
    pub fn is_applied(&self) -> bool {
        matches!(self, FetchReport::Applied(_))
    }
}

/// Dashboard controller: date label and analytics refresh
pub struct DashboardController<B, S> {
    backend: B,
    surface: S,
}

impl<B: Backend, S: DashboardSurface> DashboardController<B, S> {
    pub fn new(backend: B, surface: S) -> Self {
        Self { backend, surface }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Write today's long-form date into the date label
    pub fn initialize_date(&mut self) -> bool {
        self.initialize_date_for(chrono::Local::now().date_naive())
    }

    /// Write the given date; returns false when the page has no date label
    pub fn initialize_date_for(&mut self, date: NaiveDate) -> bool {
        self.surface.set_date_label(&format_long_date(date))
    }

    /// Fetch `/analytics` and write every chart and the cancellation rate
    ///
    /// On any failure the error is logged and the surface is left exactly as
    /// it was. Safe to call repeatedly; no retry is attempted.
    pub async fn fetch_analytics(&mut self) -> FetchReport {
        tracing::info!(backend = %self.backend.name(), "Fetching analytics data");

        match self.backend.fetch_analytics().await {
            Ok(payload) => {
                let snapshot = AnalyticsSnapshot::from_payload(&payload);
                FetchReport::Applied(self.apply(snapshot))
            }
            Err(err) => {
                tracing::error!(
                    backend = %self.backend.name(),
                    kind = err.kind().as_str(),
                    error = %err,
                    "Error fetching analytics"
                );
                FetchReport::Failed(err)
            }
        }
    }

    fn apply(&mut self, snapshot: AnalyticsSnapshot) -> AppliedSnapshot {
        let mut skipped = Vec::new();
        for chart in snapshot.charts() {
            if !self.surface.set_chart_image(chart.slot(), &chart.data_uri()) {
                tracing::debug!(chart = %chart.slot(), "No element for chart, skipping");
                skipped.push(chart.slot());
            }
        }

        let label_written = self
            .surface
            .set_cancellation_rate(snapshot.cancellation_rate());

        tracing::info!(
            images = snapshot.charts().len() - skipped.len(),
            bytes = snapshot.total_bytes(),
            cancellation_rate = %snapshot.cancellation_rate(),
            "Analytics updated"
        );

        AppliedSnapshot {
            snapshot,
            skipped,
            label_written,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{AnalyticsPayload, AskResponse};
    use crate::error::ClientResult;
    use crate::surface::MemoryDashboard;
    use async_trait::async_trait;
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Backend handing out queued analytics results in order
    struct QueuedBackend {
        results: RefCell<VecDeque<ClientResult<AnalyticsPayload>>>,
    }

    impl QueuedBackend {
        fn new(results: Vec<ClientResult<AnalyticsPayload>>) -> Self {
            Self {
                results: RefCell::new(results.into()),
            }
        }
    }

    #[async_trait(?Send)]
    impl Backend for QueuedBackend {
        fn name(&self) -> &str {
            "queued"
        }

        async fn fetch_analytics(&self) -> ClientResult<AnalyticsPayload> {
            self.results
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ClientError::Network("queue empty".into())))
        }

        async fn ask(&self, _message: &str) -> ClientResult<AskResponse> {
            Err(ClientError::Network("not used".into()))
        }
    }

    fn payload(version: &str, rate: &str) -> AnalyticsPayload {
        let png = |name: &str| STANDARD.encode(format!("\u{89}PNG-{}-{}", name, version));
        AnalyticsPayload {
            revenue_plot: png("revenue"),
            gauge_plot: png("gauge"),
            country_plot: png("country"),
            customer_seg_fig: png("segments"),
            lead_time_fig: png("lead"),
            room_meal_fig: png("rooms"),
            cancellation_rate: rate.to_string(),
        }
    }

    fn expected_uri(encoded: &str) -> String {
        format!("data:image/png;base64,{}", encoded)
    }

    #[tokio::test]
    async fn test_fetch_populates_every_slot() {
        let data = payload("v1", "37.0%");
        let backend = QueuedBackend::new(vec![Ok(data.clone())]);
        let mut controller = DashboardController::new(&backend, MemoryDashboard::new());

        let report = controller.fetch_analytics().await;
        let FetchReport::Applied(applied) = report else {
            panic!("expected applied snapshot");
        };
        assert_eq!(applied.images_written(), 6);
        assert!(applied.label_written);

        let dashboard = controller.surface();
        for slot in ChartSlot::ALL {
            assert_eq!(
                dashboard.image(slot),
                Some(expected_uri(slot.payload_field(&data)).as_str())
            );
        }
        assert_eq!(dashboard.cancellation_rate(), Some("37.0%"));
    }

    #[tokio::test]
    async fn test_failure_leaves_previous_snapshot() {
        let first = payload("v1", "37.0%");
        let backend = QueuedBackend::new(vec![
            Ok(first.clone()),
            Err(ClientError::status(503, "maintenance")),
            Err(ClientError::Parse("expected value at line 1".into())),
        ]);
        let mut controller = DashboardController::new(&backend, MemoryDashboard::new());

        assert!(controller.fetch_analytics().await.is_applied());
        let before = controller.surface().clone();

        for _ in 0..2 {
            let report = controller.fetch_analytics().await;
            assert!(matches!(report, FetchReport::Failed(_)));
        }

        let after = controller.surface();
        for slot in ChartSlot::ALL {
            assert_eq!(after.image(slot), before.image(slot));
        }
        assert_eq!(after.cancellation_rate(), Some("37.0%"));
    }

    #[tokio::test]
    async fn test_odd_image_is_still_written() {
        let mut odd = payload("v1", "12.5%");
        odd.revenue_plot = "rev".to_string();
        let backend = QueuedBackend::new(vec![Ok(odd.clone())]);
        let mut controller = DashboardController::new(&backend, MemoryDashboard::new());

        let FetchReport::Applied(applied) = controller.fetch_analytics().await else {
            panic!("expected applied snapshot");
        };
        assert_eq!(applied.images_written(), 6);

        let dashboard = controller.surface();
        assert_eq!(dashboard.image(ChartSlot::Revenue), Some("data:image/png;base64,rev"));
        assert_eq!(
            dashboard.image(ChartSlot::RoomMeal),
            Some(expected_uri(&odd.room_meal_fig).as_str())
        );
        assert_eq!(dashboard.cancellation_rate(), Some("12.5%"));
    }

    #[tokio::test]
    async fn test_repeated_fetch_overwrites() {
        let backend = QueuedBackend::new(vec![
            Ok(payload("v1", "37.0%")),
            Ok(payload("v2", "35.2%")),
        ]);
        let mut controller = DashboardController::new(&backend, MemoryDashboard::new());

        controller.fetch_analytics().await;
        controller.fetch_analytics().await;

        let second = payload("v2", "35.2%");
        assert_eq!(
            controller.surface().image(ChartSlot::Gauge),
            Some(expected_uri(&second.gauge_plot).as_str())
        );
        assert_eq!(controller.surface().cancellation_rate(), Some("35.2%"));
    }

    #[tokio::test]
    async fn test_missing_elements_are_skipped() {
        let backend = QueuedBackend::new(vec![Ok(payload("v1", "37.0%"))]);
        let surface = MemoryDashboard::new()
            .without_chart(ChartSlot::Country)
            .without_cancellation_rate();
        let mut controller = DashboardController::new(&backend, surface);

        let FetchReport::Applied(applied) = controller.fetch_analytics().await else {
            panic!("expected applied snapshot");
        };
        assert_eq!(applied.skipped, vec![ChartSlot::Country]);
        assert_eq!(applied.images_written(), 5);
        assert!(!applied.label_written);
        assert!(controller.surface().image(ChartSlot::Revenue).is_some());
    }

    #[test]
    fn test_initialize_date() {
        let backend = QueuedBackend::new(Vec::new());
        let mut controller = DashboardController::new(&backend, MemoryDashboard::new());

        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert!(controller.initialize_date_for(date));
        assert_eq!(controller.surface().date_label(), Some("Tuesday, March 5, 2024"));
    }

    #[test]
    fn test_today_label_matches_terminal_date() {
        let backend = QueuedBackend::new(Vec::new());
        let mut controller = DashboardController::new(&backend, MemoryDashboard::new());

        assert!(controller.initialize_date());
        let today = crate::dashboard::today_long_date();
        assert_eq!(controller.surface().date_label(), Some(today.as_str()));
    }

    #[test]
    fn test_initialize_date_without_label_is_noop() {
        let backend = QueuedBackend::new(Vec::new());
        let mut controller =
            DashboardController::new(&backend, MemoryDashboard::new().without_date());

        assert!(!controller.initialize_date());
        assert_eq!(controller.surface().date_label(), None);
    }
}
