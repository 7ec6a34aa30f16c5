//! Analytics dashboard
//!
//! Six pre-rendered chart images, a cancellation-rate label and a long-form
//! date label. The backend renders everything; this side only places it.

mod controller;
mod snapshot;

pub use controller::{AppliedSnapshot, DashboardController, FetchReport};
pub use snapshot::{AnalyticsSnapshot, ChartImage};

use chrono::NaiveDate;
use std::fmt;

use crate::api::AnalyticsPayload;

/// MIME type every chart is delivered as
pub const CHART_MIME: &str = "image/png";

/// One of the six chart positions on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChartSlot {
    Revenue,
    Gauge,
    Country,
    CustomerSegments,
    LeadTime,
    RoomMeal,
}

impl ChartSlot {
    /// Every slot, in page order
    pub const ALL: [ChartSlot; 6] = [
        ChartSlot::Revenue,
        ChartSlot::Gauge,
        ChartSlot::Country,
        ChartSlot::CustomerSegments,
        ChartSlot::LeadTime,
        ChartSlot::RoomMeal,
    ];

    /// Field of the `/analytics` body carrying this chart
    pub fn field_name(&self) -> &'static str {
        match self {
            ChartSlot::Revenue => "revenue_plot",
            ChartSlot::Gauge => "gauge_plot",
            ChartSlot::Country => "country_plot",
            ChartSlot::CustomerSegments => "customer_seg_fig",
            ChartSlot::LeadTime => "lead_time_fig",
            ChartSlot::RoomMeal => "room_meal_fig",
        }
    }

    /// Id of the `<img>` element showing this chart
    pub fn element_id(&self) -> &'static str {
        match self {
            ChartSlot::Revenue => "revenue-chart",
            ChartSlot::Gauge => "gauge-chart",
            ChartSlot::Country => "country-chart",
            ChartSlot::CustomerSegments => "customer-seg-chart",
            ChartSlot::LeadTime => "lead-time-chart",
            ChartSlot::RoomMeal => "room-meal-chart",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ChartSlot::Revenue => "Revenue Trend",
            ChartSlot::Gauge => "Cancellation Rate",
            ChartSlot::Country => "Top Countries",
            ChartSlot::CustomerSegments => "Customer Segments",
            ChartSlot::LeadTime => "Lead Time",
            ChartSlot::RoomMeal => "Rooms & Meals",
        }
    }

    /// Pick this slot's base64 field out of a payload
    pub fn payload_field<'a>(&self, payload: &'a AnalyticsPayload) -> &'a str {
        match self {
            ChartSlot::Revenue => &payload.revenue_plot,
            ChartSlot::Gauge => &payload.gauge_plot,
            ChartSlot::Country => &payload.country_plot,
            ChartSlot::CustomerSegments => &payload.customer_seg_fig,
            ChartSlot::LeadTime => &payload.lead_time_fig,
            ChartSlot::RoomMeal => &payload.room_meal_fig,
        }
    }
}

impl fmt::Display for ChartSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

/// Long-form en-US date, e.g. `"Tuesday, March 5, 2024"`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Today's date in the local timezone, long form
pub fn today_long_date() -> String {
    format_long_date(chrono::Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_long_date(date), "Tuesday, March 5, 2024");

        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(format_long_date(date), "Friday, October 16, 2026");
    }

    #[test]
    fn test_slot_names_are_unique() {
        let mut ids: Vec<_> = ChartSlot::ALL.iter().map(|s| s.element_id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);
        assert_eq!(ChartSlot::CustomerSegments.field_name(), "customer_seg_fig");
        assert_eq!(ChartSlot::RoomMeal.to_string(), "room-meal-chart");
    }
}
