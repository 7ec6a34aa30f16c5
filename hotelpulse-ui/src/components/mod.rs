//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart_image;
pub mod chat;
pub mod loading;

pub use chart_image::{CancellationRate, ChartImage};
pub use chat::ChatWidget;
pub use loading::{ChartSkeleton, InlineLoading};
