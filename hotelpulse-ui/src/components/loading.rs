//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}

/// Placeholder shown until a chart image arrives
#[component]
pub fn ChartSkeleton() -> impl IntoView {
    view! {
        <div class="bg-gray-700 rounded-lg h-48 animate-pulse" />
    }
}
