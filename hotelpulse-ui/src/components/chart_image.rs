//! Chart Image Component
//!
//! Charts arrive from the backend already rendered; this only shows them.

use leptos::*;

use hotelpulse::ChartSlot;

use crate::components::ChartSkeleton;
use crate::state::DashboardState;

/// One pre-rendered chart
#[component]
pub fn ChartImage(slot: ChartSlot) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let src = move || state.charts.with(|charts| charts.get(&slot).cloned());

    view! {
        <figure class="bg-gray-800 rounded-xl p-4">
            <figcaption class="text-lg font-semibold mb-3">{slot.title()}</figcaption>
            {move || match src() {
                Some(uri) => view! {
                    <img id=slot.element_id() src=uri alt=slot.title() class="w-full rounded-lg" />
                }.into_view(),
                None => view! { <ChartSkeleton /> }.into_view(),
            }}
        </figure>
    }
}

/// Cancellation-rate label shown under the gauge
#[component]
pub fn CancellationRate() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <div class="gauge-label text-3xl font-bold text-center">
            {move || state.cancellation_rate.get().unwrap_or_else(|| "--".to_string())}
        </div>
    }
}
