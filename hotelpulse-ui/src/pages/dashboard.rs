//! Dashboard Page
//!
//! Header with today's date, the six analytics charts and the chat widget.

use leptos::*;

use hotelpulse::{ChartSlot, DashboardController, FetchReport};

use crate::api;
use crate::components::{CancellationRate, ChartImage, ChatWidget, InlineLoading};
use crate::state::DashboardState;

/// Fetch `/analytics` and write the result into the dashboard state
///
/// Failures only reach the console; the charts already shown stay.
fn refresh_analytics(state: DashboardState) {
    state.refreshing.update(|n| *n += 1);

    spawn_local(async move {
        let mut controller = DashboardController::new(api::backend(), state);
        if let FetchReport::Failed(e) = controller.fetch_analytics().await {
            web_sys::console::error_1(&format!("Error fetching analytics: {}", e).into());
        }
        state.refreshing.update(|n| *n = n.saturating_sub(1));
    });
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    // Date label and first analytics fetch on mount
    create_effect(move |_| {
        DashboardController::new(api::backend(), state).initialize_date();
        refresh_analytics(state);
    });

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Hotel Bookings"</h1>
                    <p id="current-date" class="text-gray-400 mt-1">
                        {move || state.date_label.get().unwrap_or_default()}
                    </p>
                </div>

                <button
                    id="analyze-btn"
                    on:click=move |_| refresh_analytics(state)
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium
                           flex items-center space-x-2"
                >
                    {move || (state.refreshing.get() > 0).then(|| view! { <InlineLoading /> })}
                    <span>"Analyze"</span>
                </button>
            </div>

            // Revenue spans the full width
            <ChartImage slot=ChartSlot::Revenue />

            <div class="grid md:grid-cols-2 gap-8">
                <div class="space-y-2">
                    <ChartImage slot=ChartSlot::Gauge />
                    <CancellationRate />
                </div>
                <ChartImage slot=ChartSlot::Country />
                <ChartImage slot=ChartSlot::CustomerSegments />
                <ChartImage slot=ChartSlot::LeadTime />
                <ChartImage slot=ChartSlot::RoomMeal />
                <ChatWidget />
            </div>
        </div>
    }
}
