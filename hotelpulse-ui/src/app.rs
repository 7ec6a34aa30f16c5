//! App Root Component

use leptos::*;

use crate::pages::Dashboard;
use crate::state::provide_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_state();

    view! {
        <div class="min-h-screen bg-gray-900 text-white">
            <main class="container mx-auto px-4 py-8">
                <Dashboard />
            </main>
        </div>
    }
}
