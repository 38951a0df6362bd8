//! Stats page: usage counters for generated prompts.

use leptos::prelude::*;

use crate::components::stats_panel::StatsPanel;

#[component]
pub fn StatsPage() -> impl IntoView {
    view! {
        <div class="stats-page">
            <h1>"Usage Statistics"</h1>
            <StatsPanel/>
        </div>
    }
}
