//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::notification::NotificationHost;
use crate::pages::{builder::BuilderPage, history::HistoryPage, stats::StatsPage};
use crate::state::{form::FormState, notify::NotifyState, prompt::PromptState, ui::UiState};

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing. The
/// three routes mirror the backend's web pages: builder, history, stats.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let form = RwSignal::new(FormState::default());
    let prompt = RwSignal::new(PromptState::default());
    let notify = RwSignal::new(NotifyState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(form);
    provide_context(prompt);
    provide_context(notify);
    provide_context(ui);

    view! {
        <Title text="Automation Prompt Generator"/>

        <Router>
            <NavBar/>
            <NotificationHost/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=BuilderPage/>
                    <Route path=StaticSegment("history") view=HistoryPage/>
                    <Route path=StaticSegment("stats") view=StatsPage/>
                </Routes>
            </main>
        </Router>
    }
}
