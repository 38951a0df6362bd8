//! Top navigation bar linking the builder, history, and stats pages.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"Automation Prompt Generator"</span>
            <div class="nav-bar__links">
                <A href="/">"Builder"</A>
                <A href="/history">"History"</A>
                <A href="/stats">"Stats"</A>
            </div>
        </nav>
    }
}
