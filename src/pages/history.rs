//! History page: list of previously generated prompts.

use leptos::prelude::*;

use crate::components::history_list::HistoryList;

#[component]
pub fn HistoryPage() -> impl IntoView {
    view! {
        <div class="history-page">
            <h1>"Prompt History"</h1>
            <HistoryList/>
        </div>
    }
}
