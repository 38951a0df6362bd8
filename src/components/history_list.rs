//! History list: prior generations fetched on mount.

use leptos::prelude::*;

use crate::net::types::HistoryEntry;
use crate::util::format::format_timestamp;

/// Fetches `/api/prompts/history` on mount and rebuilds the list from
/// scratch on each load. Entries render in server order. A fetch failure
/// shows an inline error block instead of a notification.
#[component]
pub fn HistoryList() -> impl IntoView {
    let entries = LocalResource::new(|| crate::net::api::fetch_history());

    view! {
        <div class="history-list">
            <Suspense fallback=move || view! { <p>"Loading history..."</p> }>
                {move || {
                    entries
                        .get()
                        .map(|result| match result {
                            Err(err) => {
                                log::error!("history load failed: {err}");
                                view! {
                                    <div class="alert alert--danger">
                                        "Error loading history. Please try again."
                                    </div>
                                }
                                    .into_any()
                            }
                            Ok(list) if list.is_empty() => {
                                view! {
                                    <div class="alert alert--info">"No prompt history found."</div>
                                }
                                    .into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <div class="history-list__entries">
                                        {list
                                            .into_iter()
                                            .map(|entry| view! { <HistoryCard entry/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn HistoryCard(entry: HistoryEntry) -> impl IntoView {
    let created = format_timestamp(&entry.created_at);

    view! {
        <div class="history-card">
            <div class="history-card__header">
                <strong>{entry.feature_name}</strong>
                <small class="history-card__when">{created}</small>
            </div>
            <div class="history-card__body">
                <p>
                    <strong>"Type: "</strong>
                    {entry.test_type}
                    " | "
                    <strong>"Framework: "</strong>
                    {entry.framework}
                </p>
                <details>
                    <summary>"View Generated Prompt"</summary>
                    <pre class="history-card__prompt">{entry.generated_prompt}</pre>
                </details>
            </div>
        </div>
    }
}
