//! Stats panel: usage counters fetched on mount.

use leptos::prelude::*;

use crate::net::types::StatsSummary;
use crate::util::format::avg_per_day;

/// Fetches `/api/prompts/stats` on mount and renders three counters: total
/// prompts, recent prompts with the period label, and the client-derived
/// average per day. A fetch failure shows an inline error block.
#[component]
pub fn StatsPanel() -> impl IntoView {
    let stats = LocalResource::new(|| crate::net::api::fetch_stats());

    view! {
        <div class="stats-panel">
            <Suspense fallback=move || view! { <p>"Loading statistics..."</p> }>
                {move || {
                    stats
                        .get()
                        .map(|result| match result {
                            Err(err) => {
                                log::error!("stats load failed: {err}");
                                view! {
                                    <div class="alert alert--danger">
                                        "Error loading statistics. Please try again."
                                    </div>
                                }
                                    .into_any()
                            }
                            Ok(summary) => render_stats(&summary).into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

fn render_stats(summary: &StatsSummary) -> impl IntoView {
    let avg = avg_per_day(summary.total_prompts);

    view! {
        <div class="stats-panel__grid">
            <StatCard
                value=summary.total_prompts.to_string()
                label="Total Prompts Generated".to_owned()
            />
            <StatCard
                value=summary.recent_prompts.to_string()
                label=format!("Recent Prompts ({})", summary.period)
            />
            <StatCard value=avg.to_string() label="Average per Day".to_owned()/>
        </div>
    }
}

#[component]
fn StatCard(value: String, label: String) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
