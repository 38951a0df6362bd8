//! Template gallery: one card per catalog entry.

use leptos::prelude::*;

use crate::state::notify::NotifyState;
use crate::state::prompt::PromptState;
use crate::state::templates::{CATALOG, TemplateDescriptor};
use crate::state::ui::UiState;

#[cfg(feature = "web")]
use crate::state::notify::Severity;
#[cfg(feature = "web")]
use crate::state::ui::Tab;

/// Grid of template cards in catalog order. Clicking a card loads the
/// template prompt through the template endpoint.
#[component]
pub fn TemplateGallery() -> impl IntoView {
    view! {
        <div class="template-gallery">
            {CATALOG
                .iter()
                .map(|template| view! { <TemplateCard template/> })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn TemplateCard(template: &'static TemplateDescriptor) -> impl IntoView {
    let prompt = expect_context::<RwSignal<PromptState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_use = move |_| {
        #[cfg(feature = "web")]
        {
            prompt.update(|p| p.loading = true);
            leptos::task::spawn_local(async move {
                match crate::net::api::use_template(template.key).await {
                    Ok(text) => {
                        prompt.update(|p| p.generated = Some(text));
                        // Jump back to the builder tab so the prompt is visible.
                        ui.update(|u| u.active_tab = Tab::Builder);
                        notify.update(|s| {
                            s.show("Template loaded successfully!", Severity::Success);
                        });
                    }
                    Err(err) => {
                        log::error!("template load failed: {err}");
                        notify.update(|s| {
                            s.show("Error loading template. Please try again.", Severity::Danger);
                        });
                    }
                }
                prompt.update(|p| p.loading = false);
            });
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (prompt, notify, ui);
        }
    };

    view! {
        <div class="template-card" on:click=on_use>
            <h3 class="template-card__title">{template.title}</h3>
            <p class="template-card__description">{template.description}</p>
            <button type="button" class="btn btn--primary btn--sm">
                "Use Template"
            </button>
        </div>
    }
}
