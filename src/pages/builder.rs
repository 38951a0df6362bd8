//! Builder page: prompt form, template gallery, and generated output.

use leptos::prelude::*;

use crate::components::builder_form::BuilderForm;
use crate::components::output_panel::OutputPanel;
use crate::components::template_gallery::TemplateGallery;
use crate::state::ui::{Tab, UiState};

/// Main page with a Builder/Templates tab switch. Loading a template
/// switches back to the builder tab so the prompt output is visible.
#[component]
pub fn BuilderPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="builder-page">
            <div class="builder-page__tabs">
                <TabButton tab=Tab::Builder label="Prompt Builder"/>
                <TabButton tab=Tab::Templates label="Quick Templates"/>
            </div>

            <Show when=move || ui.get().active_tab == Tab::Builder>
                <BuilderForm/>
                <OutputPanel/>
            </Show>
            <Show when=move || ui.get().active_tab == Tab::Templates>
                <TemplateGallery/>
            </Show>
        </div>
    }
}

#[component]
fn TabButton(tab: Tab, label: &'static str) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            class="tab"
            class:tab--active=move || ui.get().active_tab == tab
            on:click=move |_| ui.update(|u| u.active_tab = tab)
        >
            {label}
        </button>
    }
}
