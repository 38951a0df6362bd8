//! Output panel: shows the generated prompt with copy and download actions.

use leptos::prelude::*;

use crate::state::form::FormState;
use crate::state::notify::{NotifyState, Severity};
use crate::state::prompt::PromptState;
use crate::util::export::filename_for;

/// Reveals itself once a prompt has been generated and overwrites its
/// contents on each new response; a later response simply replaces whatever
/// is currently shown.
#[component]
pub fn OutputPanel() -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();
    let prompt = expect_context::<RwSignal<PromptState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();

    let section_ref = NodeRef::<leptos::html::Section>::new();
    let textarea_ref = NodeRef::<leptos::html::Textarea>::new();

    // Bring the output into view each time a new prompt lands.
    Effect::new(move || {
        if prompt.get().generated.is_none() {
            return;
        }
        #[cfg(feature = "web")]
        {
            if let Some(el) = section_ref.get() {
                el.scroll_into_view();
            }
        }
    });

    let on_copy = move |_| {
        let text = prompt.get_untracked().generated.unwrap_or_default();
        if text.trim().is_empty() {
            notify.update(|s| s.show("No prompt to copy", Severity::Warning));
            return;
        }
        #[cfg(feature = "web")]
        {
            leptos::task::spawn_local(async move {
                let fallback = textarea_ref.get_untracked();
                if crate::util::export::copy_to_clipboard(&text, fallback.as_ref()).await {
                    notify.update(|s| s.show("Prompt copied to clipboard!", Severity::Success));
                } else {
                    notify.update(|s| s.show("Could not copy to clipboard", Severity::Warning));
                }
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = text;
    };

    let on_download = move |_| {
        let text = prompt.get_untracked().generated.unwrap_or_default();
        if text.trim().is_empty() {
            notify.update(|s| s.show("No prompt to download", Severity::Warning));
            return;
        }
        let filename = filename_for(&form.get_untracked().feature_name);
        #[cfg(feature = "web")]
        {
            if crate::util::export::download_as_file(&text, &filename) {
                notify.update(|s| s.show("Prompt downloaded successfully!", Severity::Success));
            } else {
                notify.update(|s| s.show("Error downloading prompt", Severity::Danger));
            }
        }
        #[cfg(not(feature = "web"))]
        let _ = (text, filename);
    };

    view! {
        <Show when=move || prompt.get().generated.is_some()>
            <section class="output-panel" node_ref=section_ref>
                <h2 class="output-panel__title">"Generated Prompt"</h2>
                <textarea
                    class="output-panel__text"
                    readonly=true
                    node_ref=textarea_ref
                    prop:value=move || prompt.get().generated.unwrap_or_default()
                ></textarea>
                <div class="output-panel__actions">
                    <button class="btn" on:click=on_copy>
                        "📋 Copy to Clipboard"
                    </button>
                    <button class="btn" on:click=on_download>
                        "💾 Download"
                    </button>
                </div>
            </section>
        </Show>
    }
}
