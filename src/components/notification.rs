//! Transient notification banner with auto-dismiss.

use leptos::prelude::*;

use crate::state::notify::NotifyState;

#[cfg(feature = "web")]
use crate::state::notify::AUTO_DISMISS_MS;

/// Hosts the single active notification.
///
/// Showing a new notification replaces the current one, so at most one
/// banner is ever on screen. Each notification auto-dismisses after
/// `AUTO_DISMISS_MS`; the id guard in `NotifyState::dismiss` keeps a timer
/// scheduled for an older notification from clearing a newer one.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    Effect::new(move || {
        let Some(id) = notify.get().current.as_ref().map(|n| n.id) else {
            return;
        };
        #[cfg(feature = "web")]
        {
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
                notify.update(|s| s.dismiss(id));
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = id;
    });

    view! {
        {move || {
            notify.get().current.map(|n| {
                let id = n.id;
                let class = format!("alert alert--{}", n.severity.css_class());
                view! {
                    <div class=class role="alert">
                        <span class="alert__message">{n.message}</span>
                        <button
                            class="alert__close"
                            aria-label="Close"
                            on:click=move |_| notify.update(|s| s.dismiss(id))
                        >
                            "×"
                        </button>
                    </div>
                }
            })
        }}
    }
}
