//! Copy Button Component

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;

const COPIED_FEEDBACK_MS: u32 = 2000;

/// Copies `text` to the clipboard and reads "Copied!" for two seconds.
#[component]
pub fn CopyButton(
    #[prop(into)] text: Signal<String>,
    #[prop(default = "Copy")] label: &'static str,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let on_click = move |_| {
        let text = text.get_untracked();
        spawn_local(async move {
            match browser::copy_text(&text).await {
                Ok(()) => {
                    set_copied.set(true);
                    TimeoutFuture::new(COPIED_FEEDBACK_MS).await;
                    let _ = set_copied.try_set(false);
                }
                Err(e) => tracing::warn!("[Clipboard] {}", e),
            }
        });
    };

    view! {
        <button type="button" class="btn-secondary copy-btn" on:click=on_click>
            {move || if copied.get() { "Copied!" } else { label }}
        </button>
    }
}
