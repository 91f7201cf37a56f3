//! Remote View Component
//!
//! Renders a [`Remote`] resource: a loading line, an inline error banner, or
//! the ready value.

use crm_core::Remote;
use leptos::prelude::*;

#[component]
pub fn RemoteView<T, F, V>(state: RwSignal<Remote<T>>, render: F) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    F: Fn(T) -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    move || match state.get() {
        Remote::Loading => view! { <div class="loading">"Loading..."</div> }.into_any(),
        Remote::Failed(message) => view! { <ErrorBanner message=message /> }.into_any(),
        Remote::Ready(value) => render(value).into_any(),
    }
}

#[component]
pub fn ErrorBanner(#[prop(into)] message: String) -> impl IntoView {
    view! { <div class="error-banner" role="alert">{message}</div> }
}
