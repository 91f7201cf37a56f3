use leptos::prelude::*;

#[component]
pub fn StatCard(#[prop(into)] title: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-title">{title}</div>
            <div class="stat-value">{value}</div>
        </div>
    }
}
