//! App Chrome
//!
//! Top navigation for signed-in views: brand, links highlighted by path
//! prefix, logout, and a collapsible menu for narrow screens.

use crm_core::routes::{is_active, NAV_ITEMS};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::context::use_auth;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let auth = use_auth();
    let pathname = use_location().pathname;
    let (menu_open, set_menu_open) = signal(false);

    // Collapse the mobile menu after navigating
    Effect::new(move |_| {
        pathname.track();
        set_menu_open.set(false);
    });

    // The guard around this view redirects to sign-in once the session clears
    let logout = move |_| {
        set_menu_open.set(false);
        auth.logout();
    };

    let nav_links = move |mobile: bool| {
        NAV_ITEMS
            .iter()
            .map(|item| {
                let href = item.href;
                let class = move || {
                    let base = if mobile { "mobile-nav-link" } else { "nav-link" };
                    if is_active(&pathname.get(), href) {
                        format!("{} active", base)
                    } else {
                        base.to_string()
                    }
                };
                view! {
                    <A href=href attr:class=class>
                        {item.name}
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <div class="app-shell">
            <nav class="top-nav">
                <div class="brand">"CRM"</div>
                <div class="nav-links">{nav_links(false)}</div>
                <button class="btn-secondary logout-btn" on:click=logout>"Logout"</button>
                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </nav>
            <Show when=move || menu_open.get()>
                <div class="mobile-menu">
                    {nav_links(true)}
                    <button class="btn-secondary" on:click=logout>"Logout"</button>
                </div>
            </Show>
            <main class="content">{children()}</main>
        </div>
    }
}
