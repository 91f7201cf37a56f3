//! Route Guard Components
//!
//! The guard decision is re-evaluated on every session change, so a 401 that
//! clears the session bounces the user to sign-in without a reload.

use crm_core::routes::{fallback_redirect, guard, AppRoute, RouteDecision};
use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;
use leptos_router::NavigateOptions;

use crate::components::Layout;
use crate::context::use_auth;

/// Render `children` inside the app chrome, or redirect to sign-in
#[component]
pub fn Protected(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    move || match guard(route, auth.is_authenticated()) {
        RouteDecision::Render => {
            let children = children.clone();
            view! { <Layout>{children()}</Layout> }.into_any()
        }
        RouteDecision::Redirect { to, replace } => {
            tracing::debug!("[Guard] {:?} requires a session, redirecting", route);
            let options = NavigateOptions { replace, ..Default::default() };
            view! { <Redirect path=to options=options /> }.into_any()
        }
    }
}

/// Unmatched paths: `/` goes home, everything else to sign-in
#[component]
pub fn RouteFallback() -> impl IntoView {
    let location = use_location();
    let target = fallback_redirect(&location.pathname.get_untracked());
    let options = NavigateOptions { replace: true, ..Default::default() };
    view! { <Redirect path=target options=options /> }
}
