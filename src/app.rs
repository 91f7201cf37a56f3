//! CRM Frontend App
//!
//! Provides the session and API configuration, then maps every route to its
//! view. All routes except sign-in sit behind [`Protected`].

use crm_core::routes::AppRoute;
use crm_core::ApiConfig;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{Protected, RouteFallback};
use crate::context::AuthContext;
use crate::pages::{
    AuthPage, ContactDetailPage, ContactsPage, DashboardPage, DealsPage, FormDetailPage, FormsPage,
    WebsitesPage,
};

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_env();
    tracing::info!("[APP] API base {}", config.api_base());

    provide_context(AuthContext::new(config));

    view! {
        <Router>
            <Routes fallback=|| view! { <RouteFallback /> }>
                <Route path=path!("/auth") view=AuthPage />
                <Route
                    path=path!("/dashboard")
                    view=|| view! { <Protected route=AppRoute::Dashboard><DashboardPage /></Protected> }
                />
                <Route
                    path=path!("/contacts")
                    view=|| view! { <Protected route=AppRoute::Contacts><ContactsPage /></Protected> }
                />
                <Route
                    path=path!("/contacts/:id")
                    view=|| view! { <Protected route=AppRoute::ContactDetail><ContactDetailPage /></Protected> }
                />
                <Route
                    path=path!("/deals")
                    view=|| view! { <Protected route=AppRoute::Deals><DealsPage /></Protected> }
                />
                <Route
                    path=path!("/websites")
                    view=|| view! { <Protected route=AppRoute::Websites><WebsitesPage /></Protected> }
                />
                <Route
                    path=path!("/forms")
                    view=|| view! { <Protected route=AppRoute::Forms><FormsPage /></Protected> }
                />
                <Route
                    path=path!("/forms/:id")
                    view=|| view! { <Protected route=AppRoute::FormDetail><FormDetailPage /></Protected> }
                />
            </Routes>
        </Router>
    }
}
