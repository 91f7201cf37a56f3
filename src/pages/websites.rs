//! Websites Page
//!
//! Tracked websites with their tracking ids. New domains are sanitised and
//! validated locally before the request goes out.

use crm_core::feedback::website_create_message;
use crm_core::models::{display_date, Website, WebsiteDraft};
use crm_core::validation::prepare_domain;
use crm_core::{Draft, Remote};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{CopyButton, RemoteView};
use crate::context::use_auth;
use crate::remote::load;

#[derive(Debug, Clone, PartialEq, Default)]
struct WebsiteInputs {
    domain: String,
    name: String,
}

#[component]
pub fn WebsitesPage() -> impl IntoView {
    let auth = use_auth();
    let websites = RwSignal::new(Remote::<Vec<Website>>::Loading);
    let draft = RwSignal::new(Draft::<WebsiteInputs>::default());
    let (saving, set_saving) = signal(false);

    let api = auth.api();
    load("Websites", websites, async move { api.list_websites().await });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let inputs = draft.with_untracked(|d| d.value.clone());
        let domain = match prepare_domain(&inputs.domain) {
            Ok(domain) => domain,
            Err(message) => {
                draft.update(|d| d.error = Some(message.to_string()));
                return;
            }
        };
        let name = inputs.name.trim();
        let body = WebsiteDraft {
            domain,
            name: (!name.is_empty()).then(|| name.to_string()),
        };

        draft.update(|d| d.error = None);
        set_saving.set(true);
        let api = auth.api();
        spawn_local(async move {
            match api.create_website(&body).await {
                Ok(website) => {
                    tracing::info!("[Websites] Added {}", website.domain);
                    websites.update(|remote| {
                        remote.update(|list| list.push(website));
                    });
                    draft.update(|d| d.cancel());
                }
                Err(e) => {
                    tracing::error!("[Websites] Create failed: {}", e);
                    draft.update(|d| d.error = Some(website_create_message(&e).to_string()));
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h1 class="page-title">"Websites"</h1>
                <Show when=move || !draft.with(|d| d.is_open())>
                    <button class="btn-primary" on:click=move |_| draft.set(Draft::create(WebsiteInputs::default()))>
                        "Add Website"
                    </button>
                </Show>
            </div>

            <Show when=move || draft.with(|d| d.is_open())>
                <form class="card inline-form" on:submit=on_submit>
                    <label class="field">
                        <span>"Domain"</span>
                        <input
                            type="text"
                            placeholder="example.com"
                            prop:value=move || draft.with(|d| d.value.domain.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.value.domain = value);
                            }
                        />
                    </label>
                    <label class="field">
                        <span>"Name (optional)"</span>
                        <input
                            type="text"
                            prop:value=move || draft.with(|d| d.value.name.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.value.name = value);
                            }
                        />
                    </label>
                    {move || draft.with(|d| d.error.clone()).map(|msg| view! { <div class="form-error">{msg}</div> })}
                    <div class="form-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| draft.update(|d| d.cancel())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn-primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Adding..." } else { "Add" }}
                        </button>
                    </div>
                </form>
            </Show>

            <RemoteView state=websites render={|list: Vec<Website>| {
                if list.is_empty() {
                    return view! { <p class="empty">"No websites yet."</p> }.into_any();
                }
                view! {
                    <div class="card list">
                        {list.into_iter().map(|site| view! { <WebsiteRow site=site /> }).collect_view()}
                    </div>
                }
                .into_any()
            }} />
        </div>
    }
}

#[component]
fn WebsiteRow(site: Website) -> impl IntoView {
    let tracking_id = site.tracking_id.clone();
    view! {
        <div class="list-row">
            <div class="list-main">
                <div class="list-title">{site.name.clone().unwrap_or_else(|| site.domain.clone())}</div>
                <div class="list-sub">{site.domain.clone()} " · added " {display_date(&site.created_at)}</div>
            </div>
            <code class="tracking-id">{tracking_id.clone()}</code>
            <CopyButton text=tracking_id />
            {if site.is_active {
                view! { <span class="badge active">"Active"</span> }.into_any()
            } else {
                view! { <span class="badge inactive">"Inactive"</span> }.into_any()
            }}
        </div>
    }
}
