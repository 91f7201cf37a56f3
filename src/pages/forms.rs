//! Forms Page
//!
//! Lead capture forms per website. The website picker starts on the first
//! website; switching it reloads the form list.

use crm_core::models::{display_date, Form, FormDraft, Website};
use crm_core::mutation::commit;
use crm_core::routes::form_path;
use crm_core::Remote;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::browser::BrowserAlert;
use crate::components::RemoteView;
use crate::context::use_auth;
use crate::remote::{load, reload};

#[component]
pub fn FormsPage() -> impl IntoView {
    let auth = use_auth();
    let websites = RwSignal::new(Remote::<Vec<Website>>::Loading);
    let forms = RwSignal::new(Remote::<Vec<Form>>::Loading);
    let selected = RwSignal::new(None::<String>);
    let (new_name, set_new_name) = signal(String::new());

    let api = auth.api();
    load("Forms", websites, async move { api.list_websites().await });

    // Default to the first website once the list arrives
    Effect::new(move |_| {
        let first = websites.with(|w| w.ready().and_then(|list| list.first().map(|s| s.id.clone())));
        if selected.get_untracked().is_none() && first.is_some() {
            selected.set(first);
        }
    });

    Effect::new(move |_| {
        if let Some(website_id) = selected.get() {
            let api = auth.api();
            reload("Forms", forms, async move { api.list_forms(&website_id).await });
        }
    });

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get_untracked();
        let Some(website_id) = selected.get_untracked() else {
            return;
        };
        if name.trim().is_empty() {
            return;
        }
        let draft = FormDraft::contact_form(&name);
        let api = auth.api();
        spawn_local(async move {
            let _ = commit(api.create_form(&website_id, &draft), &BrowserAlert, "Failed to create form", |form| {
                set_new_name.set(String::new());
                // The picker may have moved on while the request was in flight
                if !still_selected(selected.get_untracked().as_deref(), &website_id) {
                    tracing::debug!("[Forms] Created {} for {}; not shown", form.id, website_id);
                    return;
                }
                forms.update(|remote| {
                    remote.update(|list| list.push(form));
                });
            })
            .await;
        });
    };

    view! {
        <div class="page">
            <h1 class="page-title">"Forms"</h1>
            <RemoteView state=websites render={move |sites: Vec<Website>| {
                if sites.is_empty() {
                    return view! { <p class="empty">"Add a website before creating forms."</p> }.into_any();
                }
                view! {
                    <div class="card toolbar">
                        <label class="field inline">
                            <span>"Website"</span>
                            <select on:change=move |ev| selected.set(Some(event_target_value(&ev)))>
                                {sites
                                    .into_iter()
                                    .map(|site| {
                                        let id = site.id.clone();
                                        view! {
                                            <option
                                                value=site.id.clone()
                                                selected=move || selected.with(|s| s.as_deref() == Some(id.as_str()))
                                            >
                                                {site.domain.clone()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </label>
                        <form class="inline-form" on:submit=on_create>
                            <input
                                type="text"
                                placeholder="New form name"
                                prop:value=move || new_name.get()
                                on:input=move |ev| set_new_name.set(event_target_value(&ev))
                            />
                            <button type="submit" class="btn-primary">"Create Form"</button>
                        </form>
                    </div>
                    <RemoteView state=forms render={|list: Vec<Form>| {
                        if list.is_empty() {
                            return view! { <p class="empty">"No forms for this website."</p> }.into_any();
                        }
                        view! {
                            <div class="card list">
                                {list
                                    .into_iter()
                                    .map(|form| view! {
                                        <A href=form_path(&form.id) attr:class="list-row">
                                            <div class="list-main">
                                                <div class="list-title">{form.name.clone()}</div>
                                                <div class="list-sub">
                                                    {format!("{} fields", form.fields.len())}
                                                    " · created "
                                                    {display_date(&form.created_at)}
                                                </div>
                                            </div>
                                        </A>
                                    })
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    }} />
                }
                .into_any()
            }} />
        </div>
    }
}

/// Whether a form created for `website_id` belongs in the list on screen
fn still_selected(selected: Option<&str>, website_id: &str) -> bool {
    selected == Some(website_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_form_only_joins_its_own_website() {
        assert!(still_selected(Some("site-a"), "site-a"));
        assert!(!still_selected(Some("site-b"), "site-a"));
        assert!(!still_selected(None, "site-a"));
    }
}
