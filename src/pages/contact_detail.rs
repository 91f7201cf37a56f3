//! Contact Detail Page
//!
//! Contact card, the contact's deals, and the activity timeline. Summary and
//! timeline are fetched together; either failing shows only the error.

use crm_core::models::{
    display_date, display_datetime, format_money, Activity, ActivityDraft, ActivityType,
    ActivityUpdate, ContactSummary,
};
use crm_core::mutation::{commit, prepend_entry, remove_entry, replace_entry};
use crm_core::{ApiError, Remote};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;

use crate::browser::{self, BrowserAlert};
use crate::components::{DeleteConfirmButton, RemoteView};
use crate::context::use_auth;
use crate::remote::reload;

#[derive(Debug, Clone, PartialEq)]
struct ContactView {
    summary: ContactSummary,
    activities: Vec<Activity>,
}

#[component]
pub fn ContactDetailPage() -> impl IntoView {
    let auth = use_auth();
    let params = use_params_map();
    let navigate = use_navigate();
    let contact_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let state = RwSignal::new(Remote::<ContactView>::Loading);

    Effect::new(move |_| {
        let id = contact_id.get();
        let api = auth.api();
        reload("Contact", state, async move {
            let (summary, activities) =
                futures::try_join!(api.contact_summary(&id), api.list_activities(&id))?;
            Ok::<_, ApiError>(ContactView { summary, activities })
        });
    });

    let (deleted, set_deleted) = signal(false);
    Effect::new(move |_| {
        if deleted.get() {
            navigate("/contacts", NavigateOptions::default());
        }
    });

    let on_delete_contact = move |_| {
        if !browser::confirm("Delete this contact? This cannot be undone.") {
            return;
        }
        let id = contact_id.get_untracked();
        let api = auth.api();
        spawn_local(async move {
            let _ = commit(api.delete_contact(&id), &BrowserAlert, "Failed to delete contact", |_| {
                set_deleted.set(true);
            })
            .await;
        });
    };

    view! {
        <div class="page">
            <A href="/contacts" attr:class="back-link">"← Back to Contacts"</A>
            <RemoteView state=state render=move |data: ContactView| {
                let summary = data.summary;
                let contact = summary.contact.clone();
                view! {
                    <div class="page-header">
                        <div class="contact-heading">
                            <div class="avatar large">{contact.initials()}</div>
                            <div>
                                <h1 class="page-title">{contact.name.clone()}</h1>
                                <div class="list-sub">"Added " {display_date(&contact.created_at)}</div>
                            </div>
                        </div>
                        <button class="btn-secondary danger" on:click=on_delete_contact>"Delete Contact"</button>
                    </div>

                    <div class="detail-grid">
                        <section class="card">
                            <h2>"Details"</h2>
                            <dl class="details">
                                <dt>"Email"</dt><dd>{contact.email.clone().unwrap_or_else(|| "-".into())}</dd>
                                <dt>"Phone"</dt><dd>{contact.phone.clone().unwrap_or_else(|| "-".into())}</dd>
                                <dt>"Source"</dt><dd>{contact.source.clone().unwrap_or_else(|| "-".into())}</dd>
                                <dt>"Status"</dt><dd>{contact.status.as_str()}</dd>
                                <dt>"Pipeline"</dt><dd>{format_money(summary.total_pipeline_value)}</dd>
                            </dl>
                        </section>

                        <section class="card">
                            <h2>"Deals"</h2>
                            {if summary.deals.is_empty() {
                                view! { <p class="empty">"No deals for this contact."</p> }.into_any()
                            } else {
                                summary.deals.iter().map(|deal| view! {
                                    <div class="list-row compact">
                                        <span class="list-title">{deal.title.clone()}</span>
                                        <span class="badge">{deal.stage.as_str()}</span>
                                        <span>{format_money(deal.value)}</span>
                                    </div>
                                }).collect_view().into_any()
                            }}
                        </section>
                    </div>

                    <section class="card">
                        <h2>"Activity"</h2>
                        <LogActivityForm contact_id=contact.id.clone() state=state />
                        <Timeline state=state />
                    </section>
                }
            } />
        </div>
    }
}

#[component]
fn LogActivityForm(contact_id: String, state: RwSignal<Remote<ContactView>>) -> impl IntoView {
    let auth = use_auth();
    let (kind, set_kind) = signal(ActivityType::Note);
    let (content, set_content) = signal(String::new());
    let contact_id = StoredValue::new(contact_id);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = content.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        let draft = ActivityDraft {
            contact_id: contact_id.get_value(),
            kind: kind.get_untracked(),
            content: Some(text.trim().to_string()),
        };
        let api = auth.api();
        spawn_local(async move {
            let _ = commit(api.create_activity(&draft), &BrowserAlert, "Failed to log activity", |activity| {
                state.update(|remote| {
                    remote.update(|view| prepend_entry(&mut view.activities, activity));
                });
                set_content.set(String::new());
            })
            .await;
        });
    };

    view! {
        <form class="activity-form" on:submit=on_submit>
            <select on:change=move |ev| set_kind.set(event_target_value(&ev).parse::<ActivityType>().unwrap_or_default())>
                {ActivityType::LOGGABLE
                    .iter()
                    .map(|t| {
                        let t = *t;
                        view! {
                            <option value=t.as_str() selected=move || kind.get() == t>
                                {t.as_str()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <textarea
                placeholder="What happened?"
                prop:value=move || content.get()
                on:input=move |ev| set_content.set(event_target_value(&ev))
            ></textarea>
            <button type="submit" class="btn-primary">"Log Activity"</button>
        </form>
    }
}

#[component]
fn Timeline(state: RwSignal<Remote<ContactView>>) -> impl IntoView {
    let auth = use_auth();
    let editing = RwSignal::new(None::<String>);
    let edit_text = RwSignal::new(String::new());

    let activities = move || {
        state.with(|remote| remote.ready().map(|v| v.activities.clone()).unwrap_or_default())
    };

    let on_delete = move |id: String| {
        let api = auth.api();
        spawn_local(async move {
            let _ = commit(api.delete_activity(&id), &BrowserAlert, "Failed to delete activity", |_| {
                state.update(|remote| {
                    remote.update(|view| {
                        remove_entry(&mut view.activities, &id);
                    });
                });
            })
            .await;
        });
    };

    let on_save_edit = move |id: String| {
        let update = ActivityUpdate { kind: None, content: Some(edit_text.get_untracked()) };
        let api = auth.api();
        spawn_local(async move {
            let _ = commit(api.update_activity(&id, &update), &BrowserAlert, "Failed to update activity", |activity| {
                state.update(|remote| {
                    remote.update(|view| {
                        replace_entry(&mut view.activities, activity);
                    });
                });
                editing.set(None);
            })
            .await;
        });
    };

    view! {
        <ul class="timeline">
            <Show when=move || activities().is_empty()>
                <li class="empty">"No activity yet."</li>
            </Show>
            <For
                each=activities
                key=|activity| (activity.id.clone(), activity.content.clone())
                children=move |activity: Activity| {
                    let id = activity.id.clone();
                    let delete_id = activity.id.clone();
                    let save_id = activity.id.clone();
                    let original = activity.content.clone().unwrap_or_default();
                    let is_editing = {
                        let id = id.clone();
                        move || editing.with(|e| e.as_deref() == Some(id.as_str()))
                    };
                    view! {
                        <li class=format!("timeline-item type-{}", activity.kind.as_str())>
                            <div class="timeline-meta">
                                <span class="badge">{activity.kind.as_str()}</span>
                                <span class="timeline-date">{display_datetime(&activity.created_at)}</span>
                            </div>
                            <Show
                                when=is_editing
                                fallback=move || view! { <p class="timeline-content">{original.clone()}</p> }
                            >
                                <textarea
                                    prop:value=move || edit_text.get()
                                    on:input=move |ev| edit_text.set(event_target_value(&ev))
                                ></textarea>
                                <button class="btn-primary" on:click={
                                    let save_id = save_id.clone();
                                    move |_| on_save_edit(save_id.clone())
                                }>"Save"</button>
                                <button class="btn-secondary" on:click=move |_| editing.set(None)>"Cancel"</button>
                            </Show>
                            <div class="timeline-actions">
                                <button class="btn-link" on:click={
                                    let id = id.clone();
                                    let text = activity.content.clone().unwrap_or_default();
                                    move |_| {
                                        edit_text.set(text.clone());
                                        editing.set(Some(id.clone()));
                                    }
                                }>"Edit"</button>
                                <DeleteConfirmButton on_confirm=move |_| on_delete(delete_id.clone()) />
                            </div>
                        </li>
                    }
                }
            />
        </ul>
    }
}
