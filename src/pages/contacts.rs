//! Contacts Page
//!
//! Contact list with a create/edit modal. The list is only refreshed from the
//! server after a save succeeds.

use crm_core::models::{Contact, ContactDraft, ContactUpdate};
use crm_core::mutation::{commit, remove_entry};
use crm_core::routes::contact_path;
use crm_core::{Draft, Remote};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::browser::BrowserAlert;
use crate::components::{DeleteConfirmButton, Modal, RemoteView};
use crate::context::use_auth;
use crate::remote::load;

/// Raw modal inputs; blank optional fields are trimmed away on submit
#[derive(Debug, Clone, PartialEq, Default)]
struct ContactInputs {
    name: String,
    email: String,
    phone: String,
}

impl From<&Contact> for ContactInputs {
    fn from(contact: &Contact) -> Self {
        Self {
            name: contact.name.clone(),
            email: contact.email.clone().unwrap_or_default(),
            phone: contact.phone.clone().unwrap_or_default(),
        }
    }
}

#[component]
pub fn ContactsPage() -> impl IntoView {
    let auth = use_auth();
    let contacts = RwSignal::new(Remote::<Vec<Contact>>::Loading);
    let draft = RwSignal::new(Draft::<ContactInputs>::default());

    let fetch = move || {
        let api = auth.api();
        load("Contacts", contacts, async move { api.list_contacts().await });
    };
    fetch();

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        if current.value.name.trim().is_empty() {
            draft.update(|d| d.error = Some("Name is required.".into()));
            return;
        }
        let ContactInputs { name, email, phone } = current.value.clone();
        let editing = current.editing().map(str::to_string);
        let api = auth.api();
        spawn_local(async move {
            let saved = match &editing {
                Some(id) => {
                    let update = ContactUpdate::from_inputs(&name, &email, &phone);
                    commit(api.update_contact(id, &update), &BrowserAlert, "Failed to update contact", |_| ()).await
                }
                None => {
                    let body = ContactDraft::from_inputs(&name, &email, &phone);
                    commit(api.create_contact(&body), &BrowserAlert, "Failed to create contact", |_| ()).await
                }
            };
            if saved.is_ok() {
                draft.update(|d| d.cancel());
                fetch();
            }
        });
    };

    let on_delete = move |id: String| {
        let api = auth.api();
        spawn_local(async move {
            let _ = commit(api.delete_contact(&id), &BrowserAlert, "Failed to delete contact", |_| {
                contacts.update(|list| {
                    list.update(|items| {
                        remove_entry(items, &id);
                    });
                });
            })
            .await;
        });
    };

    let set_field = move |apply: fn(&mut ContactInputs, String), ev: web_sys::Event| {
        let value = event_target_value(&ev);
        draft.update(|d| apply(&mut d.value, value));
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h1 class="page-title">"Contacts"</h1>
                <button class="btn-primary" on:click=move |_| draft.set(Draft::create(ContactInputs::default()))>
                    "New Contact"
                </button>
            </div>

            <RemoteView state=contacts render={move |list: Vec<Contact>| {
                if list.is_empty() {
                    return view! { <p class="empty">"No contacts yet."</p> }.into_any();
                }
                view! {
                    <div class="card list">
                        <For
                            each=move || list.clone()
                            key=|contact| contact.id.clone()
                            children=move |contact| {
                                let id = contact.id.clone();
                                let inputs = ContactInputs::from(&contact);
                                let edit_id = contact.id.clone();
                                view! {
                                    <div class="list-row">
                                        <div class="avatar">{contact.initials()}</div>
                                        <A href=contact_path(&contact.id) attr:class="list-main">
                                            <div class="list-title">{contact.name.clone()}</div>
                                            <div class="list-sub">
                                                {contact.email.clone().unwrap_or_default()}
                                                " "
                                                {contact.phone.clone().unwrap_or_default()}
                                            </div>
                                        </A>
                                        <span class=format!("badge status-{}", contact.status.as_str())>
                                            {contact.status.as_str()}
                                        </span>
                                        <button
                                            class="btn-link"
                                            on:click=move |_| draft.set(Draft::edit(edit_id.clone(), inputs.clone()))
                                        >
                                            "Edit"
                                        </button>
                                        <DeleteConfirmButton on_confirm=move |_| on_delete(id.clone()) />
                                    </div>
                                }
                            }
                        />
                    </div>
                }
                .into_any()
            }} />

            <Show when=move || draft.with(|d| d.is_open())>
                <Modal
                    title=Signal::derive(move || {
                        let title = if draft.with(|d| d.editing().is_some()) { "Edit Contact" } else { "New Contact" };
                        title.to_string()
                    })
                    on_close=move |_| draft.update(|d| d.cancel())
                >
                    <form class="modal-form" on:submit=on_save>
                        <label class="field">
                            <span>"Name"</span>
                            <input
                                type="text"
                                prop:value=move || draft.with(|d| d.value.name.clone())
                                on:input=move |ev| set_field(|v, s| v.name = s, ev)
                            />
                        </label>
                        <label class="field">
                            <span>"Email"</span>
                            <input
                                type="email"
                                prop:value=move || draft.with(|d| d.value.email.clone())
                                on:input=move |ev| set_field(|v, s| v.email = s, ev)
                            />
                        </label>
                        <label class="field">
                            <span>"Phone"</span>
                            <input
                                type="tel"
                                prop:value=move || draft.with(|d| d.value.phone.clone())
                                on:input=move |ev| set_field(|v, s| v.phone = s, ev)
                            />
                        </label>
                        {move || draft.with(|d| d.error.clone()).map(|msg| view! { <div class="form-error">{msg}</div> })}
                        <div class="modal-actions">
                            <button type="button" class="btn-secondary" on:click=move |_| draft.update(|d| d.cancel())>
                                "Cancel"
                            </button>
                            <button type="submit" class="btn-primary">"Save"</button>
                        </div>
                    </form>
                </Modal>
            </Show>
        </div>
    }
}
