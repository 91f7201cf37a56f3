//! Deals Page
//!
//! Kanban board with one column per stage. Cards advance one stage at a time
//! through [`move_stage`]; the card only moves once the server has accepted
//! the new stage.

use crm_core::models::{format_money, Deal, DealDraft, DealStage};
use crm_core::mutation::{commit, move_stage};
use crm_core::{ApiError, Draft, Remote};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser::BrowserAlert;
use crate::components::{DeleteConfirmButton, Modal, RemoteView};
use crate::context::use_auth;
use crate::remote::load;
use crate::store::{
    store_contact_name, store_contacts, store_deals_in, store_first_contact_id, store_load,
    store_merge_stage, store_remove_deal, store_save_deal, BoardState, BoardStore,
};

#[component]
pub fn DealsPage() -> impl IntoView {
    let auth = use_auth();
    let store = BoardStore::new(BoardState::default());
    let status = RwSignal::new(Remote::<()>::Loading);
    let draft = RwSignal::new(Draft::<DealDraft>::default());

    let api = auth.api();
    load("Deals", status, async move {
        let (deals, contacts) = futures::try_join!(api.list_deals(), api.list_contacts())?;
        // Store and status share an owner; both are gone once the page is left
        if !status.is_disposed() {
            store_load(&store, deals, contacts);
        }
        Ok::<_, ApiError>(())
    });

    let open_create = move |_| {
        let value = DealDraft {
            contact_id: store_first_contact_id(&store),
            ..DealDraft::default()
        };
        draft.set(Draft::create(value));
    };

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        let error = if current.value.title.trim().is_empty() {
            Some("Title is required.")
        } else if current.value.contact_id.is_empty() {
            Some("Select a contact first.")
        } else {
            None
        };
        if let Some(error) = error {
            draft.update(|d| d.error = Some(error.to_string()));
            return;
        }

        let Some(mut body) = current.submission().cloned() else {
            return;
        };
        body.title = body.title.trim().to_string();
        let api = auth.api();
        spawn_local(async move {
            let saved = match current.editing() {
                Some(id) => {
                    commit(api.update_deal(id, &body), &BrowserAlert, "Failed to update deal", |deal| {
                        store_save_deal(&store, &current, deal)
                    })
                    .await
                }
                None => {
                    commit(api.create_deal(&body), &BrowserAlert, "Failed to create deal", |deal| {
                        store_save_deal(&store, &current, deal)
                    })
                    .await
                }
            };
            if saved.is_ok() {
                draft.update(|d| d.cancel());
            }
        });
    };

    let on_delete = move |id: String| {
        let api = auth.api();
        spawn_local(async move {
            let _ = commit(api.delete_deal(&id), &BrowserAlert, "Failed to delete deal", |_| {
                store_remove_deal(&store, &id)
            })
            .await;
        });
    };

    let on_advance = move |deal: Deal| {
        let Some(next) = deal.stage.next() else {
            return;
        };
        let api = auth.api();
        spawn_local(async move {
            let moved = move_stage(&api, &BrowserAlert, &deal, next, |id, stage| {
                store_merge_stage(&store, id, stage)
            })
            .await;
            if let Err(e) = moved {
                tracing::warn!("[Deals] Stage move for {} not applied: {}", deal.id, e);
            }
        });
    };

    let on_edit = move |deal: Deal| draft.set(Draft::edit(deal.id.clone(), DealDraft::from(&deal)));

    view! {
        <div class="page">
            <div class="page-header">
                <h1 class="page-title">"Deals"</h1>
                <button class="btn-primary" on:click=open_create>"New Deal"</button>
            </div>

            <RemoteView state=status render=move |_: ()| view! {
                <div class="kanban">
                    {DealStage::ALL
                        .into_iter()
                        .map(|stage| view! {
                            <StageColumn
                                stage=stage
                                store=store
                                on_edit=on_edit
                                on_delete=on_delete
                                on_advance=on_advance
                            />
                        })
                        .collect_view()}
                </div>
            } />

            <Show when=move || draft.with(|d| d.is_open())>
                <DealModal draft=draft store=store on_save=on_save />
            </Show>
        </div>
    }
}

#[component]
fn StageColumn(
    stage: DealStage,
    store: BoardStore,
    #[prop(into)] on_edit: Callback<Deal>,
    #[prop(into)] on_delete: Callback<String>,
    #[prop(into)] on_advance: Callback<Deal>,
) -> impl IntoView {
    let deals = move || store_deals_in(&store, stage);
    let total = move || format_money(deals().iter().map(|d| d.value).sum());

    view! {
        <div class=format!("kanban-column stage-{}", stage.as_str().to_lowercase())>
            <div class="kanban-header">
                <span class="kanban-title">{stage.as_str()}</span>
                <span class="kanban-count">{move || deals().len()}</span>
                <span class="kanban-total">{total}</span>
            </div>
            <For
                each=deals
                key=|deal| (deal.id.clone(), deal.title.clone(), deal.value.to_bits(), deal.contact_id.clone())
                children=move |deal: Deal| {
                    let contact = store_contact_name(&store, &deal.contact_id).unwrap_or_default();
                    let delete_id = deal.id.clone();
                    let edit_deal = deal.clone();
                    let advance_deal = deal.clone();
                    view! {
                        <div class="kanban-card">
                            <div class="kanban-card-title">{deal.title.clone()}</div>
                            <div class="kanban-card-value">{format_money(deal.value)}</div>
                            <div class="kanban-card-contact">{contact}</div>
                            <div class="kanban-card-actions">
                                <button class="btn-link" on:click=move |_| on_edit.run(edit_deal.clone())>"Edit"</button>
                                <DeleteConfirmButton on_confirm=move |_| on_delete.run(delete_id.clone()) />
                                <Show when=move || !stage.is_terminal()>
                                    <button
                                        class="btn-link next-stage"
                                        on:click={
                                            let deal = advance_deal.clone();
                                            move |_| on_advance.run(deal.clone())
                                        }
                                    >
                                        "Next →"
                                    </button>
                                </Show>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[component]
fn DealModal<F>(draft: RwSignal<Draft<DealDraft>>, store: BoardStore, on_save: F) -> impl IntoView
where
    F: Fn(web_sys::SubmitEvent) + Send + Sync + 'static,
{
    let title = move || {
        let title = if draft.with(|d| d.editing().is_some()) { "Edit Deal" } else { "New Deal" };
        title.to_string()
    };

    view! {
        <Modal title=Signal::derive(title) on_close=move |_| draft.update(|d| d.cancel())>
            <form class="modal-form" on:submit=on_save>
                <label class="field">
                    <span>"Title"</span>
                    <input
                        type="text"
                        prop:value=move || draft.with(|d| d.value.title.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.value.title = value);
                        }
                    />
                </label>
                <label class="field">
                    <span>"Value"</span>
                    <input
                        type="number"
                        min="0"
                        step="any"
                        prop:value=move || draft.with(|d| d.value.value.to_string())
                        on:input=move |ev| {
                            let value = event_target_value(&ev).parse::<f64>().unwrap_or(0.0);
                            draft.update(|d| d.value.value = value);
                        }
                    />
                </label>
                <label class="field">
                    <span>"Stage"</span>
                    <select on:change=move |ev| {
                        if let Ok(stage) = event_target_value(&ev).parse::<DealStage>() {
                            draft.update(|d| d.value.stage = stage);
                        }
                    }>
                        {DealStage::ALL
                            .into_iter()
                            .map(|stage| view! {
                                <option
                                    value=stage.as_str()
                                    selected=move || draft.with(|d| d.value.stage == stage)
                                >
                                    {stage.as_str()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </label>
                <label class="field">
                    <span>"Contact"</span>
                    <select on:change=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.value.contact_id = value);
                    }>
                        {move || {
                            store_contacts(&store)
                                .into_iter()
                                .map(|contact| {
                                    let id = contact.id.clone();
                                    view! {
                                        <option
                                            value=contact.id.clone()
                                            selected=move || draft.with(|d| d.value.contact_id == id)
                                        >
                                            {contact.name.clone()}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
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
    }
}
