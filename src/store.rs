//! Deal Board Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity on the kanban:
//! moving one card only re-renders the columns reading `deals`.

use crm_core::models::{Contact, Deal, DealDraft, DealStage};
use crm_core::mutation::{merge_stage, remove_entry};
use crm_core::Draft;
use leptos::prelude::*;
use reactive_stores::Store;

#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    pub deals: Vec<Deal>,
    /// Options for the deal modal's contact picker
    pub contacts: Vec<Contact>,
}

pub type BoardStore = Store<BoardState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_load(store: &BoardStore, deals: Vec<Deal>, contacts: Vec<Contact>) {
    *store.deals().write() = deals;
    *store.contacts().write() = contacts;
}

/// Merge a saved deal: replaces the edited card or appends a new one
pub fn store_save_deal(store: &BoardStore, draft: &Draft<DealDraft>, deal: Deal) {
    let deals_field = store.deals();
    let mut deals = deals_field.write();
    draft.merge_saved(&mut *deals, deal);
}

pub fn store_remove_deal(store: &BoardStore, id: &str) {
    remove_entry(&mut store.deals().write(), id);
}

pub fn store_merge_stage(store: &BoardStore, id: &str, stage: DealStage) {
    merge_stage(&mut store.deals().write(), id, stage);
}

// ========================
// Reads
// ========================

pub fn store_deals_in(store: &BoardStore, stage: DealStage) -> Vec<Deal> {
    store
        .deals()
        .with(|deals| deals.iter().filter(|d| d.stage == stage).cloned().collect())
}

pub fn store_contacts(store: &BoardStore) -> Vec<Contact> {
    store.contacts().get()
}

pub fn store_contact_name(store: &BoardStore, contact_id: &str) -> Option<String> {
    store.contacts().with(|contacts| {
        contacts
            .iter()
            .find(|c| c.id == contact_id)
            .map(|c| c.name.clone())
    })
}

pub fn store_first_contact_id(store: &BoardStore) -> String {
    store
        .contacts()
        .with_untracked(|contacts| contacts.first().map(|c| c.id.clone()))
        .unwrap_or_default()
}
