//! Browser Token Storage
//!
//! `localStorage` slot behind the session's [`TokenStorage`] seam.

use crm_core::session::TOKEN_KEY;
use crm_core::{CrmError, TokenStorage};
use web_sys::Storage;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn local_storage() -> Result<Storage, CrmError> {
    let window = web_sys::window().ok_or_else(|| CrmError::Storage("no window".into()))?;
    window
        .local_storage()
        .map_err(|e| CrmError::Storage(format!("{:?}", e)))?
        .ok_or_else(|| CrmError::Storage("localStorage unavailable".into()))
}

impl TokenStorage for BrowserStorage {
    fn read(&self) -> Option<String> {
        local_storage().ok()?.get_item(TOKEN_KEY).ok().flatten()
    }

    fn write(&self, token: &str) -> Result<(), CrmError> {
        local_storage()?
            .set_item(TOKEN_KEY, token)
            .map_err(|e| CrmError::Storage(format!("{:?}", e)))
    }

    fn remove(&self) -> Result<(), CrmError> {
        local_storage()?
            .remove_item(TOKEN_KEY)
            .map_err(|e| CrmError::Storage(format!("{:?}", e)))
    }
}
