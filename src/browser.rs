//! Browser Dialogs and Clipboard

use crm_core::mutation::Alert;
use wasm_bindgen_futures::JsFuture;

/// `window.alert` as the mutation failure channel
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserAlert;

impl Alert for BrowserAlert {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub async fn copy_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| format!("Clipboard write failed: {:?}", e))
}
