//! CRM Frontend Entry Point

mod api;
mod app;
mod browser;
mod components;
mod context;
mod pages;
mod remote;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init(crm_core::config::log_level()) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("[APP] Logger not installed: {}", e)));
    }
    mount_to_body(App);
}
