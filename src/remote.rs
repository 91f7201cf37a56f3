//! Remote Loading
//!
//! Drives a `RwSignal<Remote<T>>` from a request future. The signal may be
//! disposed before the response lands (the view was left); the result is then
//! dropped.

use std::future::Future;

use crm_core::{ApiResult, Remote};
use leptos::prelude::*;
use leptos::task::spawn_local;

pub fn load<T, F>(area: &'static str, target: RwSignal<Remote<T>>, request: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = ApiResult<T>> + 'static,
{
    spawn_local(async move {
        let result = request.await;
        if let Err(e) = &result {
            tracing::error!("[{}] Load failed: {}", area, e);
        }
        let _ = target.try_set(Remote::from_result(result));
    });
}

/// Like [`load`], but shows the loading state again first
pub fn reload<T, F>(area: &'static str, target: RwSignal<Remote<T>>, request: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = ApiResult<T>> + 'static,
{
    target.set(Remote::Loading);
    load(area, target, request);
}
