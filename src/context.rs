//! Application Context
//!
//! Session and API configuration shared via Leptos Context API. Views never
//! reach for storage directly; they read the session and build API clients
//! through [`AuthContext`].

use crm_core::{ApiConfig, CrmError, Session};
use leptos::prelude::*;

use crate::api::ApiClient;
use crate::storage::BrowserStorage;

#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Session<BrowserStorage>>,
    config: StoredValue<ApiConfig>,
}

impl AuthContext {
    /// Hydrate the session from localStorage; no network call
    pub fn new(config: ApiConfig) -> Self {
        Self {
            session: RwSignal::new(Session::hydrate(BrowserStorage)),
            config: StoredValue::new(config),
        }
    }

    /// Reactive: re-runs the caller whenever the session changes
    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_authenticated())
    }

    pub fn login(&self, token: String) -> Result<(), CrmError> {
        let mut result = Ok(());
        self.session.update(|s| result = s.login(token));
        result
    }

    pub fn logout(&self) {
        self.session.update(|s| s.logout());
    }

    pub fn config(&self) -> ApiConfig {
        self.config.get_value()
    }

    /// Client carrying the current token; a 401 signs the user out
    pub fn api(&self) -> ApiClient {
        let session = self.session;
        let token = session.with_untracked(|s| s.token().map(str::to_string));
        ApiClient::new(self.config(), token).on_unauthorized(move || {
            session.update(|s| {
                s.on_unauthorized();
            });
        })
    }
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
