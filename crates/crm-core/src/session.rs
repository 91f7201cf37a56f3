//! Session Store
//!
//! Owns the bearer token. The token is written through to durable storage on
//! login, removed on logout, and read back once at start-up (`hydrate`).
//! Authentication status is derived from token presence; the token is never
//! validated client-side, so an expired token is only noticed when the API
//! answers 401 (see [`Session::on_unauthorized`]).

use crate::error::CrmError;

/// Storage key holding the bearer token
pub const TOKEN_KEY: &str = "crm_token";

/// Durable key/value slot for the token
pub trait TokenStorage {
    fn read(&self) -> Option<String>;
    fn write(&self, token: &str) -> Result<(), CrmError>;
    fn remove(&self) -> Result<(), CrmError>;
}

#[derive(Debug, Clone)]
pub struct Session<S> {
    storage: S,
    token: Option<String>,
}

impl<S: TokenStorage> Session<S> {
    /// Restore a previously persisted session without contacting the server
    pub fn hydrate(storage: S) -> Self {
        let token = storage.read().filter(|t| !t.is_empty());
        tracing::debug!("[Session] Hydrated, authenticated={}", token.is_some());
        Self { storage, token }
    }

    pub fn login(&mut self, token: impl Into<String>) -> Result<(), CrmError> {
        let token = token.into();
        if token.is_empty() {
            return Err(CrmError::EmptyToken);
        }
        // A failed write still leaves the tab signed in; only reload loses it
        if let Err(e) = self.storage.write(&token) {
            tracing::warn!("[Session] Token not persisted: {}", e);
        }
        self.token = Some(token);
        tracing::info!("[Session] Signed in");
        Ok(())
    }

    pub fn logout(&mut self) {
        if let Err(e) = self.storage.remove() {
            tracing::warn!("[Session] Failed to clear stored token: {}", e);
        }
        self.token = None;
        tracing::info!("[Session] Signed out");
    }

    /// An API call was rejected with 401: drop the session.
    ///
    /// Returns whether a live session was actually cleared.
    pub fn on_unauthorized(&mut self) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        tracing::warn!("[Session] Token rejected by server, signing out");
        self.logout();
        true
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStorage {
        slot: Rc<RefCell<Option<String>>>,
        read_only: bool,
    }

    impl TokenStorage for MemoryStorage {
        fn read(&self) -> Option<String> {
            self.slot.borrow().clone()
        }

        fn write(&self, token: &str) -> Result<(), CrmError> {
            if self.read_only {
                return Err(CrmError::Storage("quota exceeded".into()));
            }
            *self.slot.borrow_mut() = Some(token.to_string());
            Ok(())
        }

        fn remove(&self) -> Result<(), CrmError> {
            *self.slot.borrow_mut() = None;
            Ok(())
        }
    }

    #[test]
    fn test_fresh_session_is_anonymous() {
        let session = Session::hydrate(MemoryStorage::default());
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_login_then_check() {
        for token in ["t", "eyJhbGciOiJIUzI1NiJ9.payload.sig", "  spaced  "] {
            let storage = MemoryStorage::default();
            let mut session = Session::hydrate(storage.clone());
            session.login(token).unwrap();
            assert!(session.is_authenticated());
            assert_eq!(session.token(), Some(token));
            assert_eq!(storage.read().as_deref(), Some(token));
        }
    }

    #[test]
    fn test_logout_then_check() {
        let storage = MemoryStorage::default();
        let mut session = Session::hydrate(storage.clone());
        session.login("abc").unwrap();
        session.logout();
        assert!(!session.is_authenticated());
        assert_eq!(storage.read(), None);
    }

    #[test]
    fn test_hydrate_restores_persisted_token() {
        let storage = MemoryStorage::default();
        storage.write("persisted").unwrap();
        let session = Session::hydrate(storage);
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("persisted"));
    }

    #[test]
    fn test_hydrate_ignores_empty_token() {
        let storage = MemoryStorage::default();
        *storage.slot.borrow_mut() = Some(String::new());
        assert!(!Session::hydrate(storage).is_authenticated());
    }

    #[test]
    fn test_empty_token_rejected() {
        let mut session = Session::hydrate(MemoryStorage::default());
        assert_eq!(session.login(""), Err(CrmError::EmptyToken));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_login_survives_storage_failure() {
        let storage = MemoryStorage { read_only: true, ..Default::default() };
        let mut session = Session::hydrate(storage.clone());
        session.login("abc").unwrap();
        assert!(session.is_authenticated());
        assert_eq!(storage.read(), None);
    }

    #[test]
    fn test_unauthorized_clears_session_once() {
        let mut session = Session::hydrate(MemoryStorage::default());
        session.login("stale").unwrap();
        assert!(session.on_unauthorized());
        assert!(!session.is_authenticated());
        assert!(!session.on_unauthorized());
    }
}
