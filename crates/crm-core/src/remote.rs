//! Remote Resource State
//!
//! One tagged state for "data fetched from the API": still loading, ready, or
//! failed with a message for the inline banner.

use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum Remote<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Remote::Loading
    }
}

impl<T> Remote<T> {
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Remote::Ready(value),
            Err(e) => Remote::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Remote::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Remote::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Remote::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Remote<U> {
        match self {
            Remote::Loading => Remote::Loading,
            Remote::Ready(value) => Remote::Ready(f(value)),
            Remote::Failed(msg) => Remote::Failed(msg),
        }
    }

    /// Edit the ready value in place; no-op while loading or failed
    pub fn update(&mut self, f: impl FnOnce(&mut T)) -> bool {
        match self {
            Remote::Ready(value) => {
                f(value);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        let ok: Remote<u32> = Remote::from_result(Ok::<_, String>(3));
        assert_eq!(ok.ready(), Some(&3));
        let failed: Remote<u32> = Remote::from_result(Err("boom"));
        assert_eq!(failed.error(), Some("boom"));
        assert!(Remote::<u32>::default().is_loading());
    }

    #[test]
    fn test_update_only_when_ready() {
        let mut loading: Remote<Vec<u32>> = Remote::Loading;
        assert!(!loading.update(|v| v.push(1)));
        assert!(loading.is_loading());

        let mut ready = Remote::Ready(vec![1]);
        assert!(ready.update(|v| v.push(2)));
        assert_eq!(ready.map(|v| v.len()), Remote::Ready(2));
    }
}
