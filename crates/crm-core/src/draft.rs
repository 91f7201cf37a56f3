//! Creation/Edit Modal State
//!
//! A draft is private to its modal. Nothing in it reaches a view's list until
//! the server confirms a submit, so opening and cancelling is always a no-op
//! for the list underneath.

use crate::models::Entity;
use crate::mutation::replace_entry;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Draft<T> {
    open: bool,
    /// Id of the entry being edited; `None` when creating
    editing: Option<String>,
    pub value: T,
    pub error: Option<String>,
}

impl<T: Default> Draft<T> {
    /// Open a blank or pre-filled draft for a new entry
    pub fn create(value: T) -> Self {
        Self { open: true, editing: None, value, error: None }
    }

    /// Open a draft pre-filled from an existing entry
    pub fn edit(id: impl Into<String>, value: T) -> Self {
        Self { open: true, editing: Some(id.into()), value, error: None }
    }

    /// Close and discard everything typed so far
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// The value to send, or `None` once the draft has been closed
    pub fn submission(&self) -> Option<&T> {
        self.open.then_some(&self.value)
    }

    /// Fold the server's confirmed copy into `list`: an edited entry is
    /// replaced in place, a new one is appended.
    pub fn merge_saved<E: Entity>(&self, list: &mut Vec<E>, saved: E) {
        match self.editing() {
            Some(_) => {
                replace_entry(list, saved);
            }
            None => list.push(saved),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiError, ApiResult};
    use crate::models::{ContactDraft, Deal, DealDraft, DealStage};
    use crate::mutation::{commit, Alert};

    struct Quiet;

    impl Alert for Quiet {
        fn alert(&self, _message: &str) {}
    }

    fn deal(id: &str, title: &str) -> Deal {
        Deal {
            id: id.into(),
            title: title.into(),
            value: 10.0,
            stage: DealStage::Lead,
            contact_id: "c1".into(),
            created_at: String::new(),
        }
    }

    /// Submit the way the deal modal does: send only an open draft and merge
    /// only what the server confirmed. Returns whether a request was made.
    async fn save(draft: &Draft<DealDraft>, list: &mut Vec<Deal>, response: ApiResult<Deal>) -> bool {
        let Some(_body) = draft.submission() else {
            return false;
        };
        let _ = commit(async { response }, &Quiet, "Failed to save deal", |saved| {
            draft.merge_saved(list, saved)
        })
        .await;
        true
    }

    #[tokio::test]
    async fn test_cancelled_drafts_never_reach_the_list() {
        let mut list = vec![deal("1", "Existing")];
        let snapshot = list.clone();

        for _ in 0..3 {
            let mut draft = Draft::create(DealDraft::default());
            draft.value.title = "Typed but never saved".into();
            draft.cancel();
            assert!(!draft.is_open());
            assert_eq!(draft.value, DealDraft::default());
            assert!(!save(&draft, &mut list, Ok(deal("2", "Typed but never saved"))).await);
        }
        assert_eq!(list, snapshot);
    }

    #[tokio::test]
    async fn test_only_confirmed_saves_change_the_list() {
        let mut list = vec![deal("1", "Existing")];
        let snapshot = list.clone();

        let draft = Draft::create(DealDraft { title: "New".into(), ..DealDraft::default() });
        let failure = Err(ApiError::from_response(500, r#"{"detail":"db down"}"#));
        assert!(save(&draft, &mut list, failure).await);
        assert_eq!(list, snapshot);

        assert!(save(&draft, &mut list, Ok(deal("2", "New"))).await);
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].title, "New");

        let edit = Draft::edit("1", DealDraft::from(&list[0]));
        assert!(save(&edit, &mut list, Ok(deal("1", "Renamed"))).await);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].title, "Renamed");
    }

    #[test]
    fn test_edit_tracks_target() {
        let draft = Draft::edit("d-7", ContactDraft::default());
        assert!(draft.is_open());
        assert_eq!(draft.editing(), Some("d-7"));
        assert_eq!(Draft::create(ContactDraft::default()).editing(), None);
    }
}
