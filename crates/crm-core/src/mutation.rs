//! Confirmed Mutations
//!
//! Views never write displayed state ahead of the server. A mutation issues
//! the request first and only applies a local change once the server has
//! acknowledged it; on failure the error is logged, the user is alerted, and
//! local state stays exactly as it was.

use std::future::Future;

use async_trait::async_trait;

use crate::error::{ApiResult, CrmError};
use crate::models::{Deal, DealStage, Entity};

pub const STAGE_FAILURE_ALERT: &str = "Failed to update deal stage";

/// Blocking user-visible notification
pub trait Alert {
    fn alert(&self, message: &str);
}

/// The single remote call stage movement needs
#[async_trait(?Send)]
pub trait DealStageApi {
    async fn update_deal_stage(&self, id: &str, stage: DealStage) -> ApiResult<Deal>;
}

/// Run `request`; on success hand the server's response to `apply`, on
/// failure alert with `failure_message` and leave everything untouched.
pub async fn commit<T, F>(
    request: F,
    alert: &dyn Alert,
    failure_message: &str,
    apply: impl FnOnce(T),
) -> ApiResult<()>
where
    F: Future<Output = ApiResult<T>>,
{
    match request.await {
        Ok(value) => {
            apply(value);
            Ok(())
        }
        Err(e) => {
            tracing::error!("[Mutation] {}: {}", failure_message, e);
            alert.alert(failure_message);
            Err(e)
        }
    }
}

/// Advance `deal` one stage. `next` must be the immediate successor of the
/// deal's current stage; anything else is rejected before any request is made.
///
/// `apply(id, stage)` runs only after the server accepted the move.
pub async fn move_stage<A>(
    api: &A,
    alert: &dyn Alert,
    deal: &Deal,
    next: DealStage,
    apply: impl FnOnce(&str, DealStage),
) -> Result<DealStage, CrmError>
where
    A: DealStageApi + ?Sized,
{
    if deal.stage.next() != Some(next) {
        return Err(CrmError::InvalidTransition { from: deal.stage, to: next });
    }
    tracing::debug!("[Mutation] Moving deal {} {} -> {}", deal.id, deal.stage, next);
    commit(api.update_deal_stage(&deal.id, next), alert, STAGE_FAILURE_ALERT, |_| {
        apply(&deal.id, next)
    })
    .await?;
    Ok(next)
}

// ========================
// List Helpers
// ========================

/// Swap in the server's authoritative copy of an entry
pub fn replace_entry<T: Entity>(list: &mut [T], updated: T) -> bool {
    match list.iter_mut().find(|entry| entry.id() == updated.id()) {
        Some(entry) => {
            *entry = updated;
            true
        }
        None => false,
    }
}

/// Add a confirmed entry to a newest-first list (timelines)
pub fn prepend_entry<T: Entity>(list: &mut Vec<T>, created: T) {
    list.insert(0, created);
}

pub fn remove_entry<T: Entity>(list: &mut Vec<T>, id: &str) -> bool {
    let before = list.len();
    list.retain(|entry| entry.id() != id);
    list.len() != before
}

/// Merge `{ stage }` into the deal with matching id
pub fn merge_stage(deals: &mut [Deal], id: &str, stage: DealStage) -> bool {
    match deals.iter_mut().find(|deal| deal.id == id) {
        Some(deal) => {
            deal.stage = stage;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use std::cell::RefCell;

    fn deal(id: &str, stage: DealStage) -> Deal {
        Deal {
            id: id.to_string(),
            title: format!("Deal {}", id),
            value: 100.0,
            stage,
            contact_id: "c1".to_string(),
            created_at: String::new(),
        }
    }

    /// Records the order of events across the request and the local merge
    #[derive(Default)]
    struct Journal {
        events: RefCell<Vec<String>>,
        alerts: RefCell<Vec<String>>,
    }

    impl Alert for Journal {
        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }

    struct FakeApi<'a> {
        journal: &'a Journal,
        fail: bool,
    }

    #[async_trait(?Send)]
    impl<'a> DealStageApi for FakeApi<'a> {
        async fn update_deal_stage(&self, id: &str, stage: DealStage) -> ApiResult<Deal> {
            self.journal.events.borrow_mut().push(format!("request {} {}", id, stage));
            if self.fail {
                Err(ApiError::from_response(500, r#"{"detail":"db down"}"#))
            } else {
                Ok(deal(id, stage))
            }
        }
    }

    #[tokio::test]
    async fn test_move_stage_applies_after_success() {
        let journal = Journal::default();
        let api = FakeApi { journal: &journal, fail: false };
        let deals = RefCell::new(vec![deal("1", DealStage::Lead), deal("2", DealStage::Lead)]);

        let target = deals.borrow()[0].clone();
        let moved = move_stage(&api, &journal, &target, DealStage::Qualified, |id, stage| {
            journal.events.borrow_mut().push(format!("apply {}", id));
            merge_stage(&mut deals.borrow_mut(), id, stage);
        })
        .await
        .unwrap();

        assert_eq!(moved, DealStage::Qualified);
        assert_eq!(*journal.events.borrow(), vec!["request 1 QUALIFIED", "apply 1"]);
        assert_eq!(deals.borrow()[0].stage, DealStage::Qualified);
        assert_eq!(deals.borrow()[1].stage, DealStage::Lead);
        assert!(journal.alerts.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_move_stage_failure_alerts_and_keeps_state() {
        let journal = Journal::default();
        let api = FakeApi { journal: &journal, fail: true };
        let deals = RefCell::new(vec![deal("1", DealStage::Proposal)]);
        let snapshot = deals.borrow().clone();

        let target = snapshot[0].clone();
        let result = move_stage(&api, &journal, &target, DealStage::Negotiation, |id, stage| {
            merge_stage(&mut deals.borrow_mut(), id, stage);
        })
        .await;

        assert!(matches!(result, Err(CrmError::Api(_))));
        assert_eq!(*deals.borrow(), snapshot);
        assert_eq!(*journal.alerts.borrow(), vec![STAGE_FAILURE_ALERT]);
    }

    #[tokio::test]
    async fn test_move_stage_rejects_invalid_transitions() {
        let journal = Journal::default();
        let api = FakeApi { journal: &journal, fail: false };

        let closed = deal("1", DealStage::Closed);
        let result = move_stage(&api, &journal, &closed, DealStage::Closed, |_, _| panic!("applied")).await;
        assert_eq!(
            result,
            Err(CrmError::InvalidTransition { from: DealStage::Closed, to: DealStage::Closed })
        );

        let lead = deal("2", DealStage::Lead);
        let skip = move_stage(&api, &journal, &lead, DealStage::Proposal, |_, _| panic!("applied")).await;
        assert!(skip.is_err());

        let back = deal("3", DealStage::Proposal);
        let backward = move_stage(&api, &journal, &back, DealStage::Qualified, |_, _| panic!("applied")).await;
        assert!(backward.is_err());

        assert!(journal.events.borrow().is_empty());
        assert!(journal.alerts.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_commit_hands_over_server_copy() {
        let journal = Journal::default();
        let mut list = vec![deal("1", DealStage::Lead)];
        let mut server_copy = deal("1", DealStage::Lead);
        server_copy.title = "Renamed by server".into();

        let request = async { Ok::<_, ApiError>(server_copy) };
        commit(request, &journal, "Failed to save deal", |updated| {
            replace_entry(&mut list, updated);
        })
        .await
        .unwrap();
        assert_eq!(list[0].title, "Renamed by server");
    }

    #[test]
    fn test_list_helpers() {
        let mut list = vec![deal("1", DealStage::Lead), deal("2", DealStage::Closed)];
        assert!(!replace_entry(&mut list, deal("9", DealStage::Lead)));
        assert!(remove_entry(&mut list, "1"));
        assert!(!remove_entry(&mut list, "1"));
        assert_eq!(list.len(), 1);
        assert!(!merge_stage(&mut list, "1", DealStage::Qualified));
    }

    #[tokio::test]
    async fn test_logged_entry_lands_on_top_of_timeline() {
        let journal = Journal::default();
        let mut timeline = vec![deal("older", DealStage::Lead), deal("oldest", DealStage::Lead)];

        let request = async { Ok::<_, ApiError>(deal("new", DealStage::Lead)) };
        commit(request, &journal, "Failed to log activity", |created| {
            prepend_entry(&mut timeline, created);
        })
        .await
        .unwrap();

        let ids: Vec<&str> = timeline.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "older", "oldest"]);
    }
}
