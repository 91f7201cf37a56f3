use crm_core::models::{Activity, ActivityDraft, ActivityUpdate};
use crm_core::ApiResult;

use super::{segment, ApiClient};

impl ApiClient {
    /// Timeline for one contact
    pub async fn list_activities(&self, contact_id: &str) -> ApiResult<Vec<Activity>> {
        self.get(&format!("/activities/{}", segment(contact_id))).await
    }

    pub async fn create_activity(&self, draft: &ActivityDraft) -> ApiResult<Activity> {
        self.post("/activities/", draft).await
    }

    pub async fn update_activity(&self, id: &str, update: &ActivityUpdate) -> ApiResult<Activity> {
        self.put(&format!("/activities/{}", segment(id)), update).await
    }

    pub async fn delete_activity(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/activities/{}", segment(id))).await
    }
}
