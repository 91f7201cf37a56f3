use crm_core::models::{Contact, ContactDraft, ContactSummary, ContactUpdate};
use crm_core::ApiResult;

use super::{segment, ApiClient};

impl ApiClient {
    pub async fn list_contacts(&self) -> ApiResult<Vec<Contact>> {
        self.get("/contacts").await
    }

    pub async fn create_contact(&self, draft: &ContactDraft) -> ApiResult<Contact> {
        self.post("/contacts", draft).await
    }

    pub async fn contact_summary(&self, id: &str) -> ApiResult<ContactSummary> {
        self.get(&format!("/contacts/{}/summary", segment(id))).await
    }

    pub async fn update_contact(&self, id: &str, update: &ContactUpdate) -> ApiResult<Contact> {
        self.put(&format!("/contacts/{}", segment(id)), update).await
    }

    pub async fn delete_contact(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/contacts/{}", segment(id))).await
    }
}
