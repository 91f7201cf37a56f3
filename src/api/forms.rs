use crm_core::models::{Form, FormDraft, FormStats};
use crm_core::ApiResult;

use super::{segment, ApiClient};

impl ApiClient {
    pub async fn list_forms(&self, website_id: &str) -> ApiResult<Vec<Form>> {
        self.get(&format!("/websites/{}/forms", segment(website_id))).await
    }

    pub async fn create_form(&self, website_id: &str, draft: &FormDraft) -> ApiResult<Form> {
        self.post(&format!("/websites/{}/forms", segment(website_id)), draft)
            .await
    }

    pub async fn get_form(&self, id: &str) -> ApiResult<Form> {
        self.get(&format!("/forms/{}", segment(id))).await
    }

    pub async fn form_stats(&self, id: &str) -> ApiResult<FormStats> {
        self.get(&format!("/forms/{}/stats", segment(id))).await
    }
}
