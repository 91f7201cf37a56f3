use async_trait::async_trait;
use crm_core::models::{Deal, DealDraft, DealStage, StageUpdate};
use crm_core::mutation::DealStageApi;
use crm_core::ApiResult;

use super::{segment, ApiClient};

impl ApiClient {
    pub async fn list_deals(&self) -> ApiResult<Vec<Deal>> {
        self.get("/deals").await
    }

    pub async fn create_deal(&self, draft: &DealDraft) -> ApiResult<Deal> {
        self.post("/deals", draft).await
    }

    pub async fn update_deal(&self, id: &str, draft: &DealDraft) -> ApiResult<Deal> {
        self.put(&format!("/deals/{}", segment(id)), draft).await
    }

    pub async fn delete_deal(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/deals/{}", segment(id))).await
    }
}

#[async_trait(?Send)]
impl DealStageApi for ApiClient {
    async fn update_deal_stage(&self, id: &str, stage: DealStage) -> ApiResult<Deal> {
        self.put(&format!("/deals/{}/stage", segment(id)), &StageUpdate { stage })
            .await
    }
}
