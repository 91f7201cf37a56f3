use crm_core::models::{DashboardOverview, PipelineResponse};
use crm_core::ApiResult;

use super::ApiClient;

impl ApiClient {
    pub async fn dashboard_overview(&self) -> ApiResult<DashboardOverview> {
        self.get("/dashboard/overview").await
    }

    pub async fn dashboard_pipeline(&self) -> ApiResult<PipelineResponse> {
        self.get("/dashboard/pipeline").await
    }
}
