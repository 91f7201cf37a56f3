use crm_core::models::{Website, WebsiteDraft};
use crm_core::ApiResult;

use super::ApiClient;

impl ApiClient {
    pub async fn list_websites(&self) -> ApiResult<Vec<Website>> {
        self.get("/websites/").await
    }

    pub async fn create_website(&self, draft: &WebsiteDraft) -> ApiResult<Website> {
        self.post("/websites/", draft).await
    }
}
