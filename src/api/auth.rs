//! Auth Endpoints
//!
//! Sent without a bearer token, so a 401 here is a plain error and never
//! touches the session.

use crm_core::models::{LoginRequest, RegisterRequest, TokenResponse};
use crm_core::ApiResult;

use super::ApiClient;

impl ApiClient {
    fn anonymous(&self) -> ApiClient {
        ApiClient::new(self.config.clone(), None)
    }

    pub async fn login(&self, request: &LoginRequest) -> ApiResult<TokenResponse> {
        self.anonymous().post("/auth/login", request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<()> {
        self.anonymous().post_unit("/auth/register", request).await
    }
}
