//! REST API Client
//!
//! Thin `reqwest` wrapper over the CRM API, organized by domain the same way
//! the endpoints are. Every call resolves to an [`ApiResult`]; a 401 on an
//! authenticated call also fires the session's unauthorized hook.

mod activities;
mod auth;
mod contacts;
mod dashboard;
mod deals;
mod forms;
mod websites;

use std::rc::Rc;

use crm_core::{ApiConfig, ApiError, ApiResult};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Characters left alone in a path segment (same set as `encodeURIComponent`)
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'!')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn segment(id: &str) -> String {
    utf8_percent_encode(id, SEGMENT).to_string()
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    token: Option<String>,
    on_unauthorized: Option<Rc<dyn Fn()>>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            token,
            on_unauthorized: None,
        }
    }

    /// Hook run when the server rejects the bearer token
    pub fn on_unauthorized(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_unauthorized = Some(Rc::new(hook));
        self
    }

    // ========================
    // Request Plumbing
    // ========================

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.http.request(method, self.config.endpoint(path));
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send and return the raw body of a 2xx response
    async fn execute(&self, request: RequestBuilder) -> ApiResult<String> {
        let response = request.send().await.map_err(|e| {
            tracing::error!("[API] Request failed: {}", e);
            ApiError::Network(e.to_string())
        })?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if status.is_success() {
            return Ok(body);
        }

        let err = ApiError::from_response(status.as_u16(), &body);
        tracing::warn!("[API] {} {}", status.as_u16(), err);
        if err.is_unauthorized() && self.token.is_some() {
            if let Some(hook) = &self.on_unauthorized {
                hook();
            }
        }
        Err(err)
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let body = self.execute(request).await?;
        decode(&body)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.fetch(self.request(Method::GET, path)).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.fetch(self.request(Method::POST, path).json(body)).await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.fetch(self.request(Method::PUT, path).json(body)).await
    }

    /// POST whose response body is not needed
    pub(crate) async fn post_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<()> {
        self.execute(self.request(Method::POST, path).json(body)).await.map(|_| ())
    }

    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        self.execute(self.request(Method::DELETE, path)).await.map(|_| ())
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|e| {
        tracing::error!("[API] Unexpected response body: {}", e);
        ApiError::Decode(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crm_core::models::Deal;

    #[test]
    fn test_segment_encoding() {
        assert_eq!(segment("42"), "42");
        assert_eq!(segment("a b/c"), "a%20b%2Fc");
        assert_eq!(segment("f-1_x.y"), "f-1_x.y");
    }

    #[test]
    fn test_decode_mismatch_is_decode_error() {
        let err = decode::<Deal>(r#"{"unexpected":true}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));

        let deal: Deal = decode(r#"{"id":1,"title":"T","contact_id":2,"stage":"proposal"}"#).unwrap();
        assert_eq!(deal.id, "1");
    }
}
