//! The HTTP client core.
//!
//! `ApiClient` owns one `reqwest::Client` built at startup with default
//! headers; per-request bearer injection happens when a session token is
//! set. Response handling is centralized in `handle_response`, which
//! extracts the server's error message on non-2xx statuses.

use std::sync::RwLock;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::Value;

use bazaar_model::ListParams;

use crate::error::{ApiError, Result};

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("bazaar-admin-studio/", env!("CARGO_PKG_VERSION"));

/// Client configuration, sourced from settings.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Backend origin, e.g. `http://localhost:4000`. The `/api` prefix is
    /// part of each resource path, not the base URL.
    pub base_url: String,
}

/// HTTP client for the storefront backend.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    /// Build a client for the configured backend.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            reqwest::header::USER_AGENT,
            HeaderValue::from_static(USER_AGENT_VALUE),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::InvalidBaseUrl(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        })
    }

    /// Install or clear the session bearer token.
    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = token;
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.token.read().ok().and_then(|t| t.clone()) {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    // -------------------------------------------------------------------------
    // Request primitives
    // -------------------------------------------------------------------------

    pub(crate) async fn get_json(&self, path: &str, params: &ListParams) -> Result<Value> {
        let pairs: Vec<(&str, &str)> = params.iter().collect();
        let request = self.authorize(self.http.get(self.url(path)).query(&pairs));
        Self::handle_response(request.send().await?).await
    }

    pub(crate) async fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        let request = self.authorize(self.http.post(self.url(path)).json(body));
        Self::handle_response(request.send().await?).await
    }

    pub(crate) async fn put_json(&self, path: &str, body: &Value) -> Result<Value> {
        let request = self.authorize(self.http.put(self.url(path)).json(body));
        Self::handle_response(request.send().await?).await
    }

    pub(crate) async fn patch_json(&self, path: &str, body: &Value) -> Result<Value> {
        let request = self.authorize(self.http.patch(self.url(path)).json(body));
        Self::handle_response(request.send().await?).await
    }

    pub(crate) async fn delete_json(&self, path: &str, params: &ListParams) -> Result<Value> {
        let pairs: Vec<(&str, &str)> = params.iter().collect();
        let request = self.authorize(self.http.delete(self.url(path)).query(&pairs));
        Self::handle_response(request.send().await?).await
    }

    pub(crate) async fn post_multipart(
        &self,
        path: &str,
        body: reqwest::multipart::Form,
    ) -> Result<Value> {
        let request = self.authorize(self.http.post(self.url(path)).multipart(body));
        Self::handle_response(request.send().await?).await
    }

    pub(crate) async fn put_multipart(
        &self,
        path: &str,
        body: reqwest::multipart::Form,
    ) -> Result<Value> {
        let request = self.authorize(self.http.put(self.url(path)).multipart(body));
        Self::handle_response(request.send().await?).await
    }

    /// Decode a response body, turning non-2xx statuses into
    /// [`ApiError::Server`] with the server's message when one is present.
    async fn handle_response(response: reqwest::Response) -> Result<Value> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_server_message(&body)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
            tracing::warn!(status = status.as_u16(), %message, "request rejected");
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        if status == reqwest::StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }

        let value: Value = response.json().await?;
        Ok(value)
    }
}

/// Pull a human-readable message out of an error body.
///
/// The backend answers errors as `{"message": "..."}"` (occasionally
/// `{"error": "..."}`); anything else is treated as message-less.
fn extract_server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;
    object
        .get("message")
        .or_else(|| object.get("error"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_extraction() {
        assert_eq!(
            extract_server_message(r#"{"message": "name is required"}"#),
            Some("name is required".to_string())
        );
        assert_eq!(
            extract_server_message(r#"{"error": "not found"}"#),
            Some("not found".to_string())
        );
        assert_eq!(extract_server_message("<html>oops</html>"), None);
        assert_eq!(extract_server_message(r#"{"message": 500}"#), None);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new(&ApiConfig {
            base_url: "http://localhost:4000/".to_string(),
        })
        .expect("client");
        assert_eq!(client.base_url(), "http://localhost:4000");
        assert_eq!(client.url("/api/products"), "http://localhost:4000/api/products");
    }
}
