//! Minimal session surface.
//!
//! The studio consumes a bearer-token session; it does not design the auth
//! flow. `login` exchanges credentials for a token (installed on the client
//! for subsequent requests) and `me` fetches the signed-in admin.

use serde_json::{Value, json};

use bazaar_model::Record;

use crate::client::ApiClient;
use crate::error::{ApiError, Result};

/// An authenticated session: the bearer token plus the admin it belongs to.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: Record,
}

impl ApiClient {
    /// POST `/api/auth/login`. On success the token is installed on the
    /// client and the full session returned.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let body = json!({ "email": email, "password": password });
        let value = self.post_json("/api/auth/login", &body).await?;

        let token = value
            .get("token")
            .and_then(Value::as_str)
            .ok_or_else(|| ApiError::Decode("login: missing token".to_string()))?
            .to_string();
        self.set_token(Some(token.clone()));

        let user = match value.get("user") {
            Some(user) => Record::from_value(user.clone())?,
            None => self.me().await?,
        };

        tracing::info!(user = %user.id(), "signed in");
        Ok(Session { token, user })
    }

    /// GET `/api/auth/me`.
    pub async fn me(&self) -> Result<Record> {
        let value = self
            .get_json("/api/auth/me", &bazaar_model::ListParams::new())
            .await?;
        Ok(Record::from_value(value)?)
    }

    /// Drop the session token.
    pub fn logout(&self) {
        self.set_token(None);
        tracing::info!("signed out");
    }
}
