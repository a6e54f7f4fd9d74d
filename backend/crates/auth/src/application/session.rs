//! Session Codec
//!
//! Stateless signed session tokens. Nothing is stored server-side: the
//! token carries the user ID and its own expiry, and the HMAC proves both.
//!
//! Token format: `{user_id}.{expires_at_ms}.{base64url(hmac_sha256(secret, "{user_id}.{expires_at_ms}"))}`

use std::sync::Arc;

use axum::http::HeaderMap;
use chrono::Utc;
use kernel::id::UserId;
use platform::cookie::extract_cookie;
use platform::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};

use crate::application::config::AuthConfig;

#[derive(Debug, Clone)]
pub struct SessionCodec {
    config: Arc<AuthConfig>,
}

impl SessionCodec {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Issue a token valid for the configured TTL
    pub fn create_token(&self, user_id: &UserId) -> String {
        self.create_token_at(user_id, Utc::now().timestamp_millis())
    }

    /// Issue a token as if the current time were `now_ms`
    pub fn create_token_at(&self, user_id: &UserId, now_ms: i64) -> String {
        let expires_at_ms = now_ms.saturating_add(self.config.session_ttl_ms());
        let payload = format!("{}.{}", user_id, expires_at_ms);
        let signature = hmac_sha256(&self.config.session_secret, payload.as_bytes());

        format!("{}.{}", payload, to_base64url(&signature))
    }

    /// Verify a token and return the user it names
    ///
    /// `None` for malformed, tampered or expired tokens.
    pub fn read_token(&self, token: &str) -> Option<UserId> {
        self.read_token_at(token, Utc::now().timestamp_millis())
    }

    pub fn read_token_at(&self, token: &str, now_ms: i64) -> Option<UserId> {
        let (payload, signature_b64) = token.rsplit_once('.')?;
        let signature = from_base64url(signature_b64).ok()?;

        if !verify_hmac_sha256(&self.config.session_secret, payload.as_bytes(), &signature) {
            tracing::debug!("Session token signature mismatch");
            return None;
        }

        let (user_id, expires_at_ms) = payload.split_once('.')?;
        let expires_at_ms: i64 = expires_at_ms.parse().ok()?;

        if expires_at_ms <= now_ms {
            tracing::debug!(expires_at_ms, "Session token expired");
            return None;
        }

        user_id.parse().ok()
    }

    /// Set-Cookie value carrying `token`
    pub fn session_cookie(&self, token: &str) -> String {
        self.config.session_cookie().build_set_cookie(token)
    }

    /// Set-Cookie value that removes the session cookie
    pub fn clear_cookie(&self) -> String {
        self.config.session_cookie().build_delete_cookie()
    }

    /// Read and verify the session cookie of a request
    pub fn read_request(&self, headers: &HeaderMap) -> Option<UserId> {
        let token = extract_cookie(headers, &self.config.session_cookie_name)?;
        self.read_token(&token)
    }
}
