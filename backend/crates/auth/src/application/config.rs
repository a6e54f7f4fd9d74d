//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Session lifetime (30 days)
    pub session_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "__session".to_string(),
            session_secret: [0u8; 32],
            session_ttl: Duration::from_secs(30 * 24 * 3600), // 30 days
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with the given signing secret
    pub fn new(session_secret: [u8; 32]) -> Self {
        Self {
            session_secret,
            ..Default::default()
        }
    }

    /// Create config with a random session secret (for development)
    pub fn with_random_secret() -> Self {
        Self::new(platform::crypto::random_key())
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Get session TTL in milliseconds, saturating at `i64::MAX`
    pub fn session_ttl_ms(&self) -> i64 {
        i64::try_from(self.session_ttl.as_millis()).unwrap_or(i64::MAX)
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Cookie attributes for the session cookie
    pub fn session_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.session_ttl.as_secs()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.session_cookie_name, "__session");
        assert_eq!(config.session_ttl_ms(), 30 * 24 * 3600 * 1000);
        assert!(config.cookie_secure);
        assert!(config.pepper().is_none());
    }

    #[test]
    fn test_huge_ttl_saturates() {
        let config = AuthConfig {
            session_ttl: Duration::MAX,
            ..AuthConfig::default()
        };
        assert_eq!(config.session_ttl_ms(), i64::MAX);
    }

    #[test]
    fn test_development_is_insecure_with_random_secret() {
        let a = AuthConfig::development();
        let b = AuthConfig::development();
        assert!(!a.cookie_secure);
        assert_ne!(a.session_secret, b.session_secret);
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = AuthConfig::new([1u8; 32]).session_cookie();
        assert_eq!(cookie.name, "__session");
        assert!(cookie.http_only);
        assert_eq!(cookie.max_age_secs, Some(2_592_000));
    }
}
