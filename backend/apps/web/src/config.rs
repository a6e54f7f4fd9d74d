//! Server Configuration
//!
//! Everything the binary reads from the environment, parsed once at startup.

use std::net::SocketAddr;
use std::time::Duration;

use auth::AuthConfig;
use platform::config::{
    ConfigError, ConfigSource, ProcessEnv, decode_secret, parse_bool_or, parse_or, require,
};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
pub const DEFAULT_LOG_FILTER: &str = "web=info,auth=info,catalog=info,tower_http=info";

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_SESSION_TTL_DAYS: u64 = 30;
pub const MAX_SESSION_TTL_DAYS: u64 = 365;

const SECONDS_PER_DAY: u64 = 24 * 3600;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub bind_addr: SocketAddr,
    /// CORS allow-list; empty means same-origin only
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(&ProcessEnv)
    }

    pub fn from_source(source: &impl ConfigSource) -> Result<Self, ConfigError> {
        let database_url = require(source, "DATABASE_URL")?;
        let session_secret = decode_secret(source, "SESSION_SECRET")?;

        let bind_addr = parse_or(source, "BIND_ADDR", default_bind_addr()?)?;
        let database_max_connections =
            parse_or(source, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        let session_ttl = session_ttl(parse_or(
            source,
            "SESSION_TTL_DAYS",
            DEFAULT_SESSION_TTL_DAYS,
        )?)?;

        let frontend_origins = source
            .get("FRONTEND_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let auth = AuthConfig {
            session_secret,
            session_ttl,
            cookie_secure: parse_bool_or(source, "COOKIE_SECURE", true)?,
            password_pepper: source.get("PASSWORD_PEPPER").map(String::into_bytes),
            ..AuthConfig::default()
        };

        Ok(Self {
            database_url,
            database_max_connections,
            bind_addr,
            frontend_origins,
            auth,
        })
    }
}

fn default_bind_addr() -> Result<SocketAddr, ConfigError> {
    DEFAULT_BIND_ADDR.parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
        name: "BIND_ADDR",
        reason: e.to_string(),
    })
}

/// Between 1 and `MAX_SESSION_TTL_DAYS` days
fn session_ttl(days: u64) -> Result<Duration, ConfigError> {
    if !(1..=MAX_SESSION_TTL_DAYS).contains(&days) {
        return Err(ConfigError::Invalid {
            name: "SESSION_TTL_DAYS",
            reason: format!("must be between 1 and {MAX_SESSION_TTL_DAYS}, got {days}"),
        });
    }

    days.checked_mul(SECONDS_PER_DAY)
        .map(Duration::from_secs)
        .ok_or(ConfigError::Invalid {
            name: "SESSION_TTL_DAYS",
            reason: format!("{days} days overflows"),
        })
}
