//! Environment Configuration
//!
//! Small helpers for reading typed settings out of the process
//! environment. Binaries compose these into their own config structs.

use std::{collections::HashMap, str::FromStr};

use thiserror::Error;

use crate::crypto;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Key/value lookup backing the helpers below
///
/// Empty values are reported as missing.
pub trait ConfigSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads from `std::env`
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ConfigSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|v| !v.trim().is_empty())
    }
}

impl ConfigSource for HashMap<&str, &str> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key)
            .map(|v| v.to_string())
            .filter(|v| !v.trim().is_empty())
    }
}

pub fn require(source: &impl ConfigSource, name: &'static str) -> Result<String, ConfigError> {
    source.get(name).ok_or(ConfigError::Missing(name))
}

/// Parse `name` if present, otherwise fall back to `default`
pub fn parse_or<T>(source: &impl ConfigSource, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match source.get(name) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

/// Accepts `true/false`, `1/0`, `yes/no`, `on/off` (case-insensitive)
pub fn parse_bool_or(
    source: &impl ConfigSource,
    name: &'static str,
    default: bool,
) -> Result<bool, ConfigError> {
    let Some(raw) = source.get(name) else {
        return Ok(default);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid {
            name,
            reason: format!("expected a boolean, got {other:?}"),
        }),
    }
}

/// Decode a required base64 value into exactly 32 bytes
pub fn decode_secret(source: &impl ConfigSource, name: &'static str) -> Result<[u8; 32], ConfigError> {
    let raw = require(source, name)?;
    let bytes = crypto::from_base64(raw.trim()).map_err(|e| ConfigError::Invalid {
        name,
        reason: e.to_string(),
    })?;

    bytes.try_into().map_err(|bytes: Vec<u8>| ConfigError::Invalid {
        name,
        reason: format!("expected 32 bytes, got {}", bytes.len()),
    })
}
