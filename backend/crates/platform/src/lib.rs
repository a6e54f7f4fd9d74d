//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no domain knowledge:
//! - Cryptographic utilities (HMAC-SHA256, Base64, random keys)
//! - Password hashing (Argon2id)
//! - Cookie building and parsing
//! - Typed configuration loading from the environment

pub mod config;
pub mod cookie;
pub mod crypto;
pub mod password;
