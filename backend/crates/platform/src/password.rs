//! Password Hashing and Verification
//!
//! Argon2id hashing with:
//! - Unicode NFKC normalization before hashing
//! - Zeroization of clear text on drop
//! - Optional application-wide pepper
//!
//! Length and format rules are not enforced here. Page actions validate
//! the submitted value first; this module only hashes and verifies.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// No `Clone`, and `Debug` is redacted.
///
/// ## Examples
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("squat-rack-42".to_string());
/// let hashed = password.hash(None).unwrap();
/// assert!(hashed.verify(&password, None));
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Wrap user input, normalizing it to NFKC so visually identical
    /// inputs hash the same.
    pub fn new(mut raw: String) -> Self {
        let normalized: String = raw.nfkc().collect();
        raw.zeroize();
        Self(normalized)
    }

    fn peppered(&self, pepper: Option<&[u8]>) -> Zeroizing<Vec<u8>> {
        let mut bytes = self.0.as_bytes().to_vec();
        if let Some(p) = pepper {
            bytes.extend_from_slice(p);
        }
        Zeroizing::new(bytes)
    }

    /// Hash the password using Argon2id with a fresh random salt
    ///
    /// Returns the PHC-formatted hash wrapped in `HashedPassword`.
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let password_bytes = self.peppered(pepper);
        let salt = SaltString::generate(&mut OsRng);

        // OWASP recommended Argon2id parameters: m=19456 (19 MiB), t=2, p=1
        let hash = Argon2::default()
            .hash_password(&password_bytes, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Argon2id hash in PHC string format (algorithm, params, salt, hash)
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from PHC string (e.g., from database)
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();
        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        Ok(Self { hash })
    }

    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash
    ///
    /// `pepper` must match the one used when hashing. Argon2 compares in
    /// constant time.
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(&self.hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(&password.peppered(pepper), &parsed_hash)
            .is_ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn password(s: &str) -> ClearTextPassword {
        ClearTextPassword::new(s.to_string())
    }

    #[test]
    fn test_hash_and_verify() {
        let hashed = password("deadlift-day").hash(None).unwrap();

        assert!(hashed.verify(&password("deadlift-day"), None));
        assert!(!hashed.verify(&password("leg-day"), None));
    }

    #[test]
    fn test_hash_is_salted() {
        let a = password("deadlift-day").hash(None).unwrap();
        let b = password("deadlift-day").hash(None).unwrap();
        assert_ne!(a.as_phc_string(), b.as_phc_string());
    }

    #[test]
    fn test_hash_with_pepper() {
        let pepper = b"server-side-pepper";
        let hashed = password("deadlift-day").hash(Some(pepper)).unwrap();

        assert!(hashed.verify(&password("deadlift-day"), Some(pepper)));
        assert!(!hashed.verify(&password("deadlift-day"), None));
        assert!(!hashed.verify(&password("deadlift-day"), Some(b"other-pepper")));
    }

    #[test]
    fn test_nfkc_equivalent_inputs_verify() {
        // Fullwidth letters normalize to ASCII under NFKC
        let hashed = password("ｐａｓｓｗｏｒｄ").hash(None).unwrap();
        assert!(hashed.verify(&password("password"), None));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let hashed = password("deadlift-day").hash(None).unwrap();
        let phc = hashed.as_phc_string().to_string();
        assert!(phc.starts_with("$argon2id$"));

        let restored = HashedPassword::from_phc_string(phc).unwrap();
        assert!(restored.verify(&password("deadlift-day"), None));
    }

    #[test]
    fn test_invalid_phc_string() {
        let result = HashedPassword::from_phc_string("not_a_valid_hash");
        assert!(matches!(result, Err(PasswordHashError::InvalidHashFormat)));
    }

    #[test]
    fn test_debug_redaction() {
        let debug_output = format!("{:?}", password("secret-value"));
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret-value"));

        let hashed = password("secret-value").hash(None).unwrap();
        assert!(!format!("{:?}", hashed).contains("argon2"));
    }
}
