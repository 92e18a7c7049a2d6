//! Account password hashing (Argon2id, PHC string format).

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Failed to hash password: {0}")]
    Hash(String),

    #[error("Failed to verify password: {0}")]
    Verify(String),

    #[error("Stored password is not a valid hash")]
    MalformedHash,
}

// OWASP baseline for Argon2id: 19 MiB, 2 passes, 1 lane.
const MEMORY_KIB: u32 = 19 * 1024;
const PASSES: u32 = 2;
const LANES: u32 = 1;

fn hasher() -> Result<Argon2<'static>, PasswordError> {
    let params = Params::new(MEMORY_KIB, PASSES, LANES, None)
        .map_err(|e| PasswordError::Hash(e.to_string()))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Hashes `password` with a fresh random salt.
///
/// ```
/// use shared::password::{hash_password, is_password_hash};
///
/// let stored = hash_password("Admin@123").unwrap();
/// assert!(is_password_hash(&stored));
/// assert_ne!(stored, "Admin@123");
/// ```
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = hasher()?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::Hash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Checks `password` against a stored PHC hash.
///
/// The parameters embedded in the hash are used, so hashes produced with
/// older settings keep verifying.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(stored).map_err(|_| PasswordError::MalformedHash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::Verify(e.to_string())),
    }
}

/// True when `value` is a complete Argon2id PHC string: algorithm, salt and
/// hash output all present.
pub fn is_password_hash(value: &str) -> bool {
    match PasswordHash::new(value) {
        Ok(parsed) => {
            parsed.algorithm == argon2::ARGON2ID_IDENT
                && parsed.salt.is_some()
                && parsed.hash.is_some()
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_phc_argon2id() {
        let hash = hash_password("segredo").unwrap();
        assert!(hash.starts_with("$argon2id$v=19$m=19456,t=2,p=1$"));
        assert!(is_password_hash(&hash));
    }

    #[test]
    fn test_salts_differ() {
        assert_ne!(hash_password("igual").unwrap(), hash_password("igual").unwrap());
    }

    #[test]
    fn test_verify_round() {
        let hash = hash_password("Admin@123").unwrap();
        assert!(verify_password("Admin@123", &hash).unwrap());
        assert!(!verify_password("admin@123", &hash).unwrap());
        assert!(!verify_password("", &hash).unwrap());
    }

    #[test]
    fn test_verify_unicode_password() {
        let hash = hash_password("senhaçãoÉ!").unwrap();
        assert!(verify_password("senhaçãoÉ!", &hash).unwrap());
    }

    #[test]
    fn test_verify_rejects_plaintext_store() {
        let result = verify_password("Admin@123", "Admin@123");
        assert!(matches!(result, Err(PasswordError::MalformedHash)));
    }

    #[test]
    fn test_is_password_hash() {
        assert!(!is_password_hash("Admin@123"));
        assert!(!is_password_hash("$argon2id$garbage"));
        assert!(!is_password_hash("$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ"));
        assert!(!is_password_hash(""));
    }

    #[test]
    fn test_is_password_hash_requires_argon2id() {
        let hash = hash_password("segredo").unwrap();
        assert!(is_password_hash(&hash));
        assert!(!is_password_hash(&hash.replacen("argon2id", "argon2i", 1)));
    }
}
