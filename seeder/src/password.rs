//! One-way hashing of the shared default password.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use rand::rngs::OsRng;
use strum::{Display, EnumString};

use crate::error::SeedError;

/// Supported password hash formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum HashScheme {
    /// `$2b$` hashes; the cost is the bcrypt work factor (4..=31).
    #[default]
    Bcrypt,
    /// Argon2id PHC strings; the cost is the time cost (iterations).
    Argon2,
}

/// Hashes `password` with a fresh random salt.
pub fn hash_password(password: &str, scheme: HashScheme, cost: u32) -> Result<String, SeedError> {
    if password.is_empty() {
        return Err(SeedError::Config("default password cannot be empty".into()));
    }

    match scheme {
        HashScheme::Bcrypt => {
            bcrypt::hash(password, cost).map_err(|e| SeedError::Hash(format!("bcrypt: {e}")))
        }
        HashScheme::Argon2 => {
            let params = Params::new(Params::DEFAULT_M_COST, cost, Params::DEFAULT_P_COST, None)
                .map_err(|e| SeedError::Hash(format!("argon2 params: {e}")))?;
            let salt = SaltString::generate(&mut OsRng);
            Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| SeedError::Hash(format!("argon2: {e}")))
        }
    }
}

/// Checks `password` against a stored hash of either scheme.
pub fn verify_password(password: &str, hash: &str) -> bool {
    if hash.starts_with("$argon2") {
        let Ok(parsed) = PasswordHash::new(hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    } else if hash.starts_with("$2") {
        bcrypt::verify(password, hash).unwrap_or(false)
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn scheme_parses_case_insensitively() {
        assert_eq!(HashScheme::from_str("BCRYPT").unwrap(), HashScheme::Bcrypt);
        assert_eq!(HashScheme::from_str("argon2").unwrap(), HashScheme::Argon2);
        assert!(HashScheme::from_str("md5").is_err());
        assert_eq!(HashScheme::Argon2.to_string(), "argon2");
    }

    #[test]
    fn bcrypt_hash_verifies() {
        let hash = hash_password("123", HashScheme::Bcrypt, 4).unwrap();
        assert!(hash.starts_with("$2"));
        assert!(verify_password("123", &hash));
        assert!(!verify_password("124", &hash));
    }

    #[test]
    fn argon2_hash_verifies() {
        let hash = hash_password("123", HashScheme::Argon2, 1).unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(hash.contains("t=1"));
        assert!(verify_password("123", &hash));
        assert!(!verify_password("321", &hash));
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("123", HashScheme::Bcrypt, 4).unwrap();
        let b = hash_password("123", HashScheme::Bcrypt, 4).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn bcrypt_cost_out_of_range_is_rejected() {
        let err = hash_password("123", HashScheme::Bcrypt, 3).unwrap_err();
        assert!(matches!(err, SeedError::Hash(_)));
    }

    #[test]
    fn argon2_zero_time_cost_is_rejected() {
        let err = hash_password("123", HashScheme::Argon2, 0).unwrap_err();
        assert!(matches!(err, SeedError::Hash(_)));
    }

    #[test]
    fn empty_password_is_a_config_error() {
        let err = hash_password("", HashScheme::Bcrypt, 4).unwrap_err();
        assert!(matches!(err, SeedError::Config(_)));
    }

    #[test]
    fn unknown_hash_format_never_verifies() {
        assert!(!verify_password("123", "123"));
    }
}
