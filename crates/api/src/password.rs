//! Password hashing and verification.
//!
//! New hashes are Argon2id PHC strings (`$argon2id$v=19$...`). Bare
//! 64-character hex strings are accepted as legacy unsalted SHA-256 digests.

use argon2::password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use rand_core::OsRng;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

fn argon2() -> Argon2<'static> {
    Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::default())
}

/// Hash a password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(argon2().hash_password(password.as_bytes(), &salt)?.to_string())
}

/// Check `password` against a stored hash.
///
/// Malformed stored values, and Argon2 hashes weaker than the default
/// Argon2id cost, never verify.
pub fn verify_password(password: &str, stored: &str) -> bool {
    if stored.starts_with("$argon2") {
        return verify_phc(password, stored);
    }

    if stored.len() == 64 {
        if let Ok(expected) = hex::decode(stored) {
            let digest = Sha256::digest(password.as_bytes());
            return digest.as_slice().ct_eq(expected.as_slice()).into();
        }
    }

    false
}

/// Whether a stored hash predates Argon2 and should be re-hashed.
pub fn needs_rehash(stored: &str) -> bool {
    !stored.starts_with("$argon2")
}

fn verify_phc(password: &str, stored: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored) else {
        return false;
    };

    if parsed.algorithm != Algorithm::Argon2id.ident() {
        return false;
    }

    let Ok(params) = Params::try_from(&parsed) else {
        return false;
    };
    if params.m_cost() < Params::DEFAULT_M_COST || params.t_cost() < Params::DEFAULT_T_COST {
        return false;
    }

    argon2().verify_password(password.as_bytes(), &parsed).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash_with(algorithm: Algorithm, params: Params, password: &str) -> String {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::new(algorithm, Version::V0x13, params)
            .hash_password(password.as_bytes(), &salt)
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_hash_and_verify() {
        let stored = hash_password("correct horse").unwrap();
        assert!(stored.starts_with("$argon2id$v=19$"));
        assert!(verify_password("correct horse", &stored));
        assert!(!verify_password("wrong horse", &stored));
        assert!(!needs_rehash(&stored));
    }

    #[test]
    fn test_salt_differs_per_hash() {
        let a = hash_password("same").unwrap();
        let b = hash_password("same").unwrap();
        assert_ne!(a, b);
        assert!(verify_password("same", &a));
        assert!(verify_password("same", &b));
    }

    #[test]
    fn test_weak_stored_cost_is_rejected() {
        let weak = hash_with(Algorithm::Argon2id, Params::new(8, 1, 1, None).unwrap(), "deck");

        // The hash itself is valid Argon2id, just below the accepted cost.
        let parsed = PasswordHash::new(&weak).unwrap();
        assert!(Argon2::default()
            .verify_password(b"deck", &parsed)
            .is_ok());

        assert!(!verify_password("deck", &weak));
    }

    #[test]
    fn test_other_argon2_variants_rejected() {
        let argon2i = hash_with(Algorithm::Argon2i, Params::default(), "deck");
        assert!(!verify_password("deck", &argon2i));
    }

    #[test]
    fn test_legacy_unsalted_digest() {
        // sha256("password")
        let legacy = "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8";
        assert!(verify_password("password", legacy));
        assert!(!verify_password("Password", legacy));
        assert!(needs_rehash(legacy));
    }

    #[test]
    fn test_malformed_hashes_never_verify() {
        for stored in [
            "",
            "plaintext",
            "$argon2id$",
            "$argon2id$v=19$m=19456,t=2,p=1$bad",
            "sha256$1$00$00",
            "zz84898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8",
        ] {
            assert!(!verify_password("anything", stored), "{stored:?}");
        }
    }
}
