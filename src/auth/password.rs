/**
 * Password Hashing
 *
 * Salted password hashing. Each user gets a fresh random 16-byte salt at
 * registration; login recomputes the hash with the stored salt and
 * compares it against the stored hash.
 */

use bcrypt::{hash_with_salt, BcryptError, DEFAULT_COST};

/// Length of the per-user salt in bytes.
pub const SALT_LEN: usize = 16;

/// Derive a fresh salt and the corresponding password hash.
pub fn hash_password(password: &str) -> Result<(String, Vec<u8>), BcryptError> {
    let salt: [u8; SALT_LEN] = rand::random();
    let hash = hash_with_salt(password, DEFAULT_COST, salt)?.to_string();
    Ok((hash, salt.to_vec()))
}

/// Recompute the hash of `password` with the stored salt and compare it
/// to the stored hash. A malformed stored salt simply fails verification.
pub fn verify_password(
    password: &str,
    stored_hash: &str,
    stored_salt: &[u8],
) -> Result<bool, BcryptError> {
    let salt: [u8; SALT_LEN] = match stored_salt.try_into() {
        Ok(salt) => salt,
        Err(_) => return Ok(false),
    };
    let recomputed = hash_with_salt(password, DEFAULT_COST, salt)?.to_string();
    Ok(recomputed == stored_hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let (hash, salt) = hash_password("correct horse battery staple").unwrap();
        assert_eq!(salt.len(), SALT_LEN);
        assert!(verify_password("correct horse battery staple", &hash, &salt).unwrap());
    }

    #[test]
    fn test_wrong_password_fails() {
        let (hash, salt) = hash_password("password123").unwrap();
        assert!(!verify_password("password124", &hash, &salt).unwrap());
    }

    #[test]
    fn test_salts_are_unique_per_user() {
        let (_, salt_a) = hash_password("same password").unwrap();
        let (_, salt_b) = hash_password("same password").unwrap();
        assert_ne!(salt_a, salt_b);
    }

    #[test]
    fn test_malformed_stored_salt_fails_closed() {
        let (hash, _) = hash_password("password123").unwrap();
        assert!(!verify_password("password123", &hash, &[1, 2, 3]).unwrap());
    }
}
