//! bcrypt password hashing.

use crate::error::AuthError;

/// Hash `password` at the given bcrypt cost.
///
/// # Errors
///
/// Returns `AuthError::Hash` if the cost is outside bcrypt's accepted range.
pub fn hash(password: &str, cost: u32) -> Result<String, AuthError> {
    bcrypt::hash(password, cost).map_err(|e| AuthError::Hash(e.to_string()))
}

/// Compare `password` against a stored bcrypt hash.
///
/// # Errors
///
/// Returns `AuthError::Hash` if `hash` is not a well-formed bcrypt hash. A
/// wrong password is `Ok(false)`.
pub fn verify(password: &str, hash: &str) -> Result<bool, AuthError> {
    bcrypt::verify(password, hash).map_err(|e| AuthError::Hash(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const COST: u32 = 4;

    #[test]
    fn hash_then_verify() {
        let hashed = hash("123456", COST).unwrap();
        assert!(hashed.starts_with("$2"));
        assert!(verify("123456", &hashed).unwrap());
        assert!(!verify("1234567", &hashed).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        assert_ne!(hash("123456", COST).unwrap(), hash("123456", COST).unwrap());
    }

    #[test]
    fn malformed_hash_is_error() {
        assert!(matches!(verify("123456", "plaintext"), Err(AuthError::Hash(_))));
    }

    #[test]
    fn cost_out_of_range_is_error() {
        assert!(hash("123456", 2).is_err());
    }
}
