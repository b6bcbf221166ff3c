//! Password hashing using bcrypt
//!
//! bcrypt is intentionally CPU-intensive, and at cost 14 a single hash takes
//! on the order of a second. Async callers must go through `hash_async` /
//! `verify_async`, which move the work onto the blocking thread pool.

use anyhow::{bail, Result};
use storefront_shared::validation::MAX_PASSWORD_BYTES;

/// bcrypt work factor used for every stored password
pub const PASSWORD_HASH_COST: u32 = 14;

/// Password hashing service
pub struct PasswordService;

impl PasswordService {
    /// Hash a password with the standard work factor (blocking operation)
    pub fn hash(password: &str) -> Result<String> {
        Self::hash_with_cost(password, PASSWORD_HASH_COST)
    }

    /// Hash a password with an explicit work factor (blocking operation)
    ///
    /// Inputs longer than bcrypt's 72-byte limit are refused, not truncated.
    pub fn hash_with_cost(password: &str, cost: u32) -> Result<String> {
        if password.len() > MAX_PASSWORD_BYTES {
            bail!("Password exceeds {} bytes", MAX_PASSWORD_BYTES);
        }
        bcrypt::hash(password, cost).map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))
    }

    /// Hash a password asynchronously (non-blocking)
    pub async fn hash_async(password: String) -> Result<String> {
        tokio::task::spawn_blocking(move || Self::hash(&password))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Verify a password against a hash (blocking operation)
    ///
    /// A wrong password and a malformed hash both yield `false`.
    pub fn verify(password: &str, hash: &str) -> bool {
        bcrypt::verify(password, hash).unwrap_or(false)
    }

    /// Verify a password asynchronously (non-blocking)
    pub async fn verify_async(password: String, hash: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &hash))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Minimum bcrypt cost; keeps property tests fast.
    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_uses_standard_cost() {
        let hash = PasswordService::hash("secret123").unwrap();

        assert!(hash.starts_with("$2b$14$"), "unexpected hash prefix: {}", hash);
        assert!(PasswordService::verify("secret123", &hash));
        assert!(!PasswordService::verify("secret124", &hash));
    }

    #[test]
    fn test_different_hashes_for_same_password() {
        let password = "test_password";
        let hash1 = PasswordService::hash_with_cost(password, TEST_COST).unwrap();
        let hash2 = PasswordService::hash_with_cost(password, TEST_COST).unwrap();

        // Hashes should be different due to random salt
        assert_ne!(hash1, hash2);

        // But both should verify correctly
        assert!(PasswordService::verify(password, &hash1));
        assert!(PasswordService::verify(password, &hash2));
    }

    #[test]
    fn test_overlong_password_refused() {
        let prefix = "a".repeat(MAX_PASSWORD_BYTES);
        let first = format!("{}first-suffix", prefix);
        let other = format!("{}other-suffix", prefix);

        assert!(PasswordService::hash_with_cost(&first, TEST_COST).is_err());
        assert!(PasswordService::hash_with_cost(&other, TEST_COST).is_err());
        assert!(PasswordService::hash_with_cost(&prefix, TEST_COST).is_ok());
    }

    #[test]
    fn test_malformed_hash_is_a_mismatch() {
        assert!(!PasswordService::verify("anything", "not-a-bcrypt-hash"));
        assert!(!PasswordService::verify("anything", ""));
    }

    #[tokio::test]
    async fn test_async_hash_and_verify() {
        let password = "async_test_password".to_string();
        let hash = PasswordService::hash_async(password.clone()).await.unwrap();

        assert!(PasswordService::verify_async(password, hash.clone()).await.unwrap());
        assert!(!PasswordService::verify_async("wrong".to_string(), hash).await.unwrap());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn prop_hash_then_verify_succeeds(password in "[ -~]{1,64}") {
            let hash = PasswordService::hash_with_cost(&password, TEST_COST).unwrap();
            prop_assert!(PasswordService::verify(&password, &hash));
        }

        #[test]
        fn prop_other_password_never_verifies(
            a in "[a-zA-Z0-9]{1,32}",
            b in "[a-zA-Z0-9]{1,32}",
        ) {
            prop_assume!(a != b);
            let hash = PasswordService::hash_with_cost(&b, TEST_COST).unwrap();
            prop_assert!(!PasswordService::verify(&a, &hash));
        }
    }
}
