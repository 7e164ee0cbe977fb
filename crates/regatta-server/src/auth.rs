//! Admin credential check.

use sha2::{Digest, Sha256};

/// Validates the operator credential supplied with protected calls.
///
/// Stateless: no sessions, no expiry. Both sides are hashed before
/// comparison, so the check never short-circuits on the secret bytes.
#[derive(Clone)]
pub struct AdminAuth {
    token_hash: String,
}

impl AdminAuth {
    pub fn new(token: &str) -> Self {
        Self {
            token_hash: hash_secret(token),
        }
    }

    /// Check a supplied credential against the configured secret.
    pub fn authorize(&self, supplied: &str) -> bool {
        hash_secret(supplied) == self.token_hash
    }
}

/// Hash a secret using SHA-256.
fn hash_secret(secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_token_accepted() {
        let auth = AdminAuth::new("syntul2026admin");
        assert!(auth.authorize("syntul2026admin"));
    }

    #[test]
    fn test_wrong_token_rejected() {
        let auth = AdminAuth::new("syntul2026admin");
        assert!(!auth.authorize("wrong"));
        assert!(!auth.authorize(""));
        assert!(!auth.authorize("syntul2026admin "));
    }

    #[test]
    fn test_hash_is_stable() {
        assert_eq!(hash_secret("test"), hash_secret("test"));
        assert_ne!(hash_secret("test"), hash_secret("other"));
        assert_eq!(hash_secret("test").len(), 64);
    }
}
