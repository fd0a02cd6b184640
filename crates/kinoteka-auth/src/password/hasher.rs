//! Salted SHA-256 password hashing.

use sha2::{Digest, Sha256};

use kinoteka_core::config::AuthConfig;

/// Hashes plaintext passwords with the system-wide salt.
///
/// The digest is deterministic: the same plaintext always yields the
/// same hex string, so the store matches credentials by digest
/// equality. The salt is shared by all accounts, which means identical
/// passwords produce identical digests across accounts. A per-account
/// random salt with an adaptive hash would remove that property and
/// with it the equality-based store lookup; the trade-off is recorded
/// in the project design notes.
#[derive(Clone)]
pub struct PasswordHasher {
    salt: String,
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher").finish_non_exhaustive()
    }
}

impl PasswordHasher {
    /// Creates a new password hasher from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            salt: config.password_salt.clone(),
        }
    }

    /// Hashes a plaintext password into a hex-encoded digest.
    pub fn hash_password(&self, password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.salt.as_bytes());
        hasher.update(password.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher_with_salt(salt: &str) -> PasswordHasher {
        PasswordHasher::new(&AuthConfig {
            jwt_secret: "unused".to_string(),
            token_ttl_hours: 12,
            password_salt: salt.to_string(),
        })
    }

    #[test]
    fn test_hashing_is_deterministic() {
        let hasher = hasher_with_salt("salt-a");
        assert_eq!(hasher.hash_password("secret"), hasher.hash_password("secret"));
    }

    #[test]
    fn test_different_passwords_differ() {
        let hasher = hasher_with_salt("salt-a");
        assert_ne!(hasher.hash_password("secret"), hasher.hash_password("hunter2"));
    }

    #[test]
    fn test_different_salts_differ() {
        let a = hasher_with_salt("salt-a");
        let b = hasher_with_salt("salt-b");
        assert_ne!(a.hash_password("secret"), b.hash_password("secret"));
    }

    #[test]
    fn test_digest_is_hex_encoded_sha256() {
        let digest = hasher_with_salt("salt-a").hash_password("secret");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
