//! Password hashing and verification.

use sha2::{Digest, Sha256};

/// Hashes passwords as an unsalted SHA-256 digest rendered as lowercase
/// hex. Digests are deterministic; verification compares hex digests
/// case-insensitively.
// TODO: swap to a memory-hard KDF once stored digests can be migrated.
#[derive(Debug, Clone)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Creates a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hashes a plaintext password.
    pub fn hash_password(&self, password: &str) -> String {
        let digest = Sha256::digest(password.as_bytes());
        hex::encode(digest)
    }

    /// Verifies a plaintext password against a stored digest.
    pub fn verify_password(&self, password: &str, hash: &str) -> bool {
        self.hash_password(password).eq_ignore_ascii_case(hash)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
