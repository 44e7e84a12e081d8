//! API key generation and hashing utilities.
//!
//! This module lives in `core` (zero internal deps) so it can be used by
//! both the API layer (authentication) and the repository layer (storage).
//! Only the SHA-256 hash of a key is ever persisted; the plaintext is shown
//! to the caller exactly once at creation time.

use rand::Rng;
use sha2::{Digest, Sha256};

/// Length of the generated API key string (alphanumeric characters).
pub const KEY_LENGTH: usize = 48;

/// Number of leading characters stored as a human-visible prefix.
pub const KEY_PREFIX_LENGTH: usize = 8;

/// The result of generating a new API key.
pub struct GeneratedApiKey {
    /// The plaintext key (shown to the caller exactly once, never stored).
    pub plaintext: String,
    /// The first [`KEY_PREFIX_LENGTH`] characters of the key for display.
    pub prefix: String,
    /// The SHA-256 hex digest of the plaintext key (stored in the database).
    pub hash: String,
}

/// Generate a new random API key.
///
/// Returns the plaintext (shown once), prefix (for identification), and
/// SHA-256 hash (for storage). The plaintext must never be persisted.
pub fn generate_api_key() -> GeneratedApiKey {
    let key: String = rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(KEY_LENGTH)
        .map(char::from)
        .collect();

    let prefix = key[..KEY_PREFIX_LENGTH].to_string();
    let hash = hash_api_key(&key);

    GeneratedApiKey {
        plaintext: key,
        prefix,
        hash,
    }
}

/// Compute the SHA-256 hex digest of an API key.
///
/// Used both during key creation (to store the hash) and during
/// authentication (to look up the key by hash).
pub fn hash_api_key(key: &str) -> String {
    let digest = Sha256::digest(key.as_bytes());
    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}

/// Extract the display prefix from a plaintext API key.
pub fn extract_prefix(key: &str) -> &str {
    &key[..KEY_PREFIX_LENGTH.min(key.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_key_has_expected_shape() {
        let generated = generate_api_key();

        assert_eq!(generated.plaintext.len(), KEY_LENGTH);
        assert_eq!(generated.prefix.len(), KEY_PREFIX_LENGTH);
        assert!(generated.plaintext.starts_with(&generated.prefix));
        // SHA-256 hex digest is 64 characters.
        assert_eq!(generated.hash.len(), 64);
    }

    #[test]
    fn hash_is_deterministic_and_matches_generated() {
        let generated = generate_api_key();
        assert_eq!(hash_api_key(&generated.plaintext), generated.hash);
        assert_eq!(
            hash_api_key("fixed-input"),
            hash_api_key("fixed-input"),
        );
    }

    #[test]
    fn distinct_keys_are_generated() {
        let a = generate_api_key();
        let b = generate_api_key();
        assert_ne!(a.plaintext, b.plaintext);
        assert_ne!(a.hash, b.hash);
    }

    #[test]
    fn extract_prefix_handles_short_input() {
        assert_eq!(extract_prefix("abc"), "abc");
        assert_eq!(extract_prefix("abcdefghij"), "abcdefgh");
    }
}
