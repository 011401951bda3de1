//! Blake2b-based token derivation.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use vigil_types::IdentityHash;

type Blake2b256 = Blake2b<U32>;

/// Compute a 256-bit Blake2b digest of the given parts, hashed in sequence.
fn blake2b_256(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// A 16-character lowercase-hex truncation of the digest of `parts`.
///
/// Used for verification record ids and the device id itself.
pub fn short_digest(parts: &[&[u8]]) -> String {
    let digest = blake2b_256(parts);
    hex::encode(digest)[..IdentityHash::LEN].to_string()
}

/// Derive the public identity token for a device id.
///
/// Deterministic: the same id always yields the same hash.
pub fn derive_hash(device_id: &str) -> IdentityHash {
    IdentityHash::new(short_digest(&[device_id.as_bytes()]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_is_deterministic() {
        assert_eq!(derive_hash("device-a"), derive_hash("device-a"));
    }

    #[test]
    fn derive_differs_per_input() {
        assert_ne!(derive_hash("device-a"), derive_hash("device-b"));
    }

    #[test]
    fn derived_hash_is_fixed_length_hex() {
        let h = derive_hash("some-device-id");
        assert_eq!(h.as_str().len(), IdentityHash::LEN);
        assert!(h.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn short_digest_sensitive_to_part_boundaries_content() {
        // Parts are hashed in sequence, so concatenation is what matters.
        assert_eq!(short_digest(&[b"ab", b"cd"]), short_digest(&[b"abcd"]));
        assert_ne!(short_digest(&[b"abcd"]), short_digest(&[b"abce"]));
    }
}
