//! Cryptographic building blocks for key generation.
//!
//! This module provides:
//! - Secure random number generation from the OS entropy source
//! - Clamped X25519 private keys and their public points
//! - Unpadded URL-safe base64 encoding of keys
//!
//! All secret material is zeroized on drop to prevent memory leakage.

mod encoding;
mod keys;
mod random;

pub use encoding::{decode_key, encode_key, is_url_safe};
pub use keys::{clamp, is_clamped, PrivateKey, PublicKey, ScalarMultiplier, X25519, BASEPOINT};
pub use random::{fill_from, SecureRandom};

/// Size of X25519 scalars and points in bytes
pub const KEY_SIZE: usize = 32;

/// Length of a key in unpadded base64 (ceil(32 * 4 / 3))
pub const ENCODED_KEY_LEN: usize = 43;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_clamped_key_pair() {
        let raw: [u8; KEY_SIZE] = SecureRandom::try_bytes().unwrap();
        let private = PrivateKey::from_random(raw);
        assert!(is_clamped(private.as_bytes()));

        let public = PublicKey::derive(&private, &X25519).unwrap();
        assert_eq!(public.as_bytes().len(), KEY_SIZE);

        let encoded = public.to_base64();
        assert_eq!(encoded.len(), ENCODED_KEY_LEN);
        assert_eq!(decode_key(&encoded).unwrap(), public.to_bytes());
    }
}
