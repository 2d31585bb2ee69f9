//! Text encoding of keys: base64 with the URL-safe alphabet and no padding.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use zeroize::Zeroize;

use crate::crypto::{ENCODED_KEY_LEN, KEY_SIZE};
use crate::error::{Error, Result};

/// Encode a 32-byte key as unpadded URL-safe base64.
pub fn encode_key(key: &[u8; KEY_SIZE]) -> String {
    URL_SAFE_NO_PAD.encode(key)
}

/// Decode an unpadded URL-safe base64 key.
///
/// Rejects padding, the standard `+`/`/` alphabet and anything that does not
/// decode to exactly 32 bytes.
pub fn decode_key(encoded: &str) -> Result<[u8; KEY_SIZE]> {
    let encoded = encoded.trim();
    if encoded.len() != ENCODED_KEY_LEN {
        return Err(Error::encoding(format!(
            "expected {} characters, got {}",
            ENCODED_KEY_LEN,
            encoded.len()
        )));
    }

    let mut bytes = URL_SAFE_NO_PAD
        .decode(encoded)
        .map_err(|e| Error::encoding(e.to_string()))?;

    if bytes.len() != KEY_SIZE {
        let len = bytes.len();
        bytes.zeroize();
        return Err(Error::encoding(format!("expected {} bytes, got {}", KEY_SIZE, len)));
    }

    let mut key = [0u8; KEY_SIZE];
    key.copy_from_slice(&bytes);
    bytes.zeroize();
    Ok(key)
}

/// Check that `encoded` only uses the URL-safe base64 alphabet.
pub fn is_url_safe(encoded: &str) -> bool {
    encoded
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
