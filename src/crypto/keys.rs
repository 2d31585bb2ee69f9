//! X25519 key material.
//!
//! Provides type-safe wrappers for a clamped Curve25519 private scalar and
//! its public point, with automatic zeroization of secret material on drop.
//! The curve arithmetic itself sits behind [`ScalarMultiplier`].

use std::fmt;

use x25519_dalek::X25519_BASEPOINT_BYTES;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::encoding::encode_key;
use crate::crypto::KEY_SIZE;
use crate::error::{Error, Result};

/// The Curve25519 base point, u = 9 little-endian.
pub const BASEPOINT: [u8; KEY_SIZE] = X25519_BASEPOINT_BYTES;

/// Apply Curve25519 scalar clamping to raw bytes.
pub fn clamp(mut bytes: [u8; KEY_SIZE]) -> [u8; KEY_SIZE] {
    bytes[0] &= 0b1111_1000;
    bytes[31] &= 0b0111_1111;
    bytes[31] |= 0b0100_0000;
    bytes
}

/// Check whether `bytes` already satisfies the clamping invariant.
pub fn is_clamped(bytes: &[u8; KEY_SIZE]) -> bool {
    bytes[0] & 0b0000_0111 == 0 && bytes[31] & 0b1000_0000 == 0 && bytes[31] & 0b0100_0000 != 0
}

/// X25519 scalar multiplication as an injectable capability.
pub trait ScalarMultiplier {
    /// Multiply `point` by `scalar`.
    fn multiply(&self, scalar: &[u8; KEY_SIZE], point: &[u8; KEY_SIZE]) -> Result<[u8; KEY_SIZE]>;

    /// The fixed base point public keys are derived from.
    fn base_point(&self) -> [u8; KEY_SIZE] {
        BASEPOINT
    }
}

/// [`ScalarMultiplier`] backed by `x25519-dalek`.
///
/// Rejects an all-zero result, which only a low-order input point can
/// produce.
#[derive(Clone, Copy, Debug, Default)]
pub struct X25519;

impl ScalarMultiplier for X25519 {
    fn multiply(&self, scalar: &[u8; KEY_SIZE], point: &[u8; KEY_SIZE]) -> Result<[u8; KEY_SIZE]> {
        let out = x25519_dalek::x25519(*scalar, *point);
        if out.iter().fold(0u8, |acc, b| acc | b) == 0 {
            return Err(Error::scalar_multiplication("low order point"));
        }
        Ok(out)
    }
}

/// A clamped X25519 private key.
///
/// Only constructible through clamping, so it always satisfies
/// [`is_clamped`]. Automatically zeroized when dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey([u8; KEY_SIZE]);

impl PrivateKey {
    /// Clamp raw random bytes into a private key.
    pub fn from_random(bytes: [u8; KEY_SIZE]) -> Self {
        Self(clamp(bytes))
    }

    /// Get the raw bytes of this private key.
    ///
    /// # Security
    ///
    /// Handle the returned bytes with care.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }

    /// Unpadded URL-safe base64 of the key bytes.
    pub fn to_base64(&self) -> String {
        encode_key(&self.0)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

/// An X25519 public key.
///
/// Safe to share publicly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey([u8; KEY_SIZE]);

impl PublicKey {
    /// Derive the public key for `private` against the multiplier's base point.
    pub fn derive<M>(private: &PrivateKey, multiplier: &M) -> Result<Self>
    where
        M: ScalarMultiplier + ?Sized,
    {
        let point = multiplier.multiply(private.as_bytes(), &multiplier.base_point())?;
        Ok(Self(point))
    }

    /// Get the raw bytes of this public key.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }

    /// Convert to raw bytes.
    pub fn to_bytes(self) -> [u8; KEY_SIZE] {
        self.0
    }

    /// Unpadded URL-safe base64 of the key bytes.
    pub fn to_base64(&self) -> String {
        encode_key(&self.0)
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
