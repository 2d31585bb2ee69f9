//! Key pair generation and output.

use std::fmt;
use std::io::Write;

use rand::{CryptoRng, RngCore};
use rand_core::OsRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{
    decode_key, fill_from, PrivateKey, PublicKey, ScalarMultiplier, KEY_SIZE, X25519,
};
use crate::error::Result;

/// A private key and the public key derived from it.
#[derive(Clone, Debug)]
pub struct KeyPair {
    private: PrivateKey,
    public: PublicKey,
}

impl KeyPair {
    /// Re-derive a key pair from an encoded private key.
    pub fn from_encoded_private(encoded: &str) -> Result<Self> {
        let mut raw = decode_key(encoded)?;
        let private = PrivateKey::from_random(raw);
        raw.zeroize();
        KeyPairGenerator::new().derive(private)
    }

    /// The private key.
    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    /// The public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Encode both keys for display.
    pub fn encode(&self) -> EncodedKeyPair {
        EncodedKeyPair {
            private_key: self.private.to_base64(),
            public_key: self.public.to_base64(),
        }
    }
}

/// Text form of a [`KeyPair`].
///
/// `Display` renders the two output lines, private key first.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct EncodedKeyPair {
    /// Private key, unpadded URL-safe base64
    pub private_key: String,
    /// Public key, unpadded URL-safe base64
    pub public_key: String,
}

impl fmt::Display for EncodedKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Private key: {}", self.private_key)?;
        writeln!(f, "Public key: {}", self.public_key)
    }
}

impl fmt::Debug for EncodedKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedKeyPair")
            .field("private_key", &"..")
            .field("public_key", &self.public_key)
            .finish()
    }
}

/// Generates Curve25519 key pairs.
///
/// Randomness and scalar multiplication are injected, so tests can swap in
/// deterministic or failing parts. [`KeyPairGenerator::new`] uses the OS
/// entropy source and `x25519-dalek`.
pub struct KeyPairGenerator<R = OsRng, M = X25519> {
    rng: R,
    multiplier: M,
}

impl KeyPairGenerator {
    /// Create a generator backed by the OS RNG and `x25519-dalek`.
    pub fn new() -> Self {
        Self::with_parts(OsRng, X25519)
    }
}

impl Default for KeyPairGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, M> KeyPairGenerator<R, M>
where
    R: RngCore + CryptoRng,
    M: ScalarMultiplier,
{
    /// Create a generator from an RNG and a scalar multiplier.
    pub fn with_parts(rng: R, multiplier: M) -> Self {
        Self { rng, multiplier }
    }

    /// Generate a fresh key pair.
    ///
    /// Fails with [`Error::RandomSource`](crate::Error::RandomSource) if the
    /// RNG cannot supply bytes, or
    /// [`Error::ScalarMultiplication`](crate::Error::ScalarMultiplication)
    /// if the public point cannot be computed. No key material escapes on
    /// either path.
    pub fn generate(&mut self) -> Result<KeyPair> {
        let mut raw = [0u8; KEY_SIZE];
        let filled = fill_from(&mut self.rng, &mut raw);
        if let Err(e) = filled {
            raw.zeroize();
            tracing::debug!("random source failed: {}", e);
            return Err(e);
        }
        tracing::debug!("obtained {} random bytes", KEY_SIZE);

        let private = PrivateKey::from_random(raw);
        raw.zeroize();
        tracing::debug!("clamped private scalar");

        self.derive(private)
    }

    /// Derive the key pair for an existing private key.
    pub fn derive(&self, private: PrivateKey) -> Result<KeyPair> {
        let public = PublicKey::derive(&private, &self.multiplier)?;
        tracing::debug!(public_key = %public.to_base64(), "derived public key");
        Ok(KeyPair { private, public })
    }
}

/// Generate a key pair and write it to `out`.
///
/// On success writes the two key lines. On failure writes a single
/// `Error: <description>` line and returns the error, so the caller decides
/// the exit status.
pub fn emit<W, R, M>(out: &mut W, generator: &mut KeyPairGenerator<R, M>) -> Result<()>
where
    W: Write + ?Sized,
    R: RngCore + CryptoRng,
    M: ScalarMultiplier,
{
    match generator.generate() {
        Ok(pair) => {
            write!(out, "{}", pair.encode())?;
            out.flush()?;
            Ok(())
        }
        Err(e) => {
            writeln!(out, "Error: {}", e)?;
            out.flush()?;
            Err(e)
        }
    }
}
