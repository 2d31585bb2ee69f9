//! Error types for key pair generation.

use thiserror::Error;

/// Result type alias for key generation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating or rendering a key pair.
#[derive(Error, Debug)]
pub enum Error {
    /// The secure random source failed to supply bytes
    #[error("random source error: {0}")]
    RandomSource(#[from] rand_core::Error),

    /// X25519 scalar multiplication rejected its input
    #[error("scalar multiplication failed: {0}")]
    ScalarMultiplication(String),

    /// An encoded key is not valid unpadded URL-safe base64 of 32 bytes
    #[error("invalid key encoding: {0}")]
    Encoding(String),

    /// Writing the output failed
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new scalar multiplication error
    pub fn scalar_multiplication(msg: impl Into<String>) -> Self {
        Error::ScalarMultiplication(msg.into())
    }

    /// Create a new encoding error
    pub fn encoding(msg: impl Into<String>) -> Self {
        Error::Encoding(msg.into())
    }

    /// Check if this error happened while producing key material.
    ///
    /// Such failures are terminal for the invocation; a fresh attempt is
    /// simply another call.
    pub fn is_key_material_failure(&self) -> bool {
        matches!(self, Error::RandomSource(_) | Error::ScalarMultiplication(_))
    }
}
