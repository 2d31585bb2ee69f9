//! # reality-keygen
//!
//! Generates X25519 key pairs for REALITY TLS camouflage. The server keeps
//! the private key; clients are configured with the public key.
//!
//! ```text
//! OS entropy ──► clamp ──► X25519(k, 9) ──► base64url (no padding)
//!   32 bytes     PrivateKey    PublicKey        "Private key: ..."
//!                                               "Public key: ..."
//! ```
//!
//! ## Usage
//!
//! ```no_run
//! use reality_keygen::KeyPairGenerator;
//!
//! let pair = KeyPairGenerator::new().generate()?;
//! print!("{}", pair.encode());
//! # Ok::<(), reality_keygen::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod crypto;
pub mod error;
pub mod keygen;

pub use error::{Error, Result};
pub use keygen::{emit, EncodedKeyPair, KeyPair, KeyPairGenerator};
