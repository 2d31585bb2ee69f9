//! REALITY key pair generator
//!
//! Usage: reality-keygen
//!
//! Prints a fresh X25519 private key for the server and the matching public
//! key for clients, both as unpadded URL-safe base64.

use std::io;

use anyhow::Context;
use reality_keygen::KeyPairGenerator;

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries only the key lines
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut generator = KeyPairGenerator::new();

    reality_keygen::emit(&mut out, &mut generator).context("key generation failed")?;

    tracing::debug!("key pair written");
    Ok(())
}
