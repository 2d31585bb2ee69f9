//! Secure random number generation.
//!
//! Provides cryptographically secure random bytes using the operating
//! system's entropy source. Unlike the infallible `fill_bytes`, every call
//! here surfaces a failing source as [`Error::RandomSource`].

use rand::{CryptoRng, RngCore};
use rand_core::OsRng;

use crate::error::{Error, Result};

/// Cryptographically secure random number generator.
///
/// Wraps the OS-provided entropy source (e.g., getrandom(2) on Linux,
/// BCryptGenRandom on Windows).
pub struct SecureRandom;

impl SecureRandom {
    /// Fill a buffer from the OS entropy source.
    pub fn try_fill(dest: &mut [u8]) -> Result<()> {
        fill_from(&mut OsRng, dest)
    }

    /// Generate a fixed-size array of random bytes.
    pub fn try_bytes<const N: usize>() -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        Self::try_fill(&mut buf)?;
        Ok(buf)
    }
}

/// Fill `dest` from any cryptographically secure RNG.
pub fn fill_from<R>(rng: &mut R, dest: &mut [u8]) -> Result<()>
where
    R: RngCore + CryptoRng + ?Sized,
{
    rng.try_fill_bytes(dest).map_err(Error::RandomSource)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenRng;

    impl RngCore for BrokenRng {
        fn next_u32(&mut self) -> u32 {
            unreachable!()
        }

        fn next_u64(&mut self) -> u64 {
            unreachable!()
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            unreachable!()
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> std::result::Result<(), rand_core::Error> {
            Err(rand_core::Error::new(std::io::Error::other("device not configured")))
        }
    }

    impl CryptoRng for BrokenRng {}

    #[test]
    fn test_secure_random_fill() {
        let mut buf1 = [0u8; 32];
        let mut buf2 = [0u8; 32];

        SecureRandom::try_fill(&mut buf1).unwrap();
        SecureRandom::try_fill(&mut buf2).unwrap();

        assert!(!buf1.iter().all(|&b| b == 0));
        assert_ne!(buf1, buf2);
    }

    #[test]
    fn test_secure_random_bytes() {
        let bytes1: [u8; 32] = SecureRandom::try_bytes().unwrap();
        let bytes2: [u8; 32] = SecureRandom::try_bytes().unwrap();

        assert_ne!(bytes1, bytes2);
    }

    #[test]
    fn test_failing_source() {
        let mut buf = [0u8; 32];
        let err = fill_from(&mut BrokenRng, &mut buf).unwrap_err();

        assert!(matches!(err, Error::RandomSource(_)));
        assert!(err.to_string().contains("device not configured"));
    }
}
