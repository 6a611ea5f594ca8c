//! ChaCha-based secure random source.
//!
//! Wraps the standard ChaCha20 CSPRNG seeded from OS entropy. The
//! wrapper exists so the rest of the crate depends on one named source
//! whose construction is known to be safe for password material,
//! rather than on whatever generator happens to be in scope.

use rand_chacha::ChaCha20Rng;
use rand_core::{CryptoRng, RngCore, SeedableRng};

/// A cryptographically secure random source for password draws.
///
/// Backed by ChaCha20, seeded from the operating system entropy source.
/// Each instance is independent; creating one per generator keeps the
/// type `Send` without any process-wide locking.
pub struct SecureRng {
    inner: ChaCha20Rng,
}

impl SecureRng {
    /// Creates a new source seeded from OS entropy.
    pub fn from_os_entropy() -> Self {
        let mut seed = [0u8; 32];
        rand_core::OsRng.fill_bytes(&mut seed);

        Self {
            inner: ChaCha20Rng::from_seed(seed),
        }
    }

    /// Creates a source from a known seed (for testing only).
    #[cfg(test)]
    pub(crate) fn from_seed_for_testing(seed: [u8; 32]) -> Self {
        Self {
            inner: ChaCha20Rng::from_seed(seed),
        }
    }
}

impl Default for SecureRng {
    fn default() -> Self {
        Self::from_os_entropy()
    }
}

impl RngCore for SecureRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

// ChaCha20 is a stream cipher; its keystream is safe for secrets.
impl CryptoRng for SecureRng {}
