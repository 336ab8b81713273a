//! CSPRNG-backed entropy sources.
//!
//! Any `rand_core` generator that implements `CryptoRng` can feed share generation through
//! [`RngSource`]. [`OsEntropy`] is the default production source and reads from the operating
//! system generator.

use rand_core::{CryptoRng, RngCore};
#[cfg(feature = "std")]
use rand_core::OsRng;
use super::{EntropyError, EntropySource};

/// Adapter from a cryptographically secure `rand_core` generator.
pub struct RngSource<R> {
    rng: R,
}

impl<R: RngCore + CryptoRng> RngSource<R> {
    /// Wraps `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore + CryptoRng> EntropySource for RngSource<R> {
    fn name(&self) -> &'static str {
        "CryptoRng"
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.rng
            .try_fill_bytes(dest)
            .map_err(|_| EntropyError::CollectionFailed)
    }
}

/// Operating system randomness (`getrandom`).
#[cfg(feature = "std")]
pub type OsEntropy = RngSource<OsRng>;

#[cfg(feature = "std")]
impl Default for OsEntropy {
    fn default() -> Self {
        RngSource::new(OsRng)
    }
}
