//! Randomness sources for share generation.
//!
//! The secrecy of a share set rests entirely on the random polynomial coefficients, so the
//! source is always passed in explicitly rather than reached through a process-wide generator.
//!
//! # Design
//! - **Injectable**: Every splitting routine takes `&mut R where R: EntropySource`.
//! - **CSPRNG Only**: Production sources wrap `rand_core` generators marked `CryptoRng`.
//! - **Deterministic Tests**: [`replay::ReplaySource`] replays scripted bytes, which makes
//!   specific coefficients (and therefore specific share values) reachable on purpose.

pub mod os;
pub mod replay;

use core::fmt;

pub use os::RngSource;
#[cfg(feature = "std")]
pub use os::OsEntropy;
pub use replay::ReplaySource;

/// Error types for entropy collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// The underlying generator reported a failure.
    CollectionFailed,
    /// Source is exhausted (e.g., fixed buffer).
    Exhausted,
}

impl fmt::Display for EntropyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntropyError::CollectionFailed => write!(f, "Entropy collection failed"),
            EntropyError::Exhausted => write!(f, "Entropy source exhausted"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EntropyError {}

/// A trait for entropy sources.
pub trait EntropySource {
    /// Returns a unique identifier for the source.
    fn name(&self) -> &'static str;

    /// Fills `dest` with random bytes from the source.
    ///
    /// # Returns
    /// * `Ok(())` on success.
    /// * `Err(EntropyError)` if the source fails.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;
}
