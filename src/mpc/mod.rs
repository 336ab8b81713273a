//! Multi-Party Computation (MPC) and Secret Sharing.
//!
//! This module implements Shamir's Secret Sharing (SSS) over GF(257), applied byte-wise to
//! arbitrary payloads and in particular to raster pixel data.
//!
//! # Components
//! - `share`: Definition of a secret share.
//! - `quorum`: Threshold logic and polynomial generation.
//! - `reconstruct`: Lagrange interpolation for secret recovery.
//! - `aggregate`: Operations on shares (homomorphic 2x2 downscale).
//!
//! # Byte Boundary
//! Field elements range over 0..=256 but share bytes over 0..=255. The two directions handle
//! the spare element differently and both behaviours are kept on purpose:
//! - **Generation** stores the low 8 bits, so 256 is written as 0.
//! - **Reconstruction** saturates, so 256 is written as 255 and reported.
//!
//! # Security
//! - **Zeroization**: Shares and coefficients are zeroized on drop.
//! - **Injected Randomness**: Coefficients come from the caller's `EntropySource`.

pub mod share;
pub mod quorum;
pub mod reconstruct;
pub mod aggregate;
pub(crate) mod polynomial;

use alloc::vec::Vec;
use core::fmt;
use crate::config::SharingConfig;
use crate::core::gf257::FieldError;
use crate::entropy::EntropySource;
use crate::imaging::ImagingError;

pub use reconstruct::Reconstruction;
pub use share::Share;

/// Errors for MPC operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MpcError {
    /// Invalid share index (must be 1..=255).
    InvalidShareIndex,
    /// Secret or share value is empty.
    EmptyShare,
    /// Threshold configuration error (k != 2, k > n).
    InvalidThreshold,
    /// Not enough shares to reconstruct.
    InsufficientShares,
    /// Duplicate share indices provided.
    DuplicateShareIndex,
    /// Mismatch in share lengths.
    ShareLengthMismatch,
    /// Random number generator failure.
    RngFailure,
    /// Field arithmetic failure (inverse of zero).
    Field(FieldError),
    /// The share payload does not fit the raster operation.
    Imaging(ImagingError),
}

impl fmt::Display for MpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MpcError::InvalidShareIndex => write!(f, "Invalid share index"),
            MpcError::EmptyShare => write!(f, "Empty secret or share"),
            MpcError::InvalidThreshold => write!(f, "Invalid threshold configuration"),
            MpcError::InsufficientShares => write!(f, "Not enough shares to reconstruct"),
            MpcError::DuplicateShareIndex => write!(f, "Duplicate share index"),
            MpcError::ShareLengthMismatch => write!(f, "Share data lengths mismatch"),
            MpcError::RngFailure => write!(f, "Random number generator failure"),
            MpcError::Field(e) => write!(f, "Field arithmetic error: {}", e),
            MpcError::Imaging(e) => write!(f, "Raster error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MpcError {}

impl From<FieldError> for MpcError {
    fn from(err: FieldError) -> Self {
        MpcError::Field(err)
    }
}

impl From<ImagingError> for MpcError {
    fn from(err: ImagingError) -> Self {
        MpcError::Imaging(err)
    }
}

/// Trait for Secret Sharing Schemes.
///
/// Threshold parameters belong to the scheme instance, not to each call.
pub trait SecretSharingScheme {
    type Share;
    type Secret: ?Sized;
    type Recovered;
    type Error;

    /// Splits a secret into shares.
    fn split<R: EntropySource + ?Sized>(
        &self,
        secret: &Self::Secret,
        rng: &mut R,
    ) -> Result<Vec<Self::Share>, Self::Error>;

    /// Reconstructs a secret from shares.
    fn reconstruct(&self, shares: &[Self::Share]) -> Result<Self::Recovered, Self::Error>;
}

/// Shamir's Secret Sharing over GF(257).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShamirGf257 {
    config: SharingConfig,
}

impl ShamirGf257 {
    /// Creates a scheme with validated parameters.
    pub fn new(config: SharingConfig) -> Self {
        Self { config }
    }

    /// Threshold parameters.
    pub fn config(&self) -> &SharingConfig {
        &self.config
    }
}

impl SecretSharingScheme for ShamirGf257 {
    type Share = share::Share;
    type Secret = [u8];
    type Recovered = Reconstruction;
    type Error = MpcError;

    fn split<R: EntropySource + ?Sized>(
        &self,
        secret: &Self::Secret,
        rng: &mut R,
    ) -> Result<Vec<Self::Share>, Self::Error> {
        quorum::split_secret(secret, &self.config, rng)
    }

    fn reconstruct(&self, shares: &[Self::Share]) -> Result<Self::Recovered, Self::Error> {
        reconstruct::reconstruct_secret(shares, self.config.threshold())
    }
}
