//! Configuration for sharing and the downscale experiment.
//!
//! Defines the parameters a host application chooses and passes into the library.

use alloc::string::String;
use crate::mpc::MpcError;

/// Threshold the share generator supports (degree-1 polynomials).
pub const SUPPORTED_THRESHOLD: u8 = 2;

/// Default number of shares.
pub const DEFAULT_SHARE_COUNT: u8 = 3;

/// Threshold parameters, validated at construction.
///
/// Generation and interpolation are written for any `k`; this type is the single place that
/// pins `k` to [`SUPPORTED_THRESHOLD`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharingConfig {
    threshold: u8,
    share_count: u8,
}

impl SharingConfig {
    /// Validates `k` (threshold) and `n` (share count).
    ///
    /// # Returns
    /// * `Ok(SharingConfig)` when `k == 2` and `k <= n`. `n` is a `u8`, so x-coordinates
    ///   `1..=n` are always non-zero field elements.
    /// * `Err(MpcError::InvalidThreshold)` otherwise.
    pub fn new(threshold: u8, share_count: u8) -> Result<Self, MpcError> {
        if threshold != SUPPORTED_THRESHOLD {
            return Err(MpcError::InvalidThreshold);
        }
        if share_count < threshold {
            return Err(MpcError::InvalidThreshold);
        }
        Ok(Self { threshold, share_count })
    }

    /// Minimum number of shares needed to reconstruct (k).
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Number of shares produced (n).
    pub fn share_count(&self) -> u8 {
        self.share_count
    }
}

impl Default for SharingConfig {
    fn default() -> Self {
        Self {
            threshold: SUPPORTED_THRESHOLD,
            share_count: DEFAULT_SHARE_COUNT,
        }
    }
}

/// Settings for the homomorphic downscale experiment.
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    /// Input bitmap (24-bit, even width and height).
    pub input_path: String,

    /// Directory receiving every artifact. Created if missing.
    pub output_dir: String,

    /// Threshold parameters for the share step.
    pub sharing: SharingConfig,

    /// x-coordinates of the downscaled shares used for reconstruction.
    pub reconstruct_with: [u8; 2],

    /// File name of the plaintext-downscaled baseline.
    pub baseline_name: String,

    /// Prefix of the full-size share files (`{prefix}_{x}.bmp`).
    pub share_prefix: String,

    /// Prefix of the downscaled share files.
    pub downscaled_share_prefix: String,

    /// File name of the image reconstructed from downscaled shares.
    pub reconstructed_name: String,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            input_path: String::new(),
            output_dir: String::from("homomorphic_output"),
            sharing: SharingConfig::default(),
            reconstruct_with: [1, 3],
            baseline_name: String::from("I_o_original_downscaled.bmp"),
            share_prefix: String::from("share_I"),
            downscaled_share_prefix: String::from("share_I_s"),
            reconstructed_name: String::from("I_s_reconstructed_downscaled.bmp"),
        }
    }
}
