//! Quorum logic for Shamir's Secret Sharing over GF(257).
//!
//! This module implements the threshold logic and polynomial generation required
//! to split secrets into shares.
//!
//! # Security
//! - **Uniform Coefficients**: Coefficients are sampled from `[0, 257)` without modulo bias.
//! - **Zeroization**: Polynomial coefficients and raw random bytes are zeroized after use.
//! - **Validation**: Threshold parameters are checked once, by `SharingConfig`.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;
use zeroize::Zeroizing;
use crate::config::SharingConfig;
use crate::core::gf257::{Gf257, PRIME};
use crate::mpc::polynomial::evaluate_polynomial;
use crate::mpc::share::{encode_field, Share};
use crate::mpc::MpcError;
use crate::entropy::EntropySource;

/// Largest multiple of 257 representable in a `u16` draw (257 * 255 = 65535).
///
/// Draws at or above it are rejected, so `raw % 257` is exactly uniform.
const REJECTION_BOUND: u16 = PRIME * (u16::MAX / PRIME);

/// Draws one coefficient uniformly from `[0, 257)`.
///
/// Reads two bytes (big-endian) per attempt and rejects the single out-of-range value 65535.
pub fn draw_coefficient<R: EntropySource + ?Sized>(rng: &mut R) -> Result<Gf257, MpcError> {
    let mut buf = Zeroizing::new([0u8; 2]);
    loop {
        rng.fill(&mut buf[..]).map_err(|_| MpcError::RngFailure)?;
        let raw = u16::from_be_bytes(*buf);
        if raw < REJECTION_BOUND {
            return Ok(Gf257::new(raw));
        }
    }
}

/// Splits a secret into `n` shares, requiring `k` shares to reconstruct.
///
/// For each secret byte `s` a fresh polynomial `f(x) = s + a1*x + ... + a(k-1)*x^(k-1)` is
/// drawn and evaluated at `x = 1..=n`. Each evaluation is stored as its low 8 bits, so a value
/// of 256 is written as 0.
///
/// # Arguments
/// * `secret` - The secret data to split.
/// * `config` - Validated threshold parameters.
/// * `rng` - A mutable reference to an entropy source.
///
/// # Returns
/// * `Ok(Vec<Share>)` containing `n` shares with identifiers `1..=n`.
/// * `Err(MpcError)` on failure (empty secret, rng failure).
pub fn split_secret<R: EntropySource + ?Sized>(
    secret: &[u8],
    config: &SharingConfig,
    rng: &mut R,
) -> Result<Vec<Share>, MpcError> {
    if secret.is_empty() {
        return Err(MpcError::EmptyShare);
    }

    let k = config.threshold() as usize;
    let n = config.share_count();

    // share_values[i] belongs to the share with identifier i+1.
    let mut share_values: Vec<Vec<u8>> = (0..n)
        .map(|_| Vec::with_capacity(secret.len()))
        .collect();

    // coeffs[0] is the secret byte, coeffs[1..] are random. Reused across bytes.
    let mut coeffs = Zeroizing::new(vec![Gf257::ZERO; k]);
    let mut collapsed = 0usize;

    for &byte in secret {
        coeffs[0] = Gf257::from(byte);
        for c in coeffs.iter_mut().skip(1) {
            *c = draw_coefficient(rng)?;
        }

        for (i, values) in share_values.iter_mut().enumerate() {
            let x = Gf257::new(i as u16 + 1);
            let (stored, lost) = encode_field(evaluate_polynomial(&coeffs, x));
            collapsed += usize::from(lost);
            values.push(stored);
        }
    }

    if collapsed > 0 {
        log::debug!(
            "{} of {} share values were 256 and are stored as 0",
            collapsed,
            secret.len() * n as usize
        );
    }

    share_values
        .into_iter()
        .enumerate()
        .map(|(i, value)| Share::new((i + 1) as u8, value))
        .collect()
}
