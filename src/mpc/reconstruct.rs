//! Secret reconstruction from shares.
//!
//! This module implements Lagrange interpolation over GF(257) to reconstruct
//! the original secret from a threshold number of shares.
//!
//! # Clamping
//! The interpolated value is a field element and may be 256 when a share byte was truncated
//! during generation. Such a position is written as 255, logged, and listed in
//! [`Reconstruction::clamped`]; reconstruction still succeeds.
//!
//! # Security
//! - **Validation**: Checks share count, duplicate indices and length mismatches.
//! - **Zeroization**: The recovered secret is zeroized on drop.

extern crate alloc;
use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop};
use crate::core::gf257::Gf257;
use crate::mpc::{MpcError, share::Share};

/// Output of a reconstruction.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Reconstruction {
    secret: Vec<u8>,
    /// Byte positions whose interpolated value was 256 and was stored as 255.
    #[zeroize(skip)]
    clamped: Vec<usize>,
}

impl Reconstruction {
    /// The recovered bytes.
    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    /// Positions that needed clamping, in ascending order.
    pub fn clamped(&self) -> &[usize] {
        &self.clamped
    }

    /// True when no position was clamped.
    pub fn is_exact(&self) -> bool {
        self.clamped.is_empty()
    }

    /// Takes the recovered bytes.
    pub fn into_secret(mut self) -> Vec<u8> {
        core::mem::take(&mut self.secret)
    }
}

/// Computes the Lagrange basis at x = 0 for the given x-coordinates.
///
/// basis_i = product_{j != i} x_j * (x_j - x_i)^-1
pub fn lagrange_basis(xs: &[Gf257]) -> Result<Vec<Gf257>, MpcError> {
    let mut lambdas = Vec::with_capacity(xs.len());
    for (i, &xi) in xs.iter().enumerate() {
        let mut basis = Gf257::ONE;
        for (j, &xj) in xs.iter().enumerate() {
            if i == j {
                continue;
            }
            basis *= xj * (xj - xi).inv()?;
        }
        lambdas.push(basis);
    }
    Ok(lambdas)
}

/// Reconstructs the secret from a list of shares.
///
/// Uses Lagrange interpolation at x=0 to recover the polynomial intercept (the secret).
/// All supplied shares are validated; the first `k` are interpolated.
///
/// # Arguments
/// * `shares` - At least `k` shares with distinct identifiers and equal lengths.
/// * `k` - The threshold the shares were generated with.
///
/// # Returns
/// * `Ok(Reconstruction)` - The reconstructed secret and any clamped positions.
/// * `Err(MpcError)` - If inputs are invalid (too few, mismatched lengths, duplicates).
pub fn reconstruct_secret(shares: &[Share], k: u8) -> Result<Reconstruction, MpcError> {
    if k == 0 {
        return Err(MpcError::InvalidThreshold);
    }
    let k = k as usize;
    if shares.len() < k {
        return Err(MpcError::InsufficientShares);
    }

    let share_len = shares[0].value.len();

    // 1. Validation
    for share in shares {
        if share.value.len() != share_len {
            return Err(MpcError::ShareLengthMismatch);
        }
        if share.identifier == 0 {
            return Err(MpcError::InvalidShareIndex);
        }
    }

    // O(N^2) is fine: N <= 255
    for i in 0..shares.len() {
        for j in (i + 1)..shares.len() {
            if shares[i].identifier == shares[j].identifier {
                return Err(MpcError::DuplicateShareIndex);
            }
        }
    }

    if shares.len() > k {
        log::debug!("{} shares supplied, interpolating the first {}", shares.len(), k);
    }
    let used = &shares[..k];

    // 2. Basis is independent of the byte position; compute once.
    let xs: Vec<Gf257> = used.iter().map(Share::x).collect();
    let lambdas = lagrange_basis(&xs)?;

    // 3. Reconstruct byte-by-byte: S[p] = sum_j share_j[p] * lambda_j
    let mut secret = Vec::with_capacity(share_len);
    let mut clamped = Vec::new();
    for p in 0..share_len {
        let value = used
            .iter()
            .zip(lambdas.iter())
            .fold(Gf257::ZERO, |acc, (share, &lambda)| acc + share.field_at(p) * lambda);

        let (byte, saturated) = value.to_byte_clamped();
        if saturated {
            log::warn!("Clamping reconstructed value {} > 255 at index {}", value, p);
            clamped.push(p);
        }
        secret.push(byte);
    }

    Ok(Reconstruction { secret, clamped })
}
