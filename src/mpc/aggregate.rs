//! Operations on shares.
//!
//! This module implements linear operations applied to each share independently.
//!
//! # Features
//! - **Homomorphic Downscale**: 2x2 block mean in GF(257) over a share laid out as a raster.
//!   Because the mean is linear, reconstructing downscaled shares gives the field mean of the
//!   secret pixels.
//!
//! # Caveat
//! Each downscaled value is stored as a byte, so a block mean of 256 is written as 0, exactly
//! as during share generation.

extern crate alloc;
use alloc::vec::Vec;
use crate::imaging::downscale::downscale_field;
use crate::imaging::RasterLayout;
use crate::mpc::{MpcError, share::Share};

/// Downscales one share by 2 in both directions.
///
/// `layout` describes how the share bytes are arranged (the layout of the secret image).
/// The identifier is kept, so the result is a share of the downscaled secret at the same x.
///
/// # Returns
/// * `Ok((RasterLayout, Share))` - The halved layout and the downscaled share.
/// * `Err(MpcError::Imaging)` - Odd dimensions, unsupported depth or short payload.
pub fn downscale_share(share: &Share, layout: &RasterLayout) -> Result<(RasterLayout, Share), MpcError> {
    let (out_layout, value) = downscale_field(share.value(), layout)?;
    Ok((out_layout, Share::new(share.identifier, value)?))
}

/// Downscales every share of a set with the same layout.
pub fn downscale_shares(
    shares: &[Share],
    layout: &RasterLayout,
) -> Result<(RasterLayout, Vec<Share>), MpcError> {
    let out_layout = layout.halved();
    let downscaled = shares
        .iter()
        .map(|share| downscale_share(share, layout).map(|(_, s)| s))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((out_layout, downscaled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SharingConfig;
    use crate::entropy::ReplaySource;
    use crate::imaging::downscale::downscale_plain;
    use crate::imaging::ImagingError;
    use crate::mpc::quorum::split_secret;
    use crate::mpc::reconstruct::reconstruct_secret;

    /// 2x2 raster whose channel 0 holds `block`; other channels and padding are zero.
    fn single_block(block: [u8; 4]) -> (RasterLayout, Vec<u8>) {
        let layout = RasterLayout::rgb24(2, 2); // stride 8
        let mut payload = vec![0u8; layout.payload_len()];
        for (off, v) in layout.block_offsets(0, 0).iter().zip(block) {
            payload[*off] = v;
        }
        (layout, payload)
    }

    #[test]
    fn test_downscale_commutes_with_reconstruction() {
        let (layout, payload) = single_block([10, 20, 30, 40]);
        let (_, baseline) = downscale_plain(&payload, &layout).unwrap();
        assert_eq!(baseline[0], 25);

        // Coefficients 1..=16 keep every share value below 256.
        let coefficients: Vec<u16> = (1..=16).collect();
        let mut rng = ReplaySource::from_coefficients(&coefficients);
        let shares = split_secret(&payload, &SharingConfig::default(), &mut rng).unwrap();

        let (out_layout, small) = downscale_shares(&shares, &layout).unwrap();
        assert_eq!(out_layout, RasterLayout::rgb24(1, 1));
        assert_eq!(small.len(), 3);

        // x = 1 and x = 3, as in the experiment.
        let pair = [small[0].clone(), small[2].clone()];
        let recovered = reconstruct_secret(&pair, 2).unwrap();
        assert_eq!(recovered.secret()[0], 25);
        assert_eq!(recovered.secret(), baseline.as_slice());
    }

    #[test]
    fn test_downscale_diverges_when_sum_not_divisible() {
        // Integer mean of 1, 1, 1, 0 is 0; the field mean is 3 * 4^-1 = 65.
        let (layout, payload) = single_block([1, 1, 1, 0]);
        let (_, baseline) = downscale_plain(&payload, &layout).unwrap();

        let coefficients = [2u16; 16];
        let mut rng = ReplaySource::from_coefficients(&coefficients);
        let shares = split_secret(&payload, &SharingConfig::default(), &mut rng).unwrap();
        let (_, small) = downscale_shares(&shares, &layout).unwrap();

        let recovered = reconstruct_secret(&small[..2], 2).unwrap();
        assert_eq!(baseline[0], 0);
        assert_eq!(recovered.secret()[0], 65);
    }

    #[test]
    fn test_downscale_keeps_identifier() {
        let (layout, payload) = single_block([4, 8, 12, 16]);
        let share = Share::new(3, payload).unwrap();
        let (_, small) = downscale_share(&share, &layout).unwrap();
        assert_eq!(small.identifier, 3);
        assert_eq!(small.value(), &[10, 0, 0, 0]);
    }

    #[test]
    fn test_downscale_rejects_bad_layout() {
        let share = Share::new(1, vec![0u8; 12]).unwrap();
        assert_eq!(
            downscale_share(&share, &RasterLayout::rgb24(1, 2)).unwrap_err(),
            MpcError::Imaging(ImagingError::OddDimensions { width: 1, height: 2 })
        );
    }
}
