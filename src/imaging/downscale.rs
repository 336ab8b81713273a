//! 2x block downscaling in two arithmetic domains.
//!
//! Every output channel is computed from the same channel of a 2x2 pixel block.
//!
//! - **Plaintext**: integer mean, `(p1 + p2 + p3 + p4) / 4`, truncating.
//! - **Field**: `(p1 + p2 + p3 + p4) * 4^-1` in GF(257), stored as the low 8 bits.
//!
//! The field operator is linear, so applying it to every share of an image and then
//! reconstructing yields the field mean of the secret. That equals the integer mean only when
//! the channel sum is a multiple of 4; otherwise `4^-1` produces a large field element and
//! the two results diverge. Measuring that divergence is what the comparator is for.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;
use crate::core::gf257::{Gf257, INV_4};
use super::{ImagingError, RasterLayout};

/// Integer mean of four channel samples.
#[inline(always)]
pub fn average_plain(samples: [u8; 4]) -> u8 {
    let sum: u16 = samples.iter().map(|&s| u16::from(s)).sum();
    let avg = sum / 4;
    debug_assert!(avg <= 255, "mean of four bytes exceeds a byte");
    avg.min(255) as u8
}

/// Field mean of four share samples, truncated to a byte (256 is stored as 0).
#[inline(always)]
pub fn average_field(samples: [u8; 4]) -> u8 {
    let sum = samples
        .iter()
        .fold(Gf257::ZERO, |acc, &s| acc + Gf257::from(s));
    (sum * INV_4).to_byte_truncated()
}

/// Downscales `payload` by 2 in both directions, combining each 2x2 block with `average`.
///
/// Returns the halved layout and its payload. Output rows are padded to the recomputed
/// stride; padding bytes are zero. Input padding is never read.
pub fn downscale_with<F>(
    payload: &[u8],
    layout: &RasterLayout,
    mut average: F,
) -> Result<(RasterLayout, Vec<u8>), ImagingError>
where
    F: FnMut([u8; 4]) -> u8,
{
    layout.require_downscalable()?;
    layout.require_payload(payload)?;

    let out_layout = layout.halved();
    let channels = layout.bytes_per_pixel();
    let mut out = vec![0u8; out_layout.payload_len()];

    for y in 0..out_layout.height {
        for x in 0..out_layout.width {
            let out_idx = out_layout.pixel_offset(x, y);
            let [p1, p2, p3, p4] = layout.block_offsets(x, y);
            for c in 0..channels {
                out[out_idx + c] =
                    average([payload[p1 + c], payload[p2 + c], payload[p3 + c], payload[p4 + c]]);
            }
        }
    }

    Ok((out_layout, out))
}

/// Downscales plaintext pixels with the integer mean.
pub fn downscale_plain(
    payload: &[u8],
    layout: &RasterLayout,
) -> Result<(RasterLayout, Vec<u8>), ImagingError> {
    downscale_with(payload, layout, average_plain)
}

/// Downscales share pixels with the GF(257) mean.
pub fn downscale_field(
    payload: &[u8],
    layout: &RasterLayout,
) -> Result<(RasterLayout, Vec<u8>), ImagingError> {
    downscale_with(payload, layout, average_field)
}
