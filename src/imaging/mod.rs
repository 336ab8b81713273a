//! Raster plumbing around the sharing core.
//!
//! The sharing engine only sees flat byte sequences. This module supplies what it needs to
//! treat those bytes as pixels: the row layout of 24-bit rasters, the 54-byte bitmap header
//! record, the 2x2 block-average operators, and the sum-of-absolute-errors comparator.
//!
//! # Components
//! - `layout`: Dimensions, row stride and 2x2 block addressing.
//! - `bmp`: Fixed-size header codec and the `Raster` (header + payload) container.
//! - `downscale`: Plaintext (integer) and share (GF(257)) block averaging.
//! - `compare`: SAE between two rasters.

pub mod layout;
pub mod bmp;
pub mod downscale;
pub mod compare;

use core::fmt;

pub use bmp::{BmpHeader, Raster, HEADER_SIZE};
pub use compare::{compare_rasters, sum_absolute_error, SaeReport};
pub use downscale::{downscale_field, downscale_plain};
pub use layout::RasterLayout;

/// Errors for raster-level operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagingError {
    /// Input shorter than the header, or payload shorter than `stride * height`.
    PayloadTooSmall {
        /// Bytes required.
        expected: usize,
        /// Bytes supplied.
        actual: usize,
    },
    /// Only 24 bits per pixel are supported.
    UnsupportedBitDepth(u16),
    /// Downscaling needs even width and height.
    OddDimensions {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
    /// Two rasters that must be compared have different logical sizes.
    DimensionMismatch {
        /// Left-hand (width, height).
        left: (u32, u32),
        /// Right-hand (width, height).
        right: (u32, u32),
    },
    /// Header fields are out of range (zero or negative dimensions).
    InvalidHeader,
}

impl fmt::Display for ImagingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImagingError::PayloadTooSmall { expected, actual } => {
                write!(f, "Input too small: need {} bytes, got {}", expected, actual)
            }
            ImagingError::UnsupportedBitDepth(bpp) => {
                write!(f, "Only 24-bit rasters are supported (got {} bits per pixel)", bpp)
            }
            ImagingError::OddDimensions { width, height } => {
                write!(f, "Width and height must be even (got {}x{})", width, height)
            }
            ImagingError::DimensionMismatch { left, right } => write!(
                f,
                "Image dimensions mismatch: {}x{} vs {}x{}",
                left.0, left.1, right.0, right.1
            ),
            ImagingError::InvalidHeader => write!(f, "Invalid raster header"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ImagingError {}
