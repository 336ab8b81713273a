//! Row layout of uncompressed rasters.
//!
//! Pixels are stored row-major with channels interleaved. Each row is padded to a multiple of
//! four bytes, so a row occupies `row_stride()` bytes of which only `width * 3` carry pixels.

use super::ImagingError;

/// The only pixel format the downscale operators accept.
pub const SUPPORTED_BITS_PER_PIXEL: u16 = 24;

/// Logical dimensions and pixel format of a raster payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterLayout {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Bits per pixel as declared by the container.
    pub bits_per_pixel: u16,
}

impl RasterLayout {
    /// Creates a layout. No format checks are applied here.
    pub const fn new(width: u32, height: u32, bits_per_pixel: u16) -> Self {
        Self { width, height, bits_per_pixel }
    }

    /// 24-bit layout of the given size.
    pub const fn rgb24(width: u32, height: u32) -> Self {
        Self::new(width, height, SUPPORTED_BITS_PER_PIXEL)
    }

    /// Bytes per pixel (channels).
    pub const fn bytes_per_pixel(&self) -> usize {
        (self.bits_per_pixel / 8) as usize
    }

    /// Row size in bytes, padded to a multiple of 4.
    pub const fn row_stride(&self) -> usize {
        ((self.width as usize * self.bytes_per_pixel()) + 3) & !3
    }

    /// Bytes of pixel data including row padding.
    pub const fn payload_len(&self) -> usize {
        self.row_stride() * self.height as usize
    }

    /// Number of channel bytes excluding padding (`width * height * 3` for 24-bit).
    pub const fn sample_count(&self) -> usize {
        self.width as usize * self.height as usize * self.bytes_per_pixel()
    }

    /// Byte offset of pixel `(x, y)`.
    #[inline(always)]
    pub const fn pixel_offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.row_stride() + x as usize * self.bytes_per_pixel()
    }

    /// Offsets of the four pixels feeding output pixel `(x, y)` of a 2x downscale.
    ///
    /// Order: (2x, 2y), (2x+1, 2y), (2x, 2y+1), (2x+1, 2y+1).
    #[inline(always)]
    pub const fn block_offsets(&self, x: u32, y: u32) -> [usize; 4] {
        let (in_x, in_y) = (x * 2, y * 2);
        [
            self.pixel_offset(in_x, in_y),
            self.pixel_offset(in_x + 1, in_y),
            self.pixel_offset(in_x, in_y + 1),
            self.pixel_offset(in_x + 1, in_y + 1),
        ]
    }

    /// Layout of the 2x downscaled raster. Row padding is recomputed by `row_stride`.
    pub const fn halved(&self) -> Self {
        Self::new(self.width / 2, self.height / 2, self.bits_per_pixel)
    }

    /// Checks the preconditions of a 2x block downscale.
    pub fn require_downscalable(&self) -> Result<(), ImagingError> {
        if self.bits_per_pixel != SUPPORTED_BITS_PER_PIXEL {
            return Err(ImagingError::UnsupportedBitDepth(self.bits_per_pixel));
        }
        if self.width % 2 != 0 || self.height % 2 != 0 {
            return Err(ImagingError::OddDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Checks that `payload` holds at least `payload_len()` bytes.
    pub fn require_payload(&self, payload: &[u8]) -> Result<(), ImagingError> {
        let expected = self.payload_len();
        if payload.len() < expected {
            return Err(ImagingError::PayloadTooSmall {
                expected,
                actual: payload.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_stride_padding() {
        // 1 px * 3 = 3 -> 4, 2 px = 6 -> 8, 4 px = 12 -> 12, 5 px = 15 -> 16
        assert_eq!(RasterLayout::rgb24(1, 1).row_stride(), 4);
        assert_eq!(RasterLayout::rgb24(2, 1).row_stride(), 8);
        assert_eq!(RasterLayout::rgb24(4, 1).row_stride(), 12);
        assert_eq!(RasterLayout::rgb24(5, 1).row_stride(), 16);
        assert_eq!(RasterLayout::rgb24(2, 3).payload_len(), 24);
        assert_eq!(RasterLayout::rgb24(2, 3).sample_count(), 18);
    }

    #[test]
    fn test_block_offsets() {
        let layout = RasterLayout::rgb24(4, 4); // stride 12
        assert_eq!(layout.block_offsets(0, 0), [0, 3, 12, 15]);
        assert_eq!(layout.block_offsets(1, 1), [30, 33, 42, 45]);
    }

    #[test]
    fn test_halved() {
        let layout = RasterLayout::rgb24(6, 4).halved();
        assert_eq!((layout.width, layout.height), (3, 2));
        // 3 px * 3 = 9 -> 12
        assert_eq!(layout.row_stride(), 12);
    }

    #[test]
    fn test_downscale_preconditions() {
        assert_eq!(RasterLayout::rgb24(4, 2).require_downscalable(), Ok(()));
        assert_eq!(
            RasterLayout::rgb24(3, 2).require_downscalable(),
            Err(ImagingError::OddDimensions { width: 3, height: 2 })
        );
        assert_eq!(
            RasterLayout::new(4, 4, 32).require_downscalable(),
            Err(ImagingError::UnsupportedBitDepth(32))
        );
    }

    #[test]
    fn test_require_payload() {
        let layout = RasterLayout::rgb24(2, 2); // 16 bytes
        assert!(layout.require_payload(&[0u8; 16]).is_ok());
        assert_eq!(
            layout.require_payload(&[0u8; 15]),
            Err(ImagingError::PayloadTooSmall { expected: 16, actual: 15 })
        );
    }
}
