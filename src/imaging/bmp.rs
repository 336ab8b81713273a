//! Fixed-size bitmap header codec.
//!
//! Only the 54-byte `BITMAPFILEHEADER` + `BITMAPINFOHEADER` layout is understood. Share files
//! carry the input header verbatim, so the header is kept as an opaque record and only the
//! fields the raster layer needs are decoded from it.
//!
//! | offset | size | field |
//! |---|---|---|
//! | 0 | 2 | signature `BM` |
//! | 2 | 4 | file size |
//! | 10 | 4 | pixel data offset |
//! | 14 | 4 | DIB header size (40) |
//! | 18 | 4 | width |
//! | 22 | 4 | height |
//! | 26 | 2 | planes (1) |
//! | 28 | 2 | bits per pixel |
//! | 30 | 4 | compression (0) |
//! | 34 | 4 | pixel data size |
//! | 38 / 42 | 4 | resolution, pixels per metre |

extern crate alloc;
use alloc::vec::Vec;
use super::{ImagingError, RasterLayout};

/// Size of the header record in bytes.
pub const HEADER_SIZE: usize = 54;

const DIB_HEADER_SIZE: u32 = 40;
/// About 72 DPI.
const PIXELS_PER_METRE: u32 = 2835;

const OFFSET_WIDTH: usize = 18;
const OFFSET_HEIGHT: usize = 22;
const OFFSET_BPP: usize = 28;

/// A 54-byte bitmap header.
#[derive(Clone, PartialEq, Eq)]
pub struct BmpHeader {
    raw: [u8; HEADER_SIZE],
}

impl core::fmt::Debug for BmpHeader {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BmpHeader")
            .field("width", &self.width_raw())
            .field("height", &self.height_raw())
            .field("bits_per_pixel", &self.bits_per_pixel())
            .finish()
    }
}

impl BmpHeader {
    /// Wraps the first `HEADER_SIZE` bytes of `bytes`.
    pub fn parse(bytes: &[u8]) -> Result<Self, ImagingError> {
        if bytes.len() < HEADER_SIZE {
            return Err(ImagingError::PayloadTooSmall {
                expected: HEADER_SIZE,
                actual: bytes.len(),
            });
        }
        let mut raw = [0u8; HEADER_SIZE];
        raw.copy_from_slice(&bytes[..HEADER_SIZE]);
        Ok(Self { raw })
    }

    /// Builds a fresh 24-bit header for a `width` x `height` raster.
    pub fn for_dimensions(width: u32, height: u32) -> Self {
        let layout = RasterLayout::rgb24(width, height);
        let data_size = layout.payload_len() as u32;
        let mut raw = [0u8; HEADER_SIZE];

        // File header
        raw[0] = b'B';
        raw[1] = b'M';
        write_u32(&mut raw, 2, HEADER_SIZE as u32 + data_size);
        write_u32(&mut raw, 10, HEADER_SIZE as u32);

        // DIB header
        write_u32(&mut raw, 14, DIB_HEADER_SIZE);
        write_u32(&mut raw, OFFSET_WIDTH, width);
        write_u32(&mut raw, OFFSET_HEIGHT, height);
        write_u16(&mut raw, 26, 1);
        write_u16(&mut raw, OFFSET_BPP, layout.bits_per_pixel);
        write_u32(&mut raw, 30, 0);
        write_u32(&mut raw, 34, data_size);
        write_u32(&mut raw, 38, PIXELS_PER_METRE);
        write_u32(&mut raw, 42, PIXELS_PER_METRE);
        // Palette size (46) and important colours (50) stay 0.

        Self { raw }
    }

    fn width_raw(&self) -> i32 {
        i32::from_le_bytes(field4(&self.raw, OFFSET_WIDTH))
    }

    fn height_raw(&self) -> i32 {
        i32::from_le_bytes(field4(&self.raw, OFFSET_HEIGHT))
    }

    /// Declared bits per pixel.
    pub fn bits_per_pixel(&self) -> u16 {
        u16::from_le_bytes([self.raw[OFFSET_BPP], self.raw[OFFSET_BPP + 1]])
    }

    /// Decoded layout. Zero or negative (top-down) dimensions are rejected.
    pub fn layout(&self) -> Result<RasterLayout, ImagingError> {
        let (width, height) = (self.width_raw(), self.height_raw());
        if width <= 0 || height <= 0 {
            return Err(ImagingError::InvalidHeader);
        }
        Ok(RasterLayout::new(width as u32, height as u32, self.bits_per_pixel()))
    }

    /// The raw record.
    pub fn as_bytes(&self) -> &[u8; HEADER_SIZE] {
        &self.raw
    }
}

fn field4(raw: &[u8; HEADER_SIZE], offset: usize) -> [u8; 4] {
    [raw[offset], raw[offset + 1], raw[offset + 2], raw[offset + 3]]
}

fn write_u32(raw: &mut [u8; HEADER_SIZE], offset: usize, value: u32) {
    raw[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

fn write_u16(raw: &mut [u8; HEADER_SIZE], offset: usize, value: u16) {
    raw[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

/// A header plus its pixel payload, i.e. the full contents of an image or share file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Header record.
    pub header: BmpHeader,
    /// Everything after the header.
    pub payload: Vec<u8>,
}

impl Raster {
    /// Pairs `payload` with a fresh header for `layout`.
    pub fn with_layout(layout: &RasterLayout, payload: Vec<u8>) -> Self {
        Self {
            header: BmpHeader::for_dimensions(layout.width, layout.height),
            payload,
        }
    }

    /// Splits a file image into header and payload.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ImagingError> {
        let header = BmpHeader::parse(bytes)?;
        Ok(Self {
            header,
            payload: bytes[HEADER_SIZE..].to_vec(),
        })
    }

    /// Concatenates header and payload.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_SIZE + self.payload.len());
        out.extend_from_slice(self.header.as_bytes());
        out.extend_from_slice(&self.payload);
        out
    }

    /// Layout declared by the header.
    pub fn layout(&self) -> Result<RasterLayout, ImagingError> {
        self.header.layout()
    }
}
