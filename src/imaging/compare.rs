//! Sum of absolute errors between rasters.

use super::{ImagingError, Raster};

/// Result of comparing two rasters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaeReport {
    /// Sum of `|a_i - b_i|` over the compared bytes.
    pub sae: u64,
    /// Number of payload bytes compared.
    pub compared: usize,
    /// The payloads had different lengths and only the common prefix was compared.
    pub truncated: bool,
    /// Shared logical width.
    pub width: u32,
    /// Shared logical height.
    pub height: u32,
}

impl SaeReport {
    /// Mean absolute error per channel byte, padding excluded (`sae / (w * h * 3)`).
    pub fn mean_per_byte(&self) -> f64 {
        let samples = u64::from(self.width) * u64::from(self.height) * 3;
        if samples == 0 {
            return 0.0;
        }
        self.sae as f64 / samples as f64
    }
}

/// Byte-wise L1 distance over the common prefix of `a` and `b`.
pub fn sum_absolute_error(a: &[u8], b: &[u8]) -> u64 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| u64::from(x.abs_diff(y)))
        .sum()
}

/// Compares two rasters of equal logical size.
///
/// Differing payload lengths are tolerated: the overlap is compared, a warning is logged and
/// `truncated` is set.
pub fn compare_rasters(a: &Raster, b: &Raster) -> Result<SaeReport, ImagingError> {
    let (la, lb) = (a.layout()?, b.layout()?);
    if (la.width, la.height) != (lb.width, lb.height) {
        return Err(ImagingError::DimensionMismatch {
            left: (la.width, la.height),
            right: (lb.width, lb.height),
        });
    }

    let truncated = a.payload.len() != b.payload.len();
    if truncated {
        log::warn!(
            "Payload sizes differ ({} vs {} bytes); comparing the first {}",
            a.payload.len(),
            b.payload.len(),
            a.payload.len().min(b.payload.len())
        );
    }

    Ok(SaeReport {
        sae: sum_absolute_error(&a.payload, &b.payload),
        compared: a.payload.len().min(b.payload.len()),
        truncated,
        width: la.width,
        height: la.height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::RasterLayout;

    #[test]
    fn test_sae_basic() {
        assert_eq!(sum_absolute_error(&[10, 20, 30], &[15, 18, 33]), 10);
        assert_eq!(sum_absolute_error(&[0, 255], &[255, 0]), 510);
        assert_eq!(sum_absolute_error(&[], &[]), 0);
    }

    #[test]
    fn test_compare_equal_rasters() {
        let layout = RasterLayout::rgb24(2, 2);
        let a = Raster::with_layout(&layout, vec![9u8; 16]);
        let report = compare_rasters(&a, &a.clone()).unwrap();
        assert_eq!(report.sae, 0);
        assert_eq!(report.compared, 16);
        assert!(!report.truncated);
        assert_eq!(report.mean_per_byte(), 0.0);
    }

    #[test]
    fn test_compare_dimension_mismatch() {
        let a = Raster::with_layout(&RasterLayout::rgb24(2, 2), vec![0u8; 16]);
        let b = Raster::with_layout(&RasterLayout::rgb24(4, 2), vec![0u8; 24]);
        assert_eq!(
            compare_rasters(&a, &b),
            Err(ImagingError::DimensionMismatch { left: (2, 2), right: (4, 2) })
        );
    }

    #[test]
    fn test_compare_length_mismatch_is_not_fatal() {
        let layout = RasterLayout::rgb24(2, 2);
        let a = Raster::with_layout(&layout, vec![10u8; 16]);
        let b = Raster::with_layout(&layout, vec![12u8; 14]);
        let report = compare_rasters(&a, &b).unwrap();
        assert!(report.truncated);
        assert_eq!(report.compared, 14);
        assert_eq!(report.sae, 28);
        // 28 / (2 * 2 * 3)
        assert!((report.mean_per_byte() - 28.0 / 12.0).abs() < 1e-12);
    }
}
