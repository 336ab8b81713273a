//! GF(257) arithmetic module.
//!
//! This module implements arithmetic in the prime field of integers modulo 257. 257 is the
//! smallest prime above 256, so every byte value 0..=255 has its own field representative and
//! exactly one element (256) has none. That spare element is the source of the storage gap
//! handled by [`Gf257::to_byte_truncated`] and [`Gf257::to_byte_clamped`].
//!
//! # Design Choices
//! - **Fixed Width**: Elements are `u16`; products are widened to `u32` before reduction, so no
//!   intermediate can overflow.
//! - **No Big Integers**: The inverse is `n^(P-2)` by square-and-multiply over `u32`.
//! - **Fallible Inverse**: Zero has no inverse; `inv` returns `Err(FieldError::NoInverse)`
//!   instead of a conventional zero.
//!
//! # Usage
//! ```
//! use shamir_raster::core::gf257::Gf257;
//! let a = Gf257::new(200);
//! let b = Gf257::new(100);
//! assert_eq!((a + b).value(), 43);     // 300 mod 257
//! assert_eq!((b - a).value(), 157);    // -100 mod 257
//! assert_eq!((a * a.inv().unwrap()).value(), 1);
//! ```

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};
use zeroize::DefaultIsZeroes;

/// Field modulus.
pub const PRIME: u16 = 257;

/// Multiplicative inverse of 4 (4 * 193 = 772 = 3 * 257 + 1).
pub const INV_4: Gf257 = Gf257(193);

/// Largest value that survives a round trip through a byte.
const BYTE_MAX: u16 = 255;

/// Errors from field arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Zero has no multiplicative inverse.
    NoInverse,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::NoInverse => write!(f, "zero has no inverse in GF({})", PRIME),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FieldError {}

/// An element of GF(257), always kept in `0..257`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Gf257(u16);

impl Gf257 {
    /// Additive identity.
    pub const ZERO: Self = Gf257(0);
    /// Multiplicative identity.
    pub const ONE: Self = Gf257(1);

    /// Reduces `value` into the field.
    #[inline(always)]
    pub const fn new(value: u16) -> Self {
        Gf257(value % PRIME)
    }

    /// Canonical representative in `0..257`.
    #[inline(always)]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Computes `self^exp` by square-and-multiply.
    pub fn pow(self, mut exp: u32) -> Self {
        let mut result = Gf257::ONE;
        let mut base = self;
        while exp > 0 {
            if exp & 1 == 1 {
                result *= base;
            }
            base *= base;
            exp >>= 1;
        }
        result
    }

    /// Computes the multiplicative inverse `m` such that `self * m = 1`.
    ///
    /// Uses Fermat's little theorem: `n^(P-2) = n^-1` for `n != 0`.
    ///
    /// # Failure Modes
    /// - `self == 0`: returns `Err(FieldError::NoInverse)`.
    pub fn inv(self) -> Result<Self, FieldError> {
        if self.0 == 0 {
            return Err(FieldError::NoInverse);
        }
        Ok(self.pow(u32::from(PRIME) - 2))
    }

    /// Computes `self / rhs`, failing when `rhs` is zero.
    pub fn div(self, rhs: Self) -> Result<Self, FieldError> {
        Ok(self * rhs.inv()?)
    }

    /// Converts to a storage byte by keeping the low 8 bits.
    ///
    /// 256 becomes 0. Share generation and field-domain downscaling store values this way;
    /// the loss is part of the output format and must not be rounded or reported as an error.
    #[inline(always)]
    pub const fn to_byte_truncated(self) -> u8 {
        self.0 as u8
    }

    /// Converts to a byte, saturating values above 255.
    ///
    /// Returns the byte and whether saturation happened. Only 256 can saturate.
    #[inline(always)]
    pub const fn to_byte_clamped(self) -> (u8, bool) {
        if self.0 > BYTE_MAX {
            (BYTE_MAX as u8, true)
        } else {
            (self.0 as u8, false)
        }
    }
}

// Coefficient buffers hold secret-dependent elements and are wiped with `Zeroizing`.
impl DefaultIsZeroes for Gf257 {}

impl From<u8> for Gf257 {
    /// Every byte is already a canonical field element.
    #[inline(always)]
    fn from(value: u8) -> Self {
        Gf257(u16::from(value))
    }
}

impl From<Gf257> for u16 {
    #[inline(always)]
    fn from(gf: Gf257) -> u16 {
        gf.0
    }
}

impl fmt::Display for Gf257 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Gf257 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        // Both operands < 257, so the sum fits in u16 and needs at most one subtraction.
        let sum = self.0 + rhs.0;
        Gf257(if sum >= PRIME { sum - PRIME } else { sum })
    }
}

impl AddAssign for Gf257 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Gf257 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Gf257((self.0 + PRIME - rhs.0) % PRIME)
    }
}

impl SubAssign for Gf257 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for Gf257 {
    type Output = Self;

    /// Multiplies with a `u32` intermediate (256 * 256 does not fit in `u16`).
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        let product = u32::from(self.0) * u32::from(rhs.0);
        Gf257((product % u32::from(PRIME)) as u16)
    }
}

impl MulAssign for Gf257 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all() -> impl Iterator<Item = Gf257> {
        (0..PRIME).map(Gf257::new)
    }

    #[test]
    fn test_add_sub() {
        assert_eq!(Gf257::new(200) + Gf257::new(100), Gf257::new(43));
        assert_eq!(Gf257::new(256) + Gf257::new(1), Gf257::ZERO);
        assert_eq!(Gf257::new(0) - Gf257::new(1), Gf257::new(256));
        assert_eq!(Gf257::new(10) - Gf257::new(3), Gf257::new(7));
    }

    #[test]
    fn test_new_reduces() {
        assert_eq!(Gf257::new(257).value(), 0);
        assert_eq!(Gf257::new(514 + 5).value(), 5);
        assert_eq!(Gf257::new(u16::MAX).value(), u16::MAX % PRIME);
    }

    #[test]
    fn test_mul_widened() {
        // 256 * 256 = 65536 = 255 * 257 + 1
        assert_eq!(Gf257::new(256) * Gf257::new(256), Gf257::ONE);
        assert_eq!(Gf257::new(16) * Gf257::new(16), Gf257::new(256));
        assert_eq!(Gf257::new(0) * Gf257::new(200), Gf257::ZERO);
    }

    #[test]
    fn test_inv_exhaustive() {
        for n in 1..PRIME {
            let a = Gf257::new(n);
            let inv = a.inv().unwrap();
            assert_eq!(a * inv, Gf257::ONE, "inv({}) = {} is wrong", n, inv);
        }
    }

    #[test]
    fn test_inv_zero_fails() {
        assert_eq!(Gf257::ZERO.inv(), Err(FieldError::NoInverse));
        assert_eq!(Gf257::ONE.div(Gf257::ZERO), Err(FieldError::NoInverse));
    }

    #[test]
    fn test_inv_4_constant() {
        assert_eq!(Gf257::new(4).inv(), Ok(INV_4));
        assert_eq!(Gf257::new(4) * INV_4, Gf257::ONE);
    }

    #[test]
    fn test_commutative() {
        for a in all() {
            for b in all() {
                assert_eq!(a + b, b + a);
                assert_eq!(a * b, b * a);
            }
        }
    }

    #[test]
    fn test_associative() {
        // Full cube is 17M triples; a stride keeps the test fast while touching 0 and 256.
        for a in all().step_by(7) {
            for b in all().step_by(11) {
                for c in all().step_by(3) {
                    assert_eq!((a + b) + c, a + (b + c));
                    assert_eq!((a * b) * c, a * (b * c));
                }
            }
        }
        let top = Gf257::new(256);
        assert_eq!((top + top) + top, top + (top + top));
        assert_eq!((top * top) * top, top * (top * top));
    }

    #[test]
    fn test_sub_inverts_add() {
        for a in all() {
            for b in all().step_by(5) {
                assert_eq!((a + b) - b, a);
            }
        }
    }

    #[test]
    fn test_pow() {
        assert_eq!(Gf257::new(3).pow(0), Gf257::ONE);
        assert_eq!(Gf257::new(3).pow(5), Gf257::new(243));
        // 3 is a generator of GF(257)*, order 256.
        assert_eq!(Gf257::new(3).pow(256), Gf257::ONE);
        assert_ne!(Gf257::new(3).pow(128), Gf257::ONE);
    }

    #[test]
    fn test_byte_conversions() {
        assert_eq!(Gf257::from(255u8).value(), 255);
        assert_eq!(Gf257::new(256).to_byte_truncated(), 0);
        assert_eq!(Gf257::new(255).to_byte_truncated(), 255);
        assert_eq!(Gf257::new(256).to_byte_clamped(), (255, true));
        assert_eq!(Gf257::new(17).to_byte_clamped(), (17, false));
    }
}
