//! Polynomial operations for MPC.
//!
//! Shared by share generation and its tests.

use crate::core::gf257::Gf257;

/// Evaluates a polynomial at a given point x using Horner's method.
///
/// f(x) = c[0] + c[1]*x + ... + c[k-1]*x^(k-1)
///
/// An empty coefficient list is the zero polynomial.
#[inline(always)]
pub(crate) fn evaluate_polynomial(coeffs: &[Gf257], x: Gf257) -> Gf257 {
    coeffs
        .iter()
        .rev()
        .fold(Gf257::ZERO, |acc, &c| acc * x + c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polynomial_eval() {
        // f(x) = 1 + 2x
        let coeffs = [Gf257::new(1), Gf257::new(2)];
        assert_eq!(evaluate_polynomial(&coeffs, Gf257::new(1)), Gf257::new(3));
        assert_eq!(evaluate_polynomial(&coeffs, Gf257::new(2)), Gf257::new(5));
        assert_eq!(evaluate_polynomial(&coeffs, Gf257::new(3)), Gf257::new(7));
        assert_eq!(evaluate_polynomial(&coeffs, Gf257::ZERO), Gf257::new(1));
    }

    #[test]
    fn test_polynomial_eval_wraps() {
        // f(x) = 0 + 128x: f(2) = 256, f(3) = 384 - 257 = 127
        let coeffs = [Gf257::ZERO, Gf257::new(128)];
        assert_eq!(evaluate_polynomial(&coeffs, Gf257::new(2)), Gf257::new(256));
        assert_eq!(evaluate_polynomial(&coeffs, Gf257::new(3)), Gf257::new(127));
        assert_eq!(evaluate_polynomial(&[], Gf257::new(9)), Gf257::ZERO);
    }
}
