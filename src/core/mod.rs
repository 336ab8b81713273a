//! Core arithmetic.
//!
//! Finite field over the prime 257, the foundation of the share and image layers.

pub mod gf257;

pub use gf257::{FieldError, Gf257, INV_4, PRIME};
