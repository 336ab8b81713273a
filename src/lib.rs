#![cfg_attr(not(feature = "std"), no_std)]

//! Threshold secret sharing of raster images over GF(257).
//!
//! Pixel bytes are split into (2, n) Shamir shares. Because each share is a linear function of
//! the secret, a 2x2 block mean taken in the field on every share reconstructs to the field
//! mean of the secret pixels. The `pipeline` module runs that experiment on bitmap files.

extern crate alloc;

pub mod core;
pub mod entropy;
pub mod mpc;
pub mod imaging;
pub mod config;

#[cfg(feature = "std")]
pub mod storage;
#[cfg(feature = "std")]
pub mod pipeline;
