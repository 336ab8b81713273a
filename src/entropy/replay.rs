//! Scripted entropy source.
//!
//! Replays a fixed byte buffer. Used to pin polynomial coefficients in tests and to reproduce
//! a share set exactly from a recorded transcript. Never use it for real shares.

extern crate alloc;
use alloc::collections::VecDeque;
use alloc::vec::Vec;
use super::{EntropyError, EntropySource};

/// Source that hands out pre-loaded bytes in order.
#[derive(Debug, Default, Clone)]
pub struct ReplaySource {
    buffer: VecDeque<u8>,
}

impl ReplaySource {
    /// Creates a new empty ReplaySource.
    pub fn new() -> Self {
        Self { buffer: VecDeque::new() }
    }

    /// Creates a source that yields exactly `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut source = Self::new();
        source.add_bytes(bytes);
        source
    }

    /// Creates a source whose draws decode to `coefficients`, one per draw.
    ///
    /// Coefficient draws read two big-endian bytes each (see
    /// [`crate::mpc::quorum::draw_coefficient`]), so a value `c < 257` is written as `c.to_be_bytes()`.
    pub fn from_coefficients(coefficients: &[u16]) -> Self {
        let bytes: Vec<u8> = coefficients.iter().flat_map(|c| c.to_be_bytes()).collect();
        Self::from_bytes(&bytes)
    }

    /// Append bytes to the script.
    pub fn add_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend(bytes.iter().copied());
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buffer.len()
    }
}

impl EntropySource for ReplaySource {
    fn name(&self) -> &'static str {
        "Replay"
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let wanted = dest.len();
        if self.buffer.len() < wanted {
            return Err(EntropyError::Exhausted);
        }
        for (d, s) in dest.iter_mut().zip(self.buffer.drain(..wanted)) {
            *d = s;
        }
        Ok(())
    }
}
