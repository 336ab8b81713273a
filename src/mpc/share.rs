//! Share container and its byte encoding.
//!
//! One share holds, for every secret byte, the value of that byte's polynomial at a single
//! x-coordinate. Field values span 0..=256 while a stored share byte spans 0..=255, so
//! [`encode_field`] keeps the low 8 bits and the field value 256 is stored as 0. Reading a
//! byte back with [`Share::field_at`] cannot tell the two apart.
//!
//! # Security
//! - Share bytes are wiped on drop (`ZeroizeOnDrop`).
//! - `Debug` prints the x-coordinate and length only.

extern crate alloc;
use alloc::vec::Vec;
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};
use crate::core::gf257::Gf257;
use super::MpcError;

/// Encodes a field value as a share byte.
///
/// Returns the stored byte and `true` when the value was 256 and collapsed to 0.
pub fn encode_field(y: Gf257) -> (u8, bool) {
    (y.to_byte_truncated(), y.value() > u16::from(u8::MAX))
}

/// The bytes of one share and the x-coordinate they were evaluated at.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Share {
    /// x-coordinate, `1..=n`. Not secret.
    #[zeroize(skip)]
    pub identifier: u8,

    /// One stored byte per secret byte.
    pub value: Vec<u8>,
}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("identifier", &self.identifier)
            .field("length", &self.value.len())
            .field("value", &"<redacted>")
            .finish()
    }
}

impl Share {
    /// Wraps stored bytes taken at x-coordinate `identifier`.
    ///
    /// # Returns
    /// * `Err(MpcError::InvalidShareIndex)` for `identifier == 0` (x = 0 is the secret).
    /// * `Err(MpcError::EmptyShare)` for an empty `value`.
    pub fn new(identifier: u8, value: Vec<u8>) -> Result<Self, MpcError> {
        if identifier == 0 {
            return Err(MpcError::InvalidShareIndex);
        }
        if value.is_empty() {
            return Err(MpcError::EmptyShare);
        }
        Ok(Self { identifier, value })
    }

    /// The x-coordinate as a field element.
    pub fn x(&self) -> Gf257 {
        Gf257::from(self.identifier)
    }

    /// Stored bytes.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Stored byte at `position` lifted into the field.
    ///
    /// # Panics
    /// If `position >= self.len()`.
    pub fn field_at(&self, position: usize) -> Gf257 {
        Gf257::from(self.value[position])
    }

    /// Number of stored bytes, one per secret byte.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Always false for a share built through [`Share::new`].
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}
