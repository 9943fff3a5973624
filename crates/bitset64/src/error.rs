//! Errors returned by the checked index operations.

use thiserror::Error;

use crate::bitset::BitSet64;

/// A bit index outside `0..=63` was passed to one of the `try_*` methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index out-of-range (0 - {high}): {index}", high = BitSet64::HIGH_BIT)]
pub struct IndexOutOfRange {
    /// The rejected index.
    pub index: usize,
}

impl IndexOutOfRange {
    /// Validates `index`, returning it unchanged if it addresses a bit.
    #[inline(always)]
    pub(crate) fn check(index: usize) -> Result<usize, Self> {
        if index <= BitSet64::HIGH_BIT {
            Ok(index)
        } else {
            Err(IndexOutOfRange { index })
        }
    }
}
