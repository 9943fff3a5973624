//! Bit-set operations and types.
//!
//! This module provides a [`BitSet64`] type that stores 64 independent flags
//! in a single `u64`, where bit `i` holds flag `i` (bit 0 is the least
//! significant bit).
//!
//! Index-taking methods treat an index above 63 as a caller bug and panic.
//! The `try_*` variants report the same condition as [`IndexOutOfRange`].

use std::fmt;
use std::iter::FusedIterator;

use crate::error::IndexOutOfRange;

/// Newtype wrapper for 64 flags packed into a `u64`.
///
/// The type is `Copy` and every update returns a new value, so a `BitSet64`
/// can be handed out freely without aliasing concerns.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct BitSet64(u64);

impl BitSet64 {
    /// Number of flags in a bit-set.
    pub const BITS: usize = 64;

    /// Highest valid bit index.
    pub const HIGH_BIT: usize = Self::BITS - 1;

    /// Bit-set with every flag cleared.
    pub const EMPTY: BitSet64 = BitSet64(0);

    /// Bit-set with every flag set.
    pub const FULL: BitSet64 = BitSet64(u64::MAX);

    /// Creates a bit-set from raw bits.
    ///
    /// # Arguments
    ///
    /// * `bits` - Raw 64-bit value where bit `i` holds flag `i`.
    #[inline(always)]
    pub const fn from_bits(bits: u64) -> Self {
        BitSet64(bits)
    }

    /// Returns the raw 64-bit value.
    #[inline(always)]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Returns a new bit-set with the bit at `index` set.
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than 63.
    #[inline(always)]
    #[track_caller]
    pub fn set(self, index: usize) -> Self {
        BitSet64(self.0 | mask(index))
    }

    /// Returns a new bit-set with the bit at `index` cleared.
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than 63.
    #[inline(always)]
    #[track_caller]
    pub fn clear(self, index: usize) -> Self {
        BitSet64(self.0 & !mask(index))
    }

    /// Returns a new bit-set with the bit at `index` inverted.
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than 63.
    #[inline(always)]
    #[track_caller]
    pub fn toggle(self, index: usize) -> Self {
        BitSet64(self.0 ^ mask(index))
    }

    /// Checks if the bit at `index` is set.
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than 63.
    #[inline(always)]
    #[track_caller]
    pub fn has(self, index: usize) -> bool {
        self.0 & mask(index) != 0
    }

    /// Like [`BitSet64::set`], but reports a bad index instead of panicking.
    #[inline]
    pub fn try_set(self, index: usize) -> Result<Self, IndexOutOfRange> {
        let index = IndexOutOfRange::check(index)?;
        Ok(BitSet64(self.0 | (1 << index)))
    }

    /// Like [`BitSet64::clear`], but reports a bad index instead of panicking.
    #[inline]
    pub fn try_clear(self, index: usize) -> Result<Self, IndexOutOfRange> {
        let index = IndexOutOfRange::check(index)?;
        Ok(BitSet64(self.0 & !(1 << index)))
    }

    /// Like [`BitSet64::toggle`], but reports a bad index instead of panicking.
    #[inline]
    pub fn try_toggle(self, index: usize) -> Result<Self, IndexOutOfRange> {
        let index = IndexOutOfRange::check(index)?;
        Ok(BitSet64(self.0 ^ (1 << index)))
    }

    /// Like [`BitSet64::has`], but reports a bad index instead of panicking.
    #[inline]
    pub fn try_has(self, index: usize) -> Result<bool, IndexOutOfRange> {
        let index = IndexOutOfRange::check(index)?;
        Ok(self.0 & (1 << index) != 0)
    }

    /// Checks if no bits are set.
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set bits (0-64).
    #[inline(always)]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns an iterator over the indices of the set bits, ascending.
    #[inline(always)]
    pub fn iter(self) -> BitSet64Iter {
        BitSet64Iter::new(self)
    }

    /// Renders the set bits with caller-supplied labels.
    ///
    /// Set bits are visited in ascending order and `label` is called with
    /// each index. Non-empty labels are joined with `separator` and wrapped
    /// in `prefix` and `suffix`. An empty label is skipped entirely, so it
    /// never produces a leading, trailing or doubled separator.
    ///
    /// ```
    /// use bitset64::BitSet64;
    ///
    /// let flags = BitSet64::EMPTY.set(0).set(1).set(2);
    /// let s = flags.to_string_with("<", ">", "|", |i| match i {
    ///     0 => "read",
    ///     2 => "exec",
    ///     _ => "",
    /// });
    /// assert_eq!(s, "<read|exec>");
    /// ```
    pub fn to_string_with<F, L>(
        self,
        prefix: &str,
        suffix: &str,
        separator: &str,
        mut label: F,
    ) -> String
    where
        F: FnMut(usize) -> L,
        L: AsRef<str>,
    {
        let mut out = String::from(prefix);
        let mut first = true;
        for index in self {
            let text = label(index);
            let text = text.as_ref();
            if text.is_empty() {
                continue;
            }
            if !first {
                out.push_str(separator);
            }
            out.push_str(text);
            first = false;
        }
        out.push_str(suffix);
        out
    }
}

/// Single-bit mask for `index`, panicking on an out-of-range index.
#[inline(always)]
#[track_caller]
fn mask(index: usize) -> u64 {
    match IndexOutOfRange::check(index) {
        Ok(index) => 1 << index,
        Err(err) => panic!("bitset64: {err}"),
    }
}

/// Bitwise AND of two bit-sets.
#[inline(always)]
pub const fn and(left: BitSet64, right: BitSet64) -> BitSet64 {
    BitSet64(left.0 & right.0)
}

/// Bitwise OR of two bit-sets.
#[inline(always)]
pub const fn or(left: BitSet64, right: BitSet64) -> BitSet64 {
    BitSet64(left.0 | right.0)
}

/// Bitwise XOR of two bit-sets.
#[inline(always)]
pub const fn xor(left: BitSet64, right: BitSet64) -> BitSet64 {
    BitSet64(left.0 ^ right.0)
}

// Operator trait implementations

impl std::ops::BitAnd for BitSet64 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        and(self, rhs)
    }
}

impl std::ops::BitOr for BitSet64 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        or(self, rhs)
    }
}

impl std::ops::BitXor for BitSet64 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        xor(self, rhs)
    }
}

impl std::ops::Not for BitSet64 {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        BitSet64(!self.0)
    }
}

impl std::ops::BitAndAssign for BitSet64 {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl std::ops::BitOrAssign for BitSet64 {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitXorAssign for BitSet64 {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

// Conversion trait implementations

impl From<u64> for BitSet64 {
    #[inline(always)]
    fn from(bits: u64) -> Self {
        BitSet64(bits)
    }
}

impl From<BitSet64> for u64 {
    #[inline(always)]
    fn from(set: BitSet64) -> Self {
        set.0
    }
}

impl FromIterator<usize> for BitSet64 {
    /// Collects indices into a bit-set.
    ///
    /// # Panics
    ///
    /// Panics if any index is greater than 63.
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        iter.into_iter().fold(BitSet64::EMPTY, BitSet64::set)
    }
}

// Iterator support

impl IntoIterator for BitSet64 {
    type Item = usize;
    type IntoIter = BitSet64Iter;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        BitSet64Iter::new(self)
    }
}

// Formatting

impl fmt::Display for BitSet64 {
    /// Writes the set indices as `[3,5,22]`, or `[]` when empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, index) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{index}")?;
        }
        f.write_str("]")
    }
}

impl fmt::Debug for BitSet64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitSet64({self})")
    }
}

/// An iterator that yields the index of each set bit, lowest first.
#[derive(Clone, Debug)]
pub struct BitSet64Iter {
    remaining: u64,
}

impl BitSet64Iter {
    /// Creates a new `BitSet64Iter`.
    #[inline(always)]
    pub fn new(set: BitSet64) -> BitSet64Iter {
        BitSet64Iter { remaining: set.0 }
    }
}

impl Iterator for BitSet64Iter {
    type Item = usize;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let index = self.remaining.trailing_zeros() as usize;
        self.remaining &= self.remaining.wrapping_sub(1);
        Some(index)
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitSet64Iter {}

impl FusedIterator for BitSet64Iter {}
