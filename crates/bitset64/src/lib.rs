//! Immutable 64-bit bit-set.
//!
//! [`BitSet64`] stores 64 flags in a single `u64`. Start from
//! [`BitSet64::EMPTY`] and derive new values with [`BitSet64::set`],
//! [`BitSet64::clear`] and [`BitSet64::toggle`]; the original value is never
//! modified.
//!
//! ```
//! use bitset64::{BitSet64, or};
//!
//! let left = BitSet64::EMPTY.set(3).set(5);
//! let right = BitSet64::EMPTY.set(22);
//! assert_eq!(or(left, right).to_string(), "[3,5,22]");
//! ```

pub mod bitset;
pub mod error;

pub use bitset::{BitSet64, BitSet64Iter, and, or, xor};
pub use error::IndexOutOfRange;
