//! Shared index types for array-backed linked structures.

use core::hash::Hash;
use std::fmt::Debug;

/// Integer types used as **compact linked-list node indices**.
///
/// Instead of pointer-based links, the linked structures in this crate store indices
/// into parallel arrays. A narrow index type keeps the link arrays small; `u32`
/// is the default and `usize` lifts the node limit entirely.
pub trait IndexType: Copy + Eq + Hash + Debug + 'static {
    /// Sentinel value indicating "no node" (analogous to a null pointer).
    /// Used for representing the end of a linked list.
    const NONE: Self;

    /// Converts this index to a `usize` for array access.
    fn as_usize(self) -> usize;

    /// Converts a `usize` slot index to this compact type.
    ///
    /// # Panics
    /// Panics if `i` does not fit below the `NONE` sentinel (e.g., >= 255 for `u8`).
    fn from_usize(i: usize) -> Self;

    /// Returns true if this is the `NONE` sentinel.
    #[inline(always)]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Number of addressable slots (every value below `NONE`).
    #[inline(always)]
    fn max_slots() -> usize {
        Self::NONE.as_usize()
    }
}

macro_rules! impl_index_type {
    ($($ty:ty),*) => {
        $(
            impl IndexType for $ty {
                const NONE: Self = <$ty>::MAX;
                #[inline(always)]
                fn as_usize(self) -> usize {
                    self as usize
                }
                #[inline(always)]
                fn from_usize(i: usize) -> Self {
                    assert!(
                        i < <$ty>::MAX as usize,
                        "index {} does not fit in {}",
                        i,
                        stringify!($ty)
                    );
                    i as $ty
                }
            }
        )*
    };
}

impl_index_type!(u8, u16, u32, usize);
