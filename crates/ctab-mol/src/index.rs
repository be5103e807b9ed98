//! Type-safe index newtypes
//!
//! Wrappers around raw indices so an atom index cannot silently stand in for a
//! bond index.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker value for an unset index.
pub const INVALID_INDEX: u32 = u32::MAX;

macro_rules! define_index {
    (
        $(#[$meta:meta])*
        $name:ident, $debug_name:literal
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
        #[repr(transparent)]
        pub struct $name(pub u32);

        impl $name {
            /// Create a new index
            #[inline]
            pub const fn new(index: u32) -> Self {
                $name(index)
            }

            /// Get the raw index value as usize
            #[inline]
            pub const fn as_usize(&self) -> usize {
                self.0 as usize
            }

            /// Check if this is a valid index
            #[inline]
            pub const fn is_valid(&self) -> bool {
                self.0 != INVALID_INDEX
            }

            /// Create an invalid index
            #[inline]
            pub const fn invalid() -> Self {
                $name(INVALID_INDEX)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, "{}({})", $debug_name, self.0)
                } else {
                    write!(f, "{}(INVALID)", $debug_name)
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, "{}", self.0)
                } else {
                    write!(f, "INVALID")
                }
            }
        }

        impl From<u32> for $name {
            #[inline]
            fn from(index: u32) -> Self {
                $name(index)
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(index: usize) -> Self {
                $name(index as u32)
            }
        }

        impl From<$name> for usize {
            #[inline]
            fn from(index: $name) -> Self {
                index.0 as usize
            }
        }
    };
}

define_index!(
    /// Index into a molecule's atom array.
    AtomIndex, "AtomIndex"
);

define_index!(
    /// Index into a molecule's bond array.
    BondIndex, "BondIndex"
);
