//! Strongly typed, zero-cost identifier wrappers.
//!
//! Lifts and calls are never referenced by address.  Bindings between them
//! store one of these IDs and are resolved through the owning collections at
//! time of use, so a mutation elsewhere can never leave a dangling binding.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Identity of a hall call.  Issued sequentially by the owning system and
    /// never reused, even after the call is fulfilled and purged.
    pub struct CallId(u32);
}

typed_id! {
    /// Position of a lift in the roster.  The roster only grows during setup,
    /// so an index stays valid for the lifetime of the simulation.
    pub struct LiftIndex(u32);
}

impl CallId {
    /// The ID issued after `self`.
    #[inline]
    pub fn next(self) -> CallId {
        CallId(self.0 + 1)
    }
}
