//! 1-based ordinals used in URLs and "Section N of M" displays.
//!
//! Ordinals are what readers see; indices are what slices want. `index()` is
//! the only place the conversion happens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use super::ValidationError;

macro_rules! ordinal {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "usize", into = "usize")]
        pub struct $name(NonZeroUsize);

        impl $name {
            /// The first ordinal.
            pub const FIRST: $name = $name(NonZeroUsize::MIN);

            /// Creates an ordinal, rejecting zero.
            pub fn new(value: usize) -> Result<Self, ValidationError> {
                NonZeroUsize::new(value)
                    .map(Self)
                    .ok_or_else(|| ValidationError::out_of_range($field, 1, i64::MAX, 0))
            }

            /// Creates the ordinal for a 0-based slice index.
            pub fn from_index(index: usize) -> Self {
                Self(NonZeroUsize::MIN.saturating_add(index))
            }

            /// The 1-based value.
            pub fn get(&self) -> usize {
                self.0.get()
            }

            /// The 0-based slice index.
            pub fn index(&self) -> usize {
                self.0.get() - 1
            }
        }

        impl TryFrom<usize> for $name {
            type Error = ValidationError;

            fn try_from(value: usize) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for usize {
            fn from(ordinal: $name) -> Self {
                ordinal.get()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value: usize = s
                    .trim()
                    .parse()
                    .map_err(|_| ValidationError::invalid_format($field, "expected a positive integer"))?;
                Self::new(value)
            }
        }
    };
}

ordinal!(
    /// Position of a composition inside its collection, starting at 1.
    CompositionOrdinal,
    "composition"
);

ordinal!(
    /// Position of a section inside its composition, starting at 1.
    SectionOrdinal,
    "section"
);
