//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a part.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartId(u32);

/// Identifier of a product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

macro_rules! impl_numeric_id {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap a raw identifier.
            ///
            /// Production code obtains ids from an [`IdSequence`]; this is for
            /// tests and for rebuilding records.
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            pub const fn get(&self) -> u32 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$t> for u32 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s
                    .trim()
                    .parse::<u32>()
                    .map_err(|e| DomainError::invariant(format!("{}: {}", $name, e)))?;
                Ok(Self(raw))
            }
        }
    };
}

impl_numeric_id!(PartId, "PartId");
impl_numeric_id!(ProductId, "ProductId");

/// Monotonic id counter.
///
/// Pre-increments: the first id handed out is `1`. Ids are never reused, even
/// when the record they were reserved for is never committed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdSequence {
    last: u32,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the counter and return the new value.
    pub fn next_raw(&mut self) -> u32 {
        self.last += 1;
        self.last
    }

    /// The most recently issued value (`0` before the first call).
    pub fn last(&self) -> u32 {
        self.last
    }

    pub fn next_part_id(&mut self) -> PartId {
        PartId(self.next_raw())
    }

    pub fn next_product_id(&mut self) -> ProductId {
        ProductId(self.next_raw())
    }
}
