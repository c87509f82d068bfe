//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (`Price`, `StockLevels`)
/// - **Entity**: Has identity (`Part { id: PartId(..), .. }`)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Unit price of a part or product.
///
/// Stored as an exact decimal. Parsing accepts zero and negative amounts;
/// rejecting those is a validation concern, not a parsing one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl ValueObject for Price {}

impl Price {
    pub const ZERO: Price = Price(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Build a price from an amount in cents (`250` is `2.50`).
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Parse a raw form value.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        Decimal::from_str(raw.trim())
            .map(Self)
            .map_err(|_| DomainError::MalformedInput)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Full-precision text, suitable for pre-filling a form. `Display`
    /// rounds to cents and must not be parsed back.
    pub fn exact_text(&self) -> String {
        self.0.to_string()
    }

    pub fn checked_add(self, other: Price) -> Option<Price> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Sum of `prices`; `None` when the total leaves the decimal range.
    pub fn checked_total(prices: impl IntoIterator<Item = Price>) -> Option<Price> {
        prices
            .into_iter()
            .try_fold(Price::ZERO, |total, price| total.checked_add(price))
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Inventory level with its allowed bounds.
///
/// No ordering is enforced between the three numbers here; see
/// [`crate::validation::check_common`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StockLevels {
    pub stock: i64,
    pub min: i64,
    pub max: i64,
}

impl ValueObject for StockLevels {}

impl StockLevels {
    pub fn new(stock: i64, min: i64, max: i64) -> Self {
        Self { stock, min, max }
    }

    /// Parse the three raw form values.
    pub fn parse(stock: &str, min: &str, max: &str) -> DomainResult<Self> {
        Ok(Self {
            stock: parse_count(stock)?,
            min: parse_count(min)?,
            max: parse_count(max)?,
        })
    }

    pub fn within_bounds(&self) -> bool {
        self.min <= self.stock && self.stock <= self.max
    }
}

/// Parse an integer form field; blank or non-numeric input is malformed.
pub fn parse_count(raw: &str) -> DomainResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| DomainError::MalformedInput)
}
