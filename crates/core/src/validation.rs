//! Business rules shared by parts and products.
//!
//! Validation never short-circuits: every rule runs and every failure is
//! recorded, so a form can be corrected in one pass.

use serde::{Deserialize, Serialize};

use crate::value_object::{Price, StockLevels};

/// A single rule failure.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Violation {
    NameBlank,
    StockBelowOne,
    PriceNotPositive,
    MaxBelowMin,
    StockOutOfRange,
    CompanyNameBlank,
    MachineIdInvalid,
    MachineIdNotPositive,
    TooFewParts,
    PartsExceedPrice,
}

impl Violation {
    /// Human-readable message shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Violation::NameBlank => "The name field is blank.",
            Violation::StockBelowOne => "The inventory count must be greater than 0.",
            Violation::PriceNotPositive => "The price must be greater than $0.",
            Violation::MaxBelowMin => "The Max must be greater than or equal to the Min.",
            Violation::StockOutOfRange => "The inventory must be between the Min and Max values.",
            Violation::CompanyNameBlank => "Company Name is blank.",
            Violation::MachineIdInvalid => "Machine ID is invalid.",
            Violation::MachineIdNotPositive => "Machine ID must be greater than 0.",
            Violation::TooFewParts => "The product must contain at least 2 parts.",
            Violation::PartsExceedPrice => "Price must be greater than the sum of all part costs.",
        }
    }
}

impl core::fmt::Display for Violation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

/// Ordered list of violations; empty means the candidate is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    /// Record `violation` when `failed` holds.
    pub fn check(&mut self, failed: bool, violation: Violation) {
        if failed {
            self.push(violation);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, violation: Violation) -> bool {
        self.0.contains(&violation)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Violation] {
        &self.0
    }
}

impl From<Vec<Violation>> for Violations {
    fn from(value: Vec<Violation>) -> Self {
        Self(value)
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Messages joined by a single space, ready for an alert body.
impl core::fmt::Display for Violations {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(v.message())?;
        }
        Ok(())
    }
}

/// Rules every inventory record must satisfy, in display order.
pub fn check_common(name: &str, price: Price, levels: StockLevels) -> Violations {
    let mut violations = Violations::new();
    violations.check(name.trim().is_empty(), Violation::NameBlank);
    violations.check(levels.stock < 1, Violation::StockBelowOne);
    violations.check(!price.is_positive(), Violation::PriceNotPositive);
    violations.check(levels.max < levels.min, Violation::MaxBelowMin);
    violations.check(!levels.within_bounds(), Violation::StockOutOfRange);
    violations
}
