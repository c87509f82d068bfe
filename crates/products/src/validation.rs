//! Product validation rules.

use stockroom_core::{Price, Violation, Violations, check_common};
use stockroom_inventory::Part;

use crate::form::ProductCandidate;

/// Minimum number of parts a product is assembled from.
pub const MIN_PARTS: usize = 2;

/// Every rule a product must satisfy given the parts it would contain.
/// Empty result means the product is valid.
pub fn validate_product(candidate: &ProductCandidate, parts: &[Part]) -> Violations {
    let mut violations = check_common(&candidate.name, candidate.price, candidate.levels);

    // A total past the decimal range certainly exceeds any product price.
    let exceeds = Price::checked_total(parts.iter().map(Part::price))
        .is_none_or(|total| total > candidate.price);
    violations.check(parts.len() < MIN_PARTS, Violation::TooFewParts);
    violations.check(exceeds, Violation::PartsExceedPrice);

    violations
}
