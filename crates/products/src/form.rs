//! Raw product form values, parsing, and the associated-parts editor.

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, Price, ProductId, StockLevels};
use stockroom_inventory::Part;

use crate::product::Product;
use crate::validation::validate_product;

/// Product form exactly as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub stock: String,
    pub price: String,
    pub min: String,
    pub max: String,
}

impl ProductForm {
    /// Prefill a form from an existing product (modify screen).
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name().to_string(),
            stock: product.stock().to_string(),
            price: product.price().exact_text(),
            min: product.min().to_string(),
            max: product.max().to_string(),
        }
    }

    /// Parse the numeric fields.
    ///
    /// Fails with [`DomainError::MalformedInput`] when stock, price, min or
    /// max is blank or not a number.
    pub fn parse(&self) -> DomainResult<ProductCandidate> {
        let levels = StockLevels::parse(&self.stock, &self.min, &self.max)?;
        let price = Price::parse(&self.price)?;
        Ok(ProductCandidate {
            name: self.name.clone(),
            price,
            levels,
        })
    }
}

/// Parsed product values awaiting validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCandidate {
    pub name: String,
    pub price: Price,
    pub levels: StockLevels,
}

impl ProductCandidate {
    /// Validate against `parts` and, if every rule passes, assemble the product.
    pub fn build(self, id: ProductId, parts: Vec<Part>) -> DomainResult<Product> {
        let violations = validate_product(&self, &parts);
        if !violations.is_empty() {
            return Err(DomainError::ValidationFailed(violations));
        }
        Ok(Product::new(id, self.name.trim(), self.price, self.levels, parts))
    }
}

/// Parts picked for a product that is being created or modified.
///
/// Order is preserved and the same part may be added more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssociatedParts {
    parts: Vec<Part>,
}

impl AssociatedParts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a copy of an existing product's parts.
    pub fn from_product(product: &Product) -> Self {
        Self {
            parts: product.parts().to_vec(),
        }
    }

    pub fn add(&mut self, part: Part) {
        self.parts.push(part);
    }

    /// Remove the first part equal to `part`.
    pub fn remove(&mut self, part: &Part) -> bool {
        match self.parts.iter().position(|p| p == part) {
            Some(index) => {
                self.parts.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Part> {
        (index < self.parts.len()).then(|| self.parts.remove(index))
    }

    pub fn as_slice(&self) -> &[Part] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// `None` when the prices overflow the decimal range.
    pub fn total(&self) -> Option<Price> {
        Price::checked_total(self.parts.iter().map(Part::price))
    }

    pub fn into_vec(self) -> Vec<Part> {
        self.parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::{PartId, Violation};
    use stockroom_inventory::PartSource;

    fn part(id: u32, cents: i64) -> Part {
        Part::new(
            PartId::new(id),
            format!("Part {id}"),
            Price::from_cents(cents),
            StockLevels::new(5, 1, 10),
            PartSource::Outsourced {
                company_name: "Acme".to_string(),
            },
        )
    }

    fn bike_form() -> ProductForm {
        ProductForm {
            name: "Bike".to_string(),
            stock: "3".to_string(),
            price: "100.00".to_string(),
            min: "1".to_string(),
            max: "10".to_string(),
        }
    }

    #[test]
    fn valid_form_builds_product_with_own_parts() {
        let product = bike_form()
            .parse()
            .unwrap()
            .build(ProductId::new(4), vec![part(1, 1_000), part(2, 2_000)])
            .unwrap();
        assert_eq!(*product.id(), ProductId::new(4));
        assert_eq!(product.name(), "Bike");
        assert_eq!(product.parts().len(), 2);
    }

    #[test]
    fn blank_stock_is_malformed() {
        let mut form = bike_form();
        form.stock = String::new();
        assert_eq!(form.parse(), Err(DomainError::MalformedInput));
    }

    #[test]
    fn single_part_fails_with_only_the_part_count_rule() {
        let err = bike_form()
            .parse()
            .unwrap()
            .build(ProductId::new(1), vec![part(1, 1_000)])
            .unwrap_err();
        assert_eq!(
            err.violations().map(|v| v.as_slice()),
            Some(&[Violation::TooFewParts][..])
        );
    }

    #[test]
    fn from_product_prefills_every_field() {
        let product = bike_form()
            .parse()
            .unwrap()
            .build(ProductId::new(1), vec![part(1, 100), part(2, 100)])
            .unwrap();
        assert_eq!(ProductForm::from_product(&product), bike_form());
    }

    #[test]
    fn modify_prefill_rebuilds_the_same_product() {
        let mut form = bike_form();
        form.price = "12.345".to_string();
        let parts = vec![part(1, 100), part(2, 100)];
        let product = form
            .parse()
            .unwrap()
            .build(ProductId::new(1), parts.clone())
            .unwrap();

        let prefilled = ProductForm::from_product(&product);
        assert_eq!(prefilled.price, "12.345");
        let rebuilt = prefilled
            .parse()
            .unwrap()
            .build(ProductId::new(1), parts)
            .unwrap();
        assert_eq!(rebuilt, product);
    }

    #[test]
    fn associated_parts_add_and_remove_first_match() {
        let mut draft = AssociatedParts::new();
        draft.add(part(1, 100));
        draft.add(part(2, 200));
        draft.add(part(1, 100));
        assert_eq!(draft.len(), 3);
        assert_eq!(draft.total(), Some(Price::from_cents(400)));

        assert!(draft.remove(&part(1, 100)));
        assert_eq!(draft.as_slice(), &[part(2, 200), part(1, 100)]);
        assert!(!draft.remove(&part(9, 100)));

        assert_eq!(draft.remove_at(5), None);
        assert_eq!(draft.remove_at(0), Some(part(2, 200)));
        assert_eq!(draft.into_vec(), vec![part(1, 100)]);
    }

    #[test]
    fn draft_from_product_is_a_copy() {
        let product = Product::new(
            ProductId::new(1),
            "Bike",
            Price::from_cents(10_000),
            StockLevels::new(1, 1, 5),
            vec![part(1, 100), part(2, 200)],
        );
        let mut draft = AssociatedParts::from_product(&product);
        draft.remove_at(0);
        assert_eq!(draft.len(), 1);
        assert_eq!(product.parts().len(), 2);
    }
}
