use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, Price, ProductId, StockLevels};
use stockroom_inventory::Part;

/// A sellable item assembled from parts.
///
/// Each product owns its parts list; two products never share one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Price,
    levels: StockLevels,
    parts: Vec<Part>,
}

impl Product {
    /// Assemble a product from already-checked values.
    ///
    /// Business rules are enforced by [`crate::ProductCandidate::build`].
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        levels: StockLevels,
        parts: Vec<Part>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            levels,
            parts,
        }
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn levels(&self) -> StockLevels {
        self.levels
    }

    pub fn stock(&self) -> i64 {
        self.levels.stock
    }

    pub fn min(&self) -> i64 {
        self.levels.min
    }

    pub fn max(&self) -> i64 {
        self.levels.max
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn has_parts(&self) -> bool {
        !self.parts.is_empty()
    }

    pub fn contains_part(&self, part: &Part) -> bool {
        self.parts.contains(part)
    }

    /// Sum of the prices of the associated parts; `None` on decimal overflow.
    pub fn parts_total(&self) -> Option<Price> {
        Price::checked_total(self.parts.iter().map(Part::price))
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
