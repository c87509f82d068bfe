//! In-memory inventory store.
//!
//! Two ordered collections (parts, products) addressed by position, plus the
//! id sequences new records draw from. The store is a plain owned value:
//! whoever drives the session holds it and lends it out by reference.

use stockroom_core::{DomainError, DomainResult, Entity, IdSequence, PartId, ProductId};
use stockroom_inventory::Part;
use stockroom_products::Product;

use crate::lookup::{self, LookupPolicy, NameMatch, SearchTerm};

/// Process-lifetime inventory of parts and products.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    parts: Vec<Part>,
    products: Vec<Product>,
    part_ids: IdSequence,
    product_ids: IdSequence,
    lookup_policy: LookupPolicy,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lookup_policy(lookup_policy: LookupPolicy) -> Self {
        Self {
            lookup_policy,
            ..Self::default()
        }
    }

    pub fn lookup_policy(&self) -> LookupPolicy {
        self.lookup_policy
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn part(&self, index: usize) -> Option<&Part> {
        self.parts.get(index)
    }

    pub fn product(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Append a part; returns the stored record.
    pub fn add_part(&mut self, part: Part) -> &Part {
        self.parts.push(part);
        &self.parts[self.parts.len() - 1]
    }

    /// Append a product; returns the stored record.
    pub fn add_product(&mut self, product: Product) -> &Product {
        self.products.push(product);
        &self.products[self.products.len() - 1]
    }

    /// Remove the first part structurally equal to `part`.
    pub fn remove_part(&mut self, part: &Part) -> bool {
        match self.position_of_part(part) {
            Some(index) => {
                self.parts.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove the first product structurally equal to `product`.
    pub fn remove_product(&mut self, product: &Product) -> bool {
        match self.position_of_product(product) {
            Some(index) => {
                self.products.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the part at `index`.
    pub fn update_part(&mut self, index: usize, part: Part) -> DomainResult<()> {
        let slot = self.parts.get_mut(index).ok_or(DomainError::NotFound)?;
        *slot = part;
        Ok(())
    }

    /// Replace the product at `index`.
    pub fn update_product(&mut self, index: usize, product: Product) -> DomainResult<()> {
        let slot = self.products.get_mut(index).ok_or(DomainError::NotFound)?;
        *slot = product;
        Ok(())
    }

    pub fn position_of_part(&self, part: &Part) -> Option<usize> {
        self.parts.iter().position(|p| p == part)
    }

    pub fn position_of_product(&self, product: &Product) -> Option<usize> {
        self.products.iter().position(|p| p == product)
    }

    /// Find a part by id (integer term) or case-insensitive name.
    pub fn lookup_part(&self, term: &str) -> Option<usize> {
        let term = SearchTerm::parse(term);
        let hit = lookup::find(
            &self.parts,
            &term,
            NameMatch::CaseInsensitive,
            self.lookup_policy,
        );
        tracing::debug!(?term, ?hit, "part lookup");
        hit
    }

    /// Find a product by id (integer term) or exact name.
    pub fn lookup_product(&self, term: &str) -> Option<usize> {
        let term = SearchTerm::parse(term);
        let hit = lookup::find(&self.products, &term, NameMatch::Exact, self.lookup_policy);
        tracing::debug!(?term, ?hit, "product lookup");
        hit
    }

    /// Reserve the next part id. Reserved ids are never handed out again.
    pub fn next_part_id(&mut self) -> PartId {
        let id = self.part_ids.next_part_id();
        tracing::debug!(part_id = %id, "part id reserved");
        id
    }

    /// Reserve the next product id. Reserved ids are never handed out again.
    pub fn next_product_id(&mut self) -> ProductId {
        let id = self.product_ids.next_product_id();
        tracing::debug!(product_id = %id, "product id reserved");
        id
    }

    /// True when some product is assembled from `part`; deleting it must be refused.
    pub fn part_delete_blocked(&self, part: &Part) -> bool {
        self.products.iter().any(|p| p.contains_part(part))
    }

    /// True when the stored product with `product`'s id still has parts;
    /// deleting it must be refused.
    pub fn product_delete_blocked(&self, product: &Product) -> bool {
        self.products
            .iter()
            .filter(|p| p.id() == product.id())
            .any(Product::has_parts)
    }
}
