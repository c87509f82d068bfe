//! Form-to-store command handlers.
//!
//! Each handler takes raw form values, parses and validates them completely,
//! and only then touches the store. A rejected command leaves the inventory
//! exactly as it was.
//!
//! ```text
//! raw form strings
//!   ↓ parse        (MalformedInput)
//! candidate
//!   ↓ validate     (ValidationFailed with every violation)
//! record
//!   ↓ append / replace
//! Inventory
//! ```

use stockroom_core::{DomainError, DomainResult, Entity, PartId, ProductId};
use stockroom_inventory::{Part, PartForm};
use stockroom_products::{Product, ProductForm};

use crate::store::Inventory;

/// Alert text when a part is still used by a product.
pub const PART_IN_USE: &str = "Part is being used by one or more products.";
/// Alert text when a product still has parts.
pub const PRODUCT_HAS_PARTS: &str = "Product contains one or more parts.";

fn log_rejected(command: &'static str, err: &DomainError) {
    match err {
        DomainError::ValidationFailed(violations) => {
            tracing::warn!(command, count = violations.len(), %violations, "command rejected");
        }
        other => tracing::warn!(command, error = %other, "command rejected"),
    }
}

/// Create a part under an id reserved with [`Inventory::next_part_id`].
pub fn create_part<'a>(
    inventory: &'a mut Inventory,
    id: PartId,
    form: &PartForm,
) -> DomainResult<&'a Part> {
    let part = form
        .parse()
        .and_then(|candidate| candidate.build(id))
        .inspect_err(|e| log_rejected("part.create", e))?;

    tracing::info!(part_id = %id, name = part.name(), source = part.source().label(), "part created");
    Ok(inventory.add_part(part))
}

/// Replace the part at `index`, keeping its id.
pub fn update_part<'a>(
    inventory: &'a mut Inventory,
    index: usize,
    form: &PartForm,
) -> DomainResult<&'a Part> {
    let id = inventory
        .part(index)
        .map(|record| *record.id())
        .ok_or(DomainError::NotFound)
        .inspect_err(|e| log_rejected("part.update", e))?;

    let part = form
        .parse()
        .and_then(|candidate| candidate.build(id))
        .inspect_err(|e| log_rejected("part.update", e))?;

    inventory.update_part(index, part)?;
    tracing::info!(part_id = %id, index, "part updated");
    inventory.part(index).ok_or(DomainError::NotFound)
}

/// Create a product under an id reserved with [`Inventory::next_product_id`].
pub fn create_product<'a>(
    inventory: &'a mut Inventory,
    id: ProductId,
    form: &ProductForm,
    parts: Vec<Part>,
) -> DomainResult<&'a Product> {
    let product = form
        .parse()
        .and_then(|candidate| candidate.build(id, parts))
        .inspect_err(|e| log_rejected("product.create", e))?;

    tracing::info!(
        product_id = %id,
        name = product.name(),
        parts = product.parts().len(),
        "product created"
    );
    Ok(inventory.add_product(product))
}

/// Replace the product at `index`, keeping its id.
pub fn update_product<'a>(
    inventory: &'a mut Inventory,
    index: usize,
    form: &ProductForm,
    parts: Vec<Part>,
) -> DomainResult<&'a Product> {
    let id = inventory
        .product(index)
        .map(|record| *record.id())
        .ok_or(DomainError::NotFound)
        .inspect_err(|e| log_rejected("product.update", e))?;

    let product = form
        .parse()
        .and_then(|candidate| candidate.build(id, parts))
        .inspect_err(|e| log_rejected("product.update", e))?;

    inventory.update_product(index, product)?;
    tracing::info!(product_id = %id, index, "product updated");
    inventory.product(index).ok_or(DomainError::NotFound)
}

/// Delete a part unless a product is assembled from it.
pub fn delete_part(inventory: &mut Inventory, part: &Part) -> DomainResult<()> {
    if inventory.part_delete_blocked(part) {
        let err = DomainError::conflict(PART_IN_USE);
        log_rejected("part.delete", &err);
        return Err(err);
    }
    if !inventory.remove_part(part) {
        log_rejected("part.delete", &DomainError::NotFound);
        return Err(DomainError::not_found());
    }
    tracing::info!(part_id = %part.id(), "part deleted");
    Ok(())
}

/// Delete a product unless it still has parts.
pub fn delete_product(inventory: &mut Inventory, product: &Product) -> DomainResult<()> {
    if inventory.product_delete_blocked(product) {
        let err = DomainError::conflict(PRODUCT_HAS_PARTS);
        log_rejected("product.delete", &err);
        return Err(err);
    }
    if !inventory.remove_product(product) {
        log_rejected("product.delete", &DomainError::NotFound);
        return Err(DomainError::not_found());
    }
    tracing::info!(product_id = %product.id(), "product deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::{Price, Violation};
    use stockroom_inventory::SourceField;

    fn part_form(name: &str, price: &str) -> PartForm {
        PartForm {
            name: name.to_string(),
            stock: "10".to_string(),
            price: price.to_string(),
            min: "5".to_string(),
            max: "20".to_string(),
            source: SourceField::Outsourced("Acme".to_string()),
        }
    }

    fn product_form(name: &str, price: &str) -> ProductForm {
        ProductForm {
            name: name.to_string(),
            stock: "2".to_string(),
            price: price.to_string(),
            min: "1".to_string(),
            max: "5".to_string(),
        }
    }

    #[test]
    fn rejected_create_leaves_store_untouched_but_consumes_id() {
        let mut inv = Inventory::new();
        let id = inv.next_part_id();
        let err = create_part(&mut inv, id, &part_form("", "1.00")).unwrap_err();
        assert_eq!(
            err.violations().map(|v| v.as_slice()),
            Some(&[Violation::NameBlank][..])
        );
        assert_eq!(inv.part_count(), 0);
        assert_eq!(inv.next_part_id(), PartId::new(2));
    }

    #[test]
    fn malformed_form_is_distinguished_from_validation() {
        let mut inv = Inventory::new();
        let id = inv.next_part_id();
        let err = create_part(&mut inv, id, &part_form("Bolt", "abc")).unwrap_err();
        assert_eq!(err, DomainError::MalformedInput);
    }

    #[test]
    fn update_keeps_id_and_position() {
        let mut inv = Inventory::new();
        for name in ["Bolt", "Nut"] {
            let id = inv.next_part_id();
            create_part(&mut inv, id, &part_form(name, "1.00")).unwrap();
        }

        let updated = update_part(&mut inv, 0, &part_form("Hex bolt", "1.25")).unwrap();
        assert_eq!(*updated.id(), PartId::new(1));
        assert_eq!(updated.price(), Price::from_cents(125));
        assert_eq!(inv.part(0).map(Entity::name), Some("Hex bolt"));
        assert_eq!(inv.part_count(), 2);
    }

    #[test]
    fn update_with_invalid_form_keeps_old_record() {
        let mut inv = Inventory::new();
        let id = inv.next_part_id();
        create_part(&mut inv, id, &part_form("Bolt", "1.00")).unwrap();
        let before = inv.parts().to_vec();

        assert!(update_part(&mut inv, 0, &part_form("Bolt", "-1")).is_err());
        assert_eq!(inv.parts(), &before[..]);
        assert_eq!(
            update_part(&mut inv, 3, &part_form("Bolt", "1.00")).unwrap_err(),
            DomainError::NotFound
        );
    }

    #[test]
    fn product_lifecycle_with_delete_guards() {
        let mut inv = Inventory::new();
        for name in ["Frame", "Wheel"] {
            let id = inv.next_part_id();
            create_part(&mut inv, id, &part_form(name, "10.00")).unwrap();
        }
        let parts = inv.parts().to_vec();

        let pid = inv.next_product_id();
        let bike = create_product(&mut inv, pid, &product_form("Bike", "50.00"), parts.clone())
            .unwrap()
            .clone();

        let frame = parts[0].clone();
        assert_eq!(
            delete_part(&mut inv, &frame),
            Err(DomainError::conflict(PART_IN_USE))
        );
        assert_eq!(
            delete_product(&mut inv, &bike),
            Err(DomainError::conflict(PRODUCT_HAS_PARTS))
        );

        // Strip the parts: product validation forbids it, so the update is rejected.
        assert!(update_product(&mut inv, 0, &product_form("Bike", "50.00"), vec![]).is_err());
        assert!(inv.product_delete_blocked(&bike));
    }

    #[test]
    fn deleting_unused_records_succeeds_once() {
        let mut inv = Inventory::new();
        let id = inv.next_part_id();
        let washer = create_part(&mut inv, id, &part_form("Washer", "0.10"))
            .unwrap()
            .clone();

        delete_part(&mut inv, &washer).unwrap();
        assert_eq!(inv.part_count(), 0);
        assert_eq!(delete_part(&mut inv, &washer), Err(DomainError::NotFound));
    }
}
