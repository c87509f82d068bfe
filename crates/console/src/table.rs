//! Parts and products tables.

use tabled::{builder::Builder, settings::Style};

use stockroom_core::Entity;
use stockroom_inventory::Part;
use stockroom_products::Product;

const PART_HEADER: [&str; 4] = ["Part ID", "Part Name", "Inventory Level", "Price/Cost per Unit"];
const PRODUCT_HEADER: [&str; 4] = [
    "Product ID",
    "Product Name",
    "Inventory Level",
    "Price/Cost per Unit",
];

fn render<'a, T: Entity + 'a>(
    header: [&str; 4],
    rows: impl IntoIterator<Item = (&'a T, i64, String)>,
) -> String {
    let mut builder = Builder::default();
    builder.push_record(header);
    for (item, stock, price) in rows {
        let id: u32 = (*item.id()).into();
        builder.push_record([
            id.to_string(),
            item.name().to_string(),
            stock.to_string(),
            price,
        ]);
    }
    builder.build().with(Style::rounded()).to_string()
}

/// Render `parts` with their ids, names, stock and unit prices.
pub fn parts_table<'a>(parts: impl IntoIterator<Item = &'a Part>) -> String {
    render(
        PART_HEADER,
        parts
            .into_iter()
            .map(|part| (part, part.stock(), part.price().to_string())),
    )
}

/// Render `products` with their ids, names, stock and unit prices.
pub fn products_table<'a>(products: impl IntoIterator<Item = &'a Product>) -> String {
    render(
        PRODUCT_HEADER,
        products
            .into_iter()
            .map(|product| (product, product.stock(), product.price().to_string())),
    )
}

/// One-line label for picking a part from a list.
pub fn part_label(part: &Part) -> String {
    format!(
        "{} - {} ({} in stock, {})",
        part.id(),
        part.name(),
        part.stock(),
        part.price()
    )
}

/// One-line label for picking a product from a list.
pub fn product_label(product: &Product) -> String {
    format!(
        "{} - {} ({} in stock, {}, {} parts)",
        product.id(),
        product.name(),
        product.stock(),
        product.price(),
        product.parts().len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::{PartId, Price, StockLevels};
    use stockroom_inventory::PartSource;

    #[test]
    fn parts_table_lists_every_column() {
        let part = Part::new(
            PartId::new(7),
            "Brake pad",
            Price::from_cents(1250),
            StockLevels::new(4, 1, 10),
            PartSource::Outsourced {
                company_name: "Acme".to_string(),
            },
        );
        let table = parts_table([&part]);
        for cell in ["Part ID", "Price/Cost per Unit", "7", "Brake pad", "4", "12.50"] {
            assert!(table.contains(cell), "missing {cell} in\n{table}");
        }
    }

    #[test]
    fn empty_table_still_has_header() {
        let table = products_table(std::iter::empty());
        assert!(table.contains("Product Name"));
    }
}
