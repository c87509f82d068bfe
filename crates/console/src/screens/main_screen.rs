//! Main overview: parts and products tables with search, add, modify,
//! delete and exit.

use anyhow::Result;

use stockroom_infra::Inventory;
use stockroom_infra::commands::{self, PART_IN_USE, PRODUCT_HAS_PARTS};

use super::{MenuItem, PartScreen, ProductScreen, choose, choose_row};
use crate::alert::Alert;
use crate::prompt::Prompter;
use crate::table::{part_label, parts_table, product_label, products_table};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MainAction {
    SearchParts,
    AddPart,
    ModifyPart,
    DeletePart,
    SearchProducts,
    AddProduct,
    ModifyProduct,
    DeleteProduct,
    ShowAll,
    Exit,
}

impl MenuItem for MainAction {
    const ALL: &'static [Self] = &[
        MainAction::SearchParts,
        MainAction::AddPart,
        MainAction::ModifyPart,
        MainAction::DeletePart,
        MainAction::SearchProducts,
        MainAction::AddProduct,
        MainAction::ModifyProduct,
        MainAction::DeleteProduct,
        MainAction::ShowAll,
        MainAction::Exit,
    ];

    fn label(&self) -> &'static str {
        match self {
            MainAction::SearchParts => "Search parts",
            MainAction::AddPart => "Add part",
            MainAction::ModifyPart => "Modify part",
            MainAction::DeletePart => "Delete part",
            MainAction::SearchProducts => "Search products",
            MainAction::AddProduct => "Add product",
            MainAction::ModifyProduct => "Modify product",
            MainAction::DeleteProduct => "Delete product",
            MainAction::ShowAll => "Show all",
            MainAction::Exit => "Exit",
        }
    }
}

const TITLE: &str = "Inventory Management System";

pub struct MainScreen<'a, P> {
    inventory: &'a mut Inventory,
    prompter: &'a mut P,
    /// Set by a successful search; the table then shows only that record.
    part_filter: Option<usize>,
    product_filter: Option<usize>,
}

/// Store indices currently on screen.
fn visible(filter: Option<usize>, len: usize) -> Vec<usize> {
    match filter {
        Some(index) if index < len => vec![index],
        _ => (0..len).collect(),
    }
}

impl<'a, P: Prompter> MainScreen<'a, P> {
    pub fn new(inventory: &'a mut Inventory, prompter: &'a mut P) -> Self {
        Self {
            inventory,
            prompter,
            part_filter: None,
            product_filter: None,
        }
    }

    /// Loop until the user confirms exit.
    pub fn run(mut self) -> Result<()> {
        loop {
            self.render()?;

            match choose::<MainAction, P>(self.prompter, TITLE)? {
                Some(MainAction::SearchParts) => self.search_parts()?,
                Some(MainAction::SearchProducts) => self.search_products()?,
                Some(MainAction::ShowAll) => self.clear_filters(),
                Some(MainAction::AddPart) => {
                    let outcome = PartScreen::add(self.inventory, self.prompter).run()?;
                    tracing::debug!(?outcome, "add part closed");
                }
                Some(MainAction::AddProduct) => {
                    let outcome = ProductScreen::add(self.inventory, self.prompter).run()?;
                    tracing::debug!(?outcome, "add product closed");
                }
                Some(MainAction::ModifyPart) => self.modify_part()?,
                Some(MainAction::ModifyProduct) => self.modify_product()?,
                Some(MainAction::DeletePart) => self.delete_part()?,
                Some(MainAction::DeleteProduct) => self.delete_product()?,
                Some(MainAction::Exit) | None => {
                    if self
                        .prompter
                        .confirm(&Alert::confirmation("Are you sure you want to exit?"))?
                    {
                        tracing::info!(
                            parts = self.inventory.part_count(),
                            products = self.inventory.product_count(),
                            "exiting"
                        );
                        return Ok(());
                    }
                }
            }
        }
    }

    fn render(&mut self) -> Result<()> {
        let parts = visible(self.part_filter, self.inventory.part_count());
        let products = visible(self.product_filter, self.inventory.product_count());
        let parts_text = parts_table(parts.iter().filter_map(|&i| self.inventory.part(i)));
        let products_text =
            products_table(products.iter().filter_map(|&i| self.inventory.product(i)));

        self.prompter.show(&format!("Parts\n{parts_text}"))?;
        self.prompter.show(&format!("Products\n{products_text}"))
    }

    fn clear_filters(&mut self) {
        self.part_filter = None;
        self.product_filter = None;
    }

    fn search_parts(&mut self) -> Result<()> {
        let term = self.prompter.input("Search by Part ID or Name", "")?;
        if term.trim().is_empty() {
            self.part_filter = None;
            return Ok(());
        }
        match self.inventory.lookup_part(&term) {
            Some(index) => self.part_filter = Some(index),
            None => self.prompter.alert(&Alert::part_not_found())?,
        }
        Ok(())
    }

    fn search_products(&mut self) -> Result<()> {
        let term = self.prompter.input("Search by Product ID or Name", "")?;
        if term.trim().is_empty() {
            self.product_filter = None;
            return Ok(());
        }
        match self.inventory.lookup_product(&term) {
            Some(index) => self.product_filter = Some(index),
            None => self.prompter.alert(&Alert::product_not_found())?,
        }
        Ok(())
    }

    /// Store index of the part the user picks from the visible rows.
    fn pick_part(&mut self, prompt: &str) -> Result<Option<usize>> {
        let indices = visible(self.part_filter, self.inventory.part_count());
        let rows = indices
            .iter()
            .filter_map(|&i| self.inventory.part(i))
            .map(part_label)
            .collect();
        let row = choose_row(self.prompter, prompt, rows)?;
        Ok(row.and_then(|r| indices.get(r).copied()))
    }

    /// Store index of the product the user picks from the visible rows.
    fn pick_product(&mut self, prompt: &str) -> Result<Option<usize>> {
        let indices = visible(self.product_filter, self.inventory.product_count());
        let rows = indices
            .iter()
            .filter_map(|&i| self.inventory.product(i))
            .map(product_label)
            .collect();
        let row = choose_row(self.prompter, prompt, rows)?;
        Ok(row.and_then(|r| indices.get(r).copied()))
    }

    fn modify_part(&mut self) -> Result<()> {
        let Some(index) = self.pick_part("Part to modify")? else {
            return self.prompter.alert(&Alert::selection_error("No part selected."));
        };
        let opened = PartScreen::modify(self.inventory, self.prompter, index).map(PartScreen::run);
        match opened {
            Ok(outcome) => {
                let outcome = outcome?;
                tracing::debug!(?outcome, index, "modify part closed");
                Ok(())
            }
            Err(err) => {
                let alert = Alert::from_error("Error Modifying Part", &err);
                self.prompter.alert(&alert)
            }
        }
    }

    fn modify_product(&mut self) -> Result<()> {
        let Some(index) = self.pick_product("Product to modify")? else {
            return self
                .prompter
                .alert(&Alert::selection_error("No product selected."));
        };
        let opened = ProductScreen::modify(self.inventory, self.prompter, index).map(ProductScreen::run);
        match opened {
            Ok(outcome) => {
                let outcome = outcome?;
                tracing::debug!(?outcome, index, "modify product closed");
                Ok(())
            }
            Err(err) => {
                let alert = Alert::from_error("Error Modifying Product", &err);
                self.prompter.alert(&alert)
            }
        }
    }

    fn delete_part(&mut self) -> Result<()> {
        let picked = self
            .pick_part("Part to delete")?
            .and_then(|index| self.inventory.part(index).cloned());
        let Some(part) = picked else {
            return self.prompter.alert(&Alert::selection_error("No part selected."));
        };

        if self.inventory.part_delete_blocked(&part) {
            return self.prompter.alert(&Alert::warning(PART_IN_USE));
        }
        let question = Alert::confirmation("Are you sure you want to delete this part?");
        if !self.prompter.confirm(&question)? {
            return Ok(());
        }
        if let Err(err) = commands::delete_part(self.inventory, &part) {
            let alert = Alert::from_error("Error Deleting Part", &err);
            self.prompter.alert(&alert)?;
        }
        self.part_filter = None;
        Ok(())
    }

    fn delete_product(&mut self) -> Result<()> {
        let picked = self
            .pick_product("Product to delete")?
            .and_then(|index| self.inventory.product(index).cloned());
        let Some(product) = picked else {
            return self
                .prompter
                .alert(&Alert::selection_error("No product selected."));
        };

        if self.inventory.product_delete_blocked(&product) {
            return self.prompter.alert(&Alert::warning(PRODUCT_HAS_PARTS));
        }
        let question = Alert::confirmation("Are you sure you want to delete this product?");
        if !self.prompter.confirm(&question)? {
            return Ok(());
        }
        if let Err(err) = commands::delete_product(self.inventory, &product) {
            let alert = Alert::from_error("Error Deleting Product", &err);
            self.prompter.alert(&alert)?;
        }
        self.product_filter = None;
        Ok(())
    }
}
