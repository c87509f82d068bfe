//! Add Product / Modify Product form with the associated-parts editor.

use anyhow::Result;

use stockroom_core::{DomainError, DomainResult, Entity, ProductId};
use stockroom_infra::{Inventory, commands};
use stockroom_inventory::Part;
use stockroom_products::{AssociatedParts, ProductForm};

use super::{MenuItem, Outcome, choose, choose_row};
use crate::alert::Alert;
use crate::prompt::Prompter;
use crate::table::{part_label, parts_table};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProductMode {
    /// New product under an id reserved when the form opened.
    Add(ProductId),
    /// Stored product at `index`.
    Modify { index: usize, id: ProductId },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProductAction {
    EditFields,
    SearchParts,
    ShowAllParts,
    AddPart,
    RemovePart,
    Save,
    Cancel,
}

impl MenuItem for ProductAction {
    const ALL: &'static [Self] = &[
        ProductAction::EditFields,
        ProductAction::SearchParts,
        ProductAction::ShowAllParts,
        ProductAction::AddPart,
        ProductAction::RemovePart,
        ProductAction::Save,
        ProductAction::Cancel,
    ];

    fn label(&self) -> &'static str {
        match self {
            ProductAction::EditFields => "Edit fields",
            ProductAction::SearchParts => "Search parts",
            ProductAction::ShowAllParts => "Show all parts",
            ProductAction::AddPart => "Add part",
            ProductAction::RemovePart => "Remove associated part",
            ProductAction::Save => "Save",
            ProductAction::Cancel => "Cancel",
        }
    }
}

pub struct ProductScreen<'a, P> {
    inventory: &'a mut Inventory,
    prompter: &'a mut P,
    mode: ProductMode,
    form: ProductForm,
    associated: AssociatedParts,
    /// Index of the part a search narrowed the parts table to.
    part_filter: Option<usize>,
}

impl<'a, P: Prompter> ProductScreen<'a, P> {
    /// Open an empty form. The id is reserved immediately, so it is used up
    /// even when the form is cancelled.
    pub fn add(inventory: &'a mut Inventory, prompter: &'a mut P) -> Self {
        let id = inventory.next_product_id();
        Self {
            inventory,
            prompter,
            mode: ProductMode::Add(id),
            form: ProductForm::default(),
            associated: AssociatedParts::new(),
            part_filter: None,
        }
    }

    /// Open a form prefilled from the product at `index`. Its parts are
    /// copied; the stored product changes only on save.
    pub fn modify(
        inventory: &'a mut Inventory,
        prompter: &'a mut P,
        index: usize,
    ) -> DomainResult<Self> {
        let product = inventory.product(index).ok_or(DomainError::NotFound)?;
        let mode = ProductMode::Modify {
            index,
            id: *product.id(),
        };
        let form = ProductForm::from_product(product);
        let associated = AssociatedParts::from_product(product);
        Ok(Self {
            inventory,
            prompter,
            mode,
            form,
            associated,
            part_filter: None,
        })
    }

    pub fn mode(&self) -> ProductMode {
        self.mode
    }

    pub fn associated(&self) -> &AssociatedParts {
        &self.associated
    }

    fn is_add(&self) -> bool {
        matches!(self.mode, ProductMode::Add(_))
    }

    fn title(&self) -> &'static str {
        if self.is_add() { "Add Product" } else { "Modify Product" }
    }

    fn visible_parts(&self) -> Vec<&Part> {
        match self.part_filter {
            Some(index) => self.inventory.part(index).into_iter().collect(),
            None => self.inventory.parts().iter().collect(),
        }
    }

    fn summary(&self) -> String {
        let id = match self.mode {
            ProductMode::Add(id) => format!("Auto-Gen: {id}"),
            ProductMode::Modify { id, .. } => id.to_string(),
        };
        let form = &self.form;
        format!(
            "{}\n  ID: {id}\n  Name: {}\n  Inv: {}\n  Price: {}\n  Max: {}\n  Min: {}\n\nParts\n{}\n\nAssociated parts (total {})\n{}",
            self.title(),
            form.name,
            form.stock,
            form.price,
            form.max,
            form.min,
            parts_table(self.visible_parts()),
            self.associated
                .total()
                .map_or_else(|| "out of range".to_string(), |total| total.to_string()),
            parts_table(self.associated.as_slice()),
        )
    }

    /// Drive the form until the product is saved or the user confirms cancel.
    pub fn run(mut self) -> Result<Outcome> {
        if self.is_add() {
            self.edit_fields()?;
        }

        loop {
            let summary = self.summary();
            self.prompter.show(&summary)?;

            match choose::<ProductAction, P>(self.prompter, self.title())? {
                Some(ProductAction::EditFields) => self.edit_fields()?,
                Some(ProductAction::SearchParts) => self.search_parts()?,
                Some(ProductAction::ShowAllParts) => self.part_filter = None,
                Some(ProductAction::AddPart) => self.add_associated()?,
                Some(ProductAction::RemovePart) => self.remove_associated()?,
                Some(ProductAction::Save) => {
                    if self.save()? {
                        return Ok(Outcome::Saved);
                    }
                }
                Some(ProductAction::Cancel) | None => {
                    if self.confirm_cancel()? {
                        tracing::debug!(mode = ?self.mode, "product form cancelled");
                        return Ok(Outcome::Cancelled);
                    }
                }
            }
        }
    }

    fn edit_fields(&mut self) -> Result<()> {
        self.form.name = self.prompter.input("Name", &self.form.name)?;
        self.form.stock = self.prompter.input("Inv", &self.form.stock)?;
        self.form.price = self.prompter.input("Price", &self.form.price)?;
        self.form.max = self.prompter.input("Max", &self.form.max)?;
        self.form.min = self.prompter.input("Min", &self.form.min)?;
        Ok(())
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

    fn add_associated(&mut self) -> Result<()> {
        let rows = self.visible_parts().into_iter().map(part_label).collect();
        let Some(row) = choose_row(self.prompter, "Part to add", rows)? else {
            return self
                .prompter
                .alert(&Alert::selection_error("No part selected to add."));
        };
        let picked = self.visible_parts().get(row).map(|part| (*part).clone());
        if let Some(part) = picked {
            tracing::debug!(part_id = %part.id(), "part associated");
            self.associated.add(part);
        }
        Ok(())
    }

    fn remove_associated(&mut self) -> Result<()> {
        let rows = self.associated.as_slice().iter().map(part_label).collect();
        let Some(row) = choose_row(self.prompter, "Part to remove", rows)? else {
            return self
                .prompter
                .alert(&Alert::selection_error("No part selected to remove."));
        };
        let Some(name) = self.associated.as_slice().get(row).map(|p| p.name().to_string()) else {
            return Ok(());
        };

        let question = Alert::confirmation(format!(
            "Are you sure you want to remove {name} from the product?"
        ));
        if self.prompter.confirm(&question)? {
            self.associated.remove_at(row);
        }
        Ok(())
    }

    /// `Ok(false)` when the form was rejected and stays open.
    fn save(&mut self) -> Result<bool> {
        let parts = self.associated.as_slice().to_vec();
        let result = match self.mode {
            ProductMode::Add(id) => {
                commands::create_product(self.inventory, id, &self.form, parts).map(|_| ())
            }
            ProductMode::Modify { index, .. } => {
                commands::update_product(self.inventory, index, &self.form, parts).map(|_| ())
            }
        };
        let Err(err) = result else {
            return Ok(true);
        };

        let header = if self.is_add() {
            "Error Adding Product"
        } else {
            "Error Modifying Product"
        };
        let alert = Alert::from_error(header, &err);
        self.prompter.alert(&alert)?;
        Ok(false)
    }

    fn confirm_cancel(&mut self) -> Result<bool> {
        let question = if self.is_add() {
            Alert::confirmation("Are you sure you want to cancel adding a new product?")
        } else {
            Alert::confirmation("Are you sure you want to cancel modifying the product?")
        };
        self.prompter.confirm(&question)
    }
}
