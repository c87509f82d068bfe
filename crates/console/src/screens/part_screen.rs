//! Add Part / Modify Part form.

use anyhow::Result;

use stockroom_core::{DomainError, DomainResult, Entity, PartId};
use stockroom_infra::{Inventory, commands};
use stockroom_inventory::PartForm;

use super::{MenuItem, Outcome, choose};
use crate::alert::Alert;
use crate::prompt::Prompter;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PartMode {
    /// New part under an id reserved when the form opened.
    Add(PartId),
    /// Stored part at `index`.
    Modify { index: usize, id: PartId },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PartAction {
    EditFields,
    ToggleSource,
    Save,
    Cancel,
}

impl MenuItem for PartAction {
    const ALL: &'static [Self] = &[
        PartAction::EditFields,
        PartAction::ToggleSource,
        PartAction::Save,
        PartAction::Cancel,
    ];

    fn label(&self) -> &'static str {
        match self {
            PartAction::EditFields => "Edit fields",
            PartAction::ToggleSource => "Switch In-House / Outsourced",
            PartAction::Save => "Save",
            PartAction::Cancel => "Cancel",
        }
    }
}

const SOURCES: [&str; 2] = ["In-House", "Outsourced"];

pub struct PartScreen<'a, P> {
    inventory: &'a mut Inventory,
    prompter: &'a mut P,
    mode: PartMode,
    form: PartForm,
}

impl<'a, P: Prompter> PartScreen<'a, P> {
    /// Open an empty form. The id is reserved immediately, so it is used up
    /// even when the form is cancelled.
    pub fn add(inventory: &'a mut Inventory, prompter: &'a mut P) -> Self {
        let id = inventory.next_part_id();
        Self {
            inventory,
            prompter,
            mode: PartMode::Add(id),
            form: PartForm::default(),
        }
    }

    /// Open a form prefilled from the part at `index`.
    pub fn modify(
        inventory: &'a mut Inventory,
        prompter: &'a mut P,
        index: usize,
    ) -> DomainResult<Self> {
        let part = inventory.part(index).ok_or(DomainError::NotFound)?;
        let mode = PartMode::Modify {
            index,
            id: *part.id(),
        };
        let form = PartForm::from_part(part);
        Ok(Self {
            inventory,
            prompter,
            mode,
            form,
        })
    }

    pub fn mode(&self) -> PartMode {
        self.mode
    }

    pub fn form(&self) -> &PartForm {
        &self.form
    }

    fn is_add(&self) -> bool {
        matches!(self.mode, PartMode::Add(_))
    }

    fn title(&self) -> &'static str {
        if self.is_add() { "Add Part" } else { "Modify Part" }
    }

    fn id_label(&self) -> String {
        match self.mode {
            PartMode::Add(id) => format!("Auto-Gen: {id}"),
            PartMode::Modify { id, .. } => id.to_string(),
        }
    }

    fn summary(&self) -> String {
        let form = &self.form;
        let source = if form.source.is_outsourced() {
            SOURCES[1]
        } else {
            SOURCES[0]
        };
        format!(
            "{} [{source}]\n  ID: {}\n  Name: {}\n  Inv: {}\n  Price/Cost: {}\n  Max: {}\n  Min: {}\n  {}: {}",
            self.title(),
            self.id_label(),
            form.name,
            form.stock,
            form.price,
            form.max,
            form.min,
            form.source.label(),
            form.source.value(),
        )
    }

    /// Drive the form until the part is saved or the user confirms cancel.
    pub fn run(mut self) -> Result<Outcome> {
        if self.is_add() {
            self.choose_source()?;
            self.edit_fields()?;
        }

        loop {
            let summary = self.summary();
            self.prompter.show(&summary)?;

            match choose::<PartAction, P>(self.prompter, self.title())? {
                Some(PartAction::EditFields) => self.edit_fields()?,
                Some(PartAction::ToggleSource) => self.form.source = self.form.source.toggled(),
                Some(PartAction::Save) => {
                    if self.save()? {
                        return Ok(Outcome::Saved);
                    }
                }
                Some(PartAction::Cancel) | None => {
                    if self.confirm_cancel()? {
                        tracing::debug!(mode = ?self.mode, "part form cancelled");
                        return Ok(Outcome::Cancelled);
                    }
                }
            }
        }
    }

    fn choose_source(&mut self) -> Result<()> {
        let items = SOURCES.map(str::to_string);
        let wants_outsourced = match self.prompter.select("Source", &items)? {
            Some(1) => true,
            Some(_) => false,
            None => return Ok(()),
        };
        if wants_outsourced != self.form.source.is_outsourced() {
            self.form.source = self.form.source.toggled();
        }
        Ok(())
    }

    fn edit_fields(&mut self) -> Result<()> {
        self.form.name = self.prompter.input("Name", &self.form.name)?;
        self.form.stock = self.prompter.input("Inv", &self.form.stock)?;
        self.form.price = self.prompter.input("Price/Cost", &self.form.price)?;
        self.form.max = self.prompter.input("Max", &self.form.max)?;
        self.form.min = self.prompter.input("Min", &self.form.min)?;
        let label = self.form.source.label();
        let value = self.prompter.input(label, self.form.source.value())?;
        self.form.source = self.form.source.with_value(value);
        Ok(())
    }

    /// `Ok(false)` when the form was rejected and stays open.
    fn save(&mut self) -> Result<bool> {
        let result = match self.mode {
            PartMode::Add(id) => commands::create_part(self.inventory, id, &self.form).map(|_| ()),
            PartMode::Modify { index, .. } => {
                commands::update_part(self.inventory, index, &self.form).map(|_| ())
            }
        };
        let Err(err) = result else {
            return Ok(true);
        };

        let header = if self.is_add() {
            "Error Adding Part"
        } else {
            "Error Modifying Part"
        };
        let alert = Alert::from_error(header, &err);
        self.prompter.alert(&alert)?;
        Ok(false)
    }

    fn confirm_cancel(&mut self) -> Result<bool> {
        let question = if self.is_add() {
            Alert::confirmation("Are you sure you want to cancel adding a new part?")
        } else {
            Alert::confirmation("Are you sure you want to cancel modifying the part?")
        };
        self.prompter.confirm(&question)
    }
}
