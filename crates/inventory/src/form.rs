//! Raw part form values and their parsing.

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, PartId, Price, StockLevels};

use crate::part::{MachineId, Part, PartSource};
use crate::validation::{parse_machine_id, validate_part};

/// The variant-dependent form field, still unparsed.
///
/// The in-house payload stays a string so that a bad machine id is reported
/// as a rule violation rather than as malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SourceField {
    InHouse(String),
    Outsourced(String),
}

impl Default for SourceField {
    fn default() -> Self {
        SourceField::InHouse(String::new())
    }
}

impl SourceField {
    pub fn value(&self) -> &str {
        match self {
            SourceField::InHouse(v) | SourceField::Outsourced(v) => v,
        }
    }

    /// Field caption for the current variant.
    pub fn label(&self) -> &'static str {
        match self {
            SourceField::InHouse(_) => "Machine ID",
            SourceField::Outsourced(_) => "Company Name",
        }
    }

    pub fn is_outsourced(&self) -> bool {
        matches!(self, SourceField::Outsourced(_))
    }

    /// Switch variant. The entered value is discarded.
    pub fn toggled(&self) -> Self {
        match self {
            SourceField::InHouse(_) => SourceField::Outsourced(String::new()),
            SourceField::Outsourced(_) => SourceField::InHouse(String::new()),
        }
    }

    pub fn with_value(&self, value: impl Into<String>) -> Self {
        match self {
            SourceField::InHouse(_) => SourceField::InHouse(value.into()),
            SourceField::Outsourced(_) => SourceField::Outsourced(value.into()),
        }
    }
}

impl From<&PartSource> for SourceField {
    fn from(value: &PartSource) -> Self {
        match value {
            PartSource::InHouse { machine_id } => SourceField::InHouse(machine_id.to_string()),
            PartSource::Outsourced { company_name } => {
                SourceField::Outsourced(company_name.clone())
            }
        }
    }
}

/// Part form exactly as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartForm {
    pub name: String,
    pub stock: String,
    pub price: String,
    pub min: String,
    pub max: String,
    pub source: SourceField,
}

impl PartForm {
    /// Prefill a form from an existing part (modify screen).
    pub fn from_part(part: &Part) -> Self {
        Self {
            name: part.name().to_string(),
            stock: part.stock().to_string(),
            price: part.price().exact_text(),
            min: part.min().to_string(),
            max: part.max().to_string(),
            source: SourceField::from(part.source()),
        }
    }

    /// Parse the numeric fields.
    ///
    /// Fails with [`DomainError::MalformedInput`] when stock, price, min or
    /// max is blank or not a number.
    pub fn parse(&self) -> DomainResult<PartCandidate> {
        let levels = StockLevels::parse(&self.stock, &self.min, &self.max)?;
        let price = Price::parse(&self.price)?;
        Ok(PartCandidate {
            name: self.name.clone(),
            price,
            levels,
            source: self.source.clone(),
        })
    }
}

/// Parsed part values awaiting validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartCandidate {
    pub name: String,
    pub price: Price,
    pub levels: StockLevels,
    pub source: SourceField,
}

impl PartCandidate {
    /// Validate and, if every rule passes, assemble the part.
    pub fn build(self, id: PartId) -> DomainResult<Part> {
        let violations = validate_part(&self);
        if !violations.is_empty() {
            return Err(DomainError::ValidationFailed(violations));
        }

        let source = match self.source {
            SourceField::InHouse(raw) => {
                let raw = parse_machine_id(&raw).ok_or(DomainError::MalformedInput)?;
                PartSource::InHouse {
                    machine_id: MachineId::new(raw)?,
                }
            }
            SourceField::Outsourced(company_name) => PartSource::Outsourced {
                company_name: company_name.trim().to_string(),
            },
        };

        Ok(Part::new(id, self.name.trim(), self.price, self.levels, source))
    }
}
