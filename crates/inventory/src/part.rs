use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, PartId, Price, StockLevels};

/// Identifier of the machine an in-house part is produced on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MachineId(u32);

impl MachineId {
    /// Rejects negative values.
    pub fn new(raw: i64) -> DomainResult<Self> {
        if raw < 0 {
            return Err(DomainError::invariant("machine id cannot be negative"));
        }
        u32::try_from(raw)
            .map(Self)
            .map_err(|_| DomainError::invariant("machine id out of range"))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for MachineId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Where a part comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PartSource {
    /// Manufactured in-house on a specific machine.
    InHouse { machine_id: MachineId },
    /// Bought from an external supplier.
    Outsourced { company_name: String },
}

impl PartSource {
    pub fn label(&self) -> &'static str {
        match self {
            PartSource::InHouse { .. } => "In-House",
            PartSource::Outsourced { .. } => "Outsourced",
        }
    }
}

/// A purchasable component.
///
/// Immutable once built; the store replaces whole records on update.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Part {
    id: PartId,
    name: String,
    price: Price,
    levels: StockLevels,
    source: PartSource,
}

impl Part {
    /// Assemble a part from already-checked values.
    ///
    /// Business rules are enforced by [`crate::PartCandidate::build`]; this
    /// constructor only carries the type-level invariants.
    pub fn new(
        id: PartId,
        name: impl Into<String>,
        price: Price,
        levels: StockLevels,
        source: PartSource,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            levels,
            source,
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

    pub fn source(&self) -> &PartSource {
        &self.source
    }

    pub fn is_outsourced(&self) -> bool {
        matches!(self.source, PartSource::Outsourced { .. })
    }

    pub fn machine_id(&self) -> Option<MachineId> {
        match &self.source {
            PartSource::InHouse { machine_id } => Some(*machine_id),
            PartSource::Outsourced { .. } => None,
        }
    }

    pub fn company_name(&self) -> Option<&str> {
        match &self.source {
            PartSource::Outsourced { company_name } => Some(company_name),
            PartSource::InHouse { .. } => None,
        }
    }
}

impl Entity for Part {
    type Id = PartId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bolt() -> Part {
        Part::new(
            PartId::new(1),
            "Bolt",
            Price::from_cents(25),
            StockLevels::new(100, 10, 500),
            PartSource::InHouse {
                machine_id: MachineId::new(4).unwrap(),
            },
        )
    }

    #[test]
    fn machine_id_rejects_negative_values() {
        let err = MachineId::new(-1).unwrap_err();
        match err {
            DomainError::InvariantViolation(_) => {}
            _ => panic!("Expected InvariantViolation for negative machine id"),
        }
        assert_eq!(MachineId::new(0).unwrap().get(), 0);
    }

    #[test]
    fn variant_accessors_follow_source() {
        let part = bolt();
        assert!(!part.is_outsourced());
        assert_eq!(part.machine_id().map(|m| m.get()), Some(4));
        assert_eq!(part.company_name(), None);

        let bought = Part::new(
            PartId::new(2),
            "Gasket",
            Price::from_cents(80),
            StockLevels::new(3, 1, 9),
            PartSource::Outsourced {
                company_name: "Acme".to_string(),
            },
        );
        assert!(bought.is_outsourced());
        assert_eq!(bought.company_name(), Some("Acme"));
        assert_eq!(bought.source().label(), "Outsourced");
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(bolt(), bolt());
        let renamed = Part::new(
            PartId::new(1),
            "Bolt M6",
            Price::from_cents(25),
            StockLevels::new(100, 10, 500),
            bolt().source().clone(),
        );
        assert_ne!(bolt(), renamed);
    }

    #[test]
    fn source_serializes_as_tagged_union() {
        let json = serde_json::to_value(bolt().source()).unwrap();
        assert_eq!(json["kind"], "in_house");
        assert_eq!(json["machine_id"], 4);
    }
}
