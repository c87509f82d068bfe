//! Linear search over inventory records by id or name.

use stockroom_core::Entity;

/// Which hit wins when several records match a search term.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LookupPolicy {
    /// Stop at the first matching record.
    #[default]
    FirstMatch,
    /// Scan everything and keep the last matching record.
    LastMatch,
}

/// How names are compared.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NameMatch {
    CaseInsensitive,
    Exact,
}

/// A parsed search box value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchTerm {
    /// The term is an integer: match on id.
    Id(i64),
    /// Anything else: match on name.
    Name(String),
}

impl SearchTerm {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<i64>() {
            Ok(id) => SearchTerm::Id(id),
            Err(_) => SearchTerm::Name(raw.to_string()),
        }
    }

    pub fn matches<T: Entity>(&self, item: &T, name_match: NameMatch) -> bool {
        match self {
            SearchTerm::Id(id) => {
                let raw: u32 = (*item.id()).into();
                i64::from(raw) == *id
            }
            SearchTerm::Name(name) => match name_match {
                NameMatch::Exact => item.name() == name,
                NameMatch::CaseInsensitive => item.name().to_lowercase() == name.to_lowercase(),
            },
        }
    }
}

/// Position of the matching record, or `None` when nothing matches.
pub fn find<T: Entity>(
    items: &[T],
    term: &SearchTerm,
    name_match: NameMatch,
    policy: LookupPolicy,
) -> Option<usize> {
    let mut hits = items
        .iter()
        .enumerate()
        .filter(|(_, item)| term.matches(*item, name_match))
        .map(|(index, _)| index);

    match policy {
        LookupPolicy::FirstMatch => hits.next(),
        LookupPolicy::LastMatch => hits.last(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::{PartId, Price, StockLevels};
    use stockroom_inventory::{MachineId, Part, PartSource};

    fn part(id: u32, name: &str) -> Part {
        Part::new(
            PartId::new(id),
            name,
            Price::from_cents(100),
            StockLevels::new(1, 1, 1),
            PartSource::InHouse {
                machine_id: MachineId::new(1).unwrap(),
            },
        )
    }

    #[test]
    fn integer_terms_match_ids() {
        assert_eq!(SearchTerm::parse(" 12 "), SearchTerm::Id(12));
        assert_eq!(SearchTerm::parse("-3"), SearchTerm::Id(-3));
        assert_eq!(SearchTerm::parse("Bolt 12"), SearchTerm::Name("Bolt 12".to_string()));
    }

    #[test]
    fn numeric_names_are_not_reachable_by_name() {
        let parts = [part(1, "42")];
        let term = SearchTerm::parse("42");
        assert_eq!(
            find(&parts, &term, NameMatch::CaseInsensitive, LookupPolicy::FirstMatch),
            None
        );
    }

    #[test]
    fn policy_picks_first_or_last_duplicate() {
        let parts = [part(1, "Bolt"), part(2, "Nut"), part(3, "bolt")];
        let term = SearchTerm::parse("BOLT");
        assert_eq!(
            find(&parts, &term, NameMatch::CaseInsensitive, LookupPolicy::FirstMatch),
            Some(0)
        );
        assert_eq!(
            find(&parts, &term, NameMatch::CaseInsensitive, LookupPolicy::LastMatch),
            Some(2)
        );
        assert_eq!(
            find(&parts, &term, NameMatch::Exact, LookupPolicy::FirstMatch),
            None
        );
    }
}
