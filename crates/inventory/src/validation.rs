//! Part validation rules.

use stockroom_core::{Violation, Violations, check_common};

use crate::form::{PartCandidate, SourceField};

/// Every rule a part must satisfy. Empty result means the part is valid.
///
/// Runs the shared name/stock/price/bounds rules, then the rule for the
/// variant-specific field.
pub fn validate_part(candidate: &PartCandidate) -> Violations {
    let mut violations = check_common(&candidate.name, candidate.price, candidate.levels);

    match &candidate.source {
        SourceField::Outsourced(company_name) => {
            violations.check(company_name.trim().is_empty(), Violation::CompanyNameBlank);
        }
        SourceField::InHouse(raw) => match parse_machine_id(raw) {
            None => violations.push(Violation::MachineIdInvalid),
            Some(id) => violations.check(id <= 0, Violation::MachineIdNotPositive),
        },
    }

    violations
}

/// Machine ids are 32-bit signed integers; anything outside that range is
/// as invalid as non-numeric text.
pub(crate) fn parse_machine_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i32>().ok().map(i64::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::{Price, StockLevels};

    fn candidate(stock: i64, min: i64, max: i64, cents: i64, source: SourceField) -> PartCandidate {
        PartCandidate {
            name: "Widget".to_string(),
            price: Price::from_cents(cents),
            levels: StockLevels::new(stock, min, max),
            source,
        }
    }

    #[test]
    fn widget_scenario_is_valid() {
        let c = candidate(10, 5, 20, 250, SourceField::InHouse("3".to_string()));
        assert!(validate_part(&c).is_empty());
    }

    #[test]
    fn blank_company_name_is_reported() {
        let c = candidate(10, 5, 20, 250, SourceField::Outsourced("   ".to_string()));
        assert_eq!(validate_part(&c).as_slice(), &[Violation::CompanyNameBlank]);
    }

    #[test]
    fn machine_id_must_be_positive() {
        let zero = candidate(10, 5, 20, 250, SourceField::InHouse("0".to_string()));
        assert_eq!(validate_part(&zero).as_slice(), &[Violation::MachineIdNotPositive]);

        let negative = candidate(10, 5, 20, 250, SourceField::InHouse("-7".to_string()));
        assert_eq!(
            validate_part(&negative).as_slice(),
            &[Violation::MachineIdNotPositive]
        );
    }

    #[test]
    fn blank_machine_id_is_invalid() {
        let c = candidate(10, 5, 20, 250, SourceField::InHouse(String::new()));
        assert_eq!(validate_part(&c).as_slice(), &[Violation::MachineIdInvalid]);
    }

    #[test]
    fn out_of_range_machine_id_is_invalid() {
        for raw in ["4294967296", "2147483648", "-2147483649"] {
            let c = candidate(10, 5, 20, 250, SourceField::InHouse(raw.to_string()));
            assert_eq!(
                validate_part(&c).as_slice(),
                &[Violation::MachineIdInvalid],
                "{raw}"
            );
        }
        let largest = candidate(10, 5, 20, 250, SourceField::InHouse("2147483647".to_string()));
        assert!(validate_part(&largest).is_empty());
    }

    #[test]
    fn numeric_and_source_failures_accumulate() {
        let c = candidate(30, 5, 20, 0, SourceField::Outsourced(String::new()));
        assert_eq!(
            validate_part(&c).as_slice(),
            &[
                Violation::PriceNotPositive,
                Violation::StockOutOfRange,
                Violation::CompanyNameBlank,
            ]
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn source_strategy() -> impl Strategy<Value = SourceField> {
            prop_oneof![
                (1i64..100_000).prop_map(|id| SourceField::InHouse(id.to_string())),
                "[A-Za-z][A-Za-z ]{0,20}".prop_map(SourceField::Outsourced),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: well-formed parts produce no violations.
            #[test]
            fn well_formed_parts_pass(
                min in 0i64..500,
                span in 0i64..500,
                pick in 0i64..500,
                cents in 1i64..1_000_000,
                source in source_strategy(),
            ) {
                let max = min + span + 1;
                let stock = (min + pick % (span + 2)).max(1);
                prop_assume!(stock <= max);
                let c = candidate(stock, min, max, cents, source);
                prop_assert!(validate_part(&c).is_empty());
            }

            /// Property: zero stock is reported whatever else is wrong.
            #[test]
            fn zero_stock_is_always_reported(
                min in -50i64..50,
                max in -50i64..50,
                cents in -500i64..500,
                source in source_strategy(),
            ) {
                let c = candidate(0, min, max, cents, source);
                prop_assert!(validate_part(&c).contains(Violation::StockBelowOne));
            }
        }
    }
}
