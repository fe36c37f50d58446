use crate::models::number_format::fixed;
use crate::tests::run;
use crate::{FieldKind, SimulationError, catalog};

use proptest::prelude::*;

fn privacy_level() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["Basic", "Standard", "Advanced", "Premium"])
}

// =========================================================================
// Property-Based Tests - Number rendering
// =========================================================================

proptest! {
    #[test]
    fn given_finite_value_when_fixed_then_digits_and_error_bounded(
        value in -1.0e9f64..1.0e9,
        digits in 0usize..6,
    ) {
        let text = fixed(value, digits);

        let fraction = text.split_once('.').map_or("", |(_, f)| f);
        prop_assert_eq!(fraction.len(), digits);

        let parsed: f64 = text.parse().unwrap();
        let half_unit = 0.5 * 10f64.powi(-(digits as i32));
        prop_assert!((parsed - value).abs() <= half_unit + value.abs() * 1e-12);
    }
}

// =========================================================================
// Property-Based Tests - Simulators
// =========================================================================

proptest! {
    #[test]
    fn given_any_compliance_inputs_when_run_then_score_within_bounds_and_band_consistent(
        privacy in privacy_level(),
        complaints in -1_000i64..1_000,
        hours in 0.0f64..500.0,
    ) {
        let complaints = complaints.to_string();
        let hours = hours.to_string();
        let outcome = run(
            "module5",
            "compliance",
            &[
                ("privacyLevel", privacy),
                ("complianceCost", "1000"),
                ("violationPenalty", "5000"),
                ("consumerComplaints", complaints.as_str()),
                ("resolutionTime", hours.as_str()),
            ],
        )
        .unwrap();

        let score: f64 = outcome.metric("complianceScore").unwrap().parse().unwrap();
        prop_assert!((0.0..=100.0).contains(&score));

        let expected_band = if score >= 85.0 {
            "Low Risk"
        } else if score >= 65.0 {
            "Medium Risk"
        } else {
            "High Risk"
        };
        prop_assert_eq!(outcome.metric("riskLevel"), Some(expected_band));
    }

    #[test]
    fn given_unlisted_choice_when_any_simulator_run_then_unknown_option(
        bogus in "[a-z]{1,10}",
    ) {
        for module in catalog() {
            for simulator in module.simulators {
                let Some(choice) = simulator
                    .fields
                    .iter()
                    .find(|f| matches!(f.kind, FieldKind::Choice(_)))
                else {
                    continue;
                };

                let mut inputs: Vec<(&str, &str)> = simulator
                    .fields
                    .iter()
                    .map(|f| match f.kind {
                        FieldKind::Choice(options) => (f.key, options[0]),
                        _ => (f.key, "1"),
                    })
                    .collect();
                for input in inputs.iter_mut() {
                    if input.0 == choice.key {
                        input.1 = bogus.as_str();
                    }
                }

                let err = run(module.id, simulator.id, &inputs).unwrap_err();

                prop_assert!(
                    matches!(err, SimulationError::UnknownOption { .. }),
                    "expected UnknownOption"
                );
                prop_assert_eq!(err.field(), choice.key);
            }
        }
    }
}
