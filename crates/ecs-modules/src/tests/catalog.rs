use crate::{FieldKind, catalog, find_module, find_simulator};

use googletest::prelude::*;

#[test]
fn given_catalog_when_listed_then_five_modules_in_syllabus_order() {
    let ids: Vec<String> = catalog().iter().map(|m| m.id.to_string()).collect();

    assert_that!(
        ids,
        elements_are![
            eq("module1"),
            eq("module2"),
            eq("module3"),
            eq("module4"),
            eq("module5")
        ]
    );
}

#[test]
fn given_each_module_when_inspected_then_content_complete() {
    for module in catalog() {
        assert_that!(module.hours, eq(18));
        assert_that!(module.topics.len(), eq(4));
        assert_that!(module.definitions.len(), eq(6));
        assert_that!(module.simulators.len(), eq(2));
        for simulator in module.simulators {
            assert_that!(simulator.module_id, eq(module.id));
            assert_that!(simulator.fields.is_empty(), eq(false));
        }
    }
}

#[test]
fn given_known_ids_when_found_then_simulator_returned() {
    let cases = [
        ("module1", "framework"),
        ("module1", "marketplace"),
        ("module2", "etailing"),
        ("module2", "b2b"),
        ("module3", "security"),
        ("module3", "threats"),
        ("module4", "payment"),
        ("module4", "micropayment"),
        ("module5", "mcommerce"),
        ("module5", "compliance"),
    ];

    for (module, simulator) in cases {
        let found = find_simulator(module, simulator);
        assert_that!(found.map(|s| s.id), some(eq(simulator)));
    }
}

#[test]
fn given_unknown_ids_when_found_then_none() {
    assert_that!(find_module("module6"), none());
    assert_that!(find_simulator("module1", "payment"), none());
    assert_that!(find_simulator("nope", "framework"), none());
}

#[test]
fn given_module_titles_when_read_then_roman_numbered() {
    let titles: Vec<String> = catalog().iter().map(|m| m.title.to_string()).collect();

    assert_that!(
        titles,
        elements_are![
            eq("Module I: Introduction to E-Commerce"),
            eq("Module II: E-Retailing & B2B"),
            starts_with("Module III:"),
            eq("Module IV: Electronic Payment Systems"),
            eq("Module V: Mobile Commerce")
        ]
    );
}

#[test]
fn given_choice_field_when_looked_up_then_options_listed() {
    let payment = find_simulator("module4", "payment").unwrap();

    let field = payment.field("currency").unwrap();

    assert_that!(field.kind, eq(FieldKind::Choice(&["INR", "USD", "EUR"])));
    assert_that!(payment.field("missing"), none());
}

#[test]
fn given_module_when_serialized_then_fields_described_without_formula() {
    let module = find_module("module4").unwrap();

    let json = serde_json::to_value(module).unwrap();

    let simulator = &json["simulators"][0];
    assert_that!(simulator["id"], eq(&serde_json::json!("payment")));
    assert_that!(simulator.get("formula"), none());
    assert_that!(
        simulator["fields"][0],
        eq(&serde_json::json!({
            "key": "paymentMethod",
            "label": "Payment Method",
            "kind": {
                "type": "choice",
                "options": ["Credit Card", "Smart Card", "E-Check", "Digital Wallet"]
            }
        }))
    );
    assert_that!(
        simulator["fields"][1]["kind"],
        eq(&serde_json::json!({ "type": "decimal" }))
    );
}
