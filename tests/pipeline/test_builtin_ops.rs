use chrono::NaiveDate;
use serde_json::json;
use tabpipe::core::pipeline::{apply_columns, builtin_registry, ColumnSpec};
use tabpipe::core::table::{Table, Value};

fn currency_spec() -> ColumnSpec {
    ColumnSpec::new("normalize_currency", "usd_amount")
        .with_field("amount")
        .with_params(json!({ "currency_field": "currency" }))
}

#[test]
fn normalize_currency_applies_the_three_way_rate_table() {
    let table = Table::from_columns(vec![
        (
            "amount",
            vec![Value::Int(100), Value::Int(100), Value::Int(100)],
        ),
        (
            "currency",
            vec![Value::from("USD"), Value::from("EUR"), Value::from("GBP")],
        ),
    ])
    .expect("table");
    let result = apply_columns(&builtin_registry(), table, &[currency_spec()]).expect("apply");
    let cells = result.column("usd_amount").expect("column");

    assert_eq!(cells[0], Value::Int(100));
    match &cells[1] {
        Value::Float(v) => assert!((v - 110.0).abs() < 1e-9, "EUR rate: {}", v),
        other => panic!("expected float for EUR row, got {:?}", other),
    }
    // unmapped currency takes the fallback rate of 1
    assert_eq!(cells[2], Value::Int(100));
}

#[test]
fn normalize_currency_null_handling() {
    let table = Table::from_columns(vec![
        ("amount", vec![Value::Null, Value::Int(50)]),
        ("currency", vec![Value::from("EUR"), Value::Null]),
    ])
    .expect("table");
    let result = apply_columns(&builtin_registry(), table, &[currency_spec()]).expect("apply");
    let cells = result.column("usd_amount").expect("column");

    assert_eq!(cells[0], Value::Null);
    // null currency falls through every branch to the fallback rate
    assert_eq!(cells[1], Value::Int(50));
}

#[test]
fn normalize_currency_requires_currency_field_param() {
    let table = Table::from_columns(vec![("amount", vec![Value::Int(1)])]).expect("table");
    let spec = ColumnSpec::new("normalize_currency", "out").with_field("amount");
    let err = apply_columns(&builtin_registry(), table, &[spec]).expect_err("missing param");
    assert_eq!(err.code, "TP-SPEC-002");
}

#[test]
fn date_parses_valid_strings_into_equal_dates() {
    let table =
        Table::from_columns(vec![("ts", vec![Value::from("2024-03-01")])]).expect("table");
    let spec = ColumnSpec::new("date", "day").with_field("ts");
    let result = apply_columns(&builtin_registry(), table, &[spec]).expect("apply");
    assert_eq!(
        result.column("day").unwrap()[0],
        Value::Date(NaiveDate::from_ymd_opt(2024, 3, 1).expect("date"))
    );
}

#[test]
fn date_turns_unparsable_cells_into_null_without_failing() {
    let table = Table::from_columns(vec![(
        "ts",
        vec![
            Value::from("definitely not a date"),
            Value::from("2024-13-45"),
            Value::Null,
        ],
    )])
    .expect("table");
    let spec = ColumnSpec::new("date", "day").with_field("ts");
    let result = apply_columns(&builtin_registry(), table, &[spec]).expect("apply");
    assert_eq!(
        result.column("day").unwrap(),
        &[Value::Null, Value::Null, Value::Null]
    );
}

#[test]
fn date_requires_a_field_key() {
    let table = Table::from_columns(vec![("ts", vec![Value::from("2024-03-01")])]).expect("table");
    let spec = ColumnSpec::new("date", "day");
    let err = apply_columns(&builtin_registry(), table, &[spec]).expect_err("missing field");
    assert_eq!(err.code, "TP-SPEC-001");
    assert!(err.message.contains("date"));
}
