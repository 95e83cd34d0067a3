use std::fs;
use tabpipe::core::pipeline::{builtin_registry, parse_pipeline, validate_pipeline};
use tempfile::NamedTempFile;

fn write_pipeline(yaml: &str) -> NamedTempFile {
    let file = NamedTempFile::new().expect("temp file");
    fs::write(file.path(), yaml).expect("write pipeline");
    file
}

#[test]
fn parses_a_complete_document() {
    let pipeline = r#"
version: "1.0"
metadata:
  name: demo
  description: date plus currency normalization
columns:
  - op: date
    name: day
    field: ts
  - op: normalize_currency
    name: usd_amount
    field: amount
    params:
      currency_field: currency
"#;
    let file = write_pipeline(pipeline);
    let doc = parse_pipeline(file.path()).expect("parse");

    assert_eq!(doc.columns.len(), 2);
    assert_eq!(doc.columns[0].op, "date");
    assert_eq!(doc.columns[0].field.as_deref(), Some("ts"));
    assert_eq!(
        doc.columns[1].params["currency_field"],
        serde_json::json!("currency")
    );
    validate_pipeline(&doc, &builtin_registry()).expect("valid");
}

#[test]
fn missing_params_defaults_to_an_empty_mapping() {
    let pipeline = r#"
version: "1.0"
columns:
  - op: date
    name: day
    field: ts
"#;
    let file = write_pipeline(pipeline);
    let doc = parse_pipeline(file.path()).expect("parse");
    assert!(doc.columns[0].params.as_object().expect("object").is_empty());
}

#[test]
fn unsupported_version_is_rejected() {
    let pipeline = r#"
version: "3.1"
columns: []
"#;
    let file = write_pipeline(pipeline);
    let err = parse_pipeline(file.path()).expect_err("version gate");
    assert_eq!(err.code, "TP-DOC-001");
    assert!(err.message.contains("3.1"));
}

#[test]
fn malformed_yaml_is_rejected_with_document_code() {
    let file = write_pipeline("version: [unclosed");
    let err = parse_pipeline(file.path()).expect_err("bad yaml");
    assert_eq!(err.code, "TP-DOC-002");
}

#[test]
fn load_time_validation_catches_unknown_ops() {
    let pipeline = r#"
version: "1.0"
columns:
  - op: uppercase
    name: shouting
    field: label
"#;
    let file = write_pipeline(pipeline);
    let doc = parse_pipeline(file.path()).expect("parse");
    let err = validate_pipeline(&doc, &builtin_registry()).expect_err("unknown op");
    assert_eq!(err.code, "TP-OP-001");
    assert!(err.message.contains("uppercase"));
}

#[test]
fn load_time_validation_catches_missing_spec_keys() {
    let pipeline = r#"
version: "1.0"
columns:
  - op: normalize_currency
    name: usd_amount
    field: amount
"#;
    let file = write_pipeline(pipeline);
    let doc = parse_pipeline(file.path()).expect("parse");
    let err = validate_pipeline(&doc, &builtin_registry()).expect_err("missing params");
    assert_eq!(err.code, "TP-SPEC-002");
}
