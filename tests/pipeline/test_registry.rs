use tabpipe::core::error::AppError;
use tabpipe::core::pipeline::{
    builtin_registry, ColumnSpec, OpKind, Operation, OperationRegistry,
};
use tabpipe::core::table::{Table, Value};

struct ConstantOperation {
    name: &'static str,
    value: i64,
}

impl Operation for ConstantOperation {
    fn name(&self) -> &'static str {
        self.name
    }

    fn validate_spec(&self, _spec: &ColumnSpec) -> Result<(), AppError> {
        Ok(())
    }

    fn apply(&self, table: &Table, spec: &ColumnSpec) -> Result<Table, AppError> {
        let cells = vec![Value::Int(self.value); table.row_count()];
        Ok(table.with_column(&spec.name, cells)?)
    }
}

#[test]
fn kind_strings_parse_into_the_three_partitions() {
    assert_eq!("schema".parse::<OpKind>().unwrap(), OpKind::Schema);
    assert_eq!("column".parse::<OpKind>().unwrap(), OpKind::Column);
    assert_eq!("validation".parse::<OpKind>().unwrap(), OpKind::Validation);
}

#[test]
fn unrecognized_kind_string_is_an_explicit_failure() {
    let err = "colunm".parse::<OpKind>().expect_err("typo");
    assert_eq!(err.code, "TP-KIND-001");
    assert!(err.message.contains("colunm"));
}

#[test]
fn second_registration_under_the_same_name_wins() {
    let mut builder = OperationRegistry::builder();
    builder
        .register(
            OpKind::Column,
            ConstantOperation {
                name: "constant",
                value: 1,
            },
        )
        .register(
            OpKind::Column,
            ConstantOperation {
                name: "constant",
                value: 2,
            },
        );
    let registry = builder.build();

    let table = Table::from_columns(vec![("id", vec![Value::Int(0)])]).expect("table");
    let spec = ColumnSpec::new("constant", "c");
    let op = registry.column_op("constant").expect("registered");
    let result = op.apply(&table, &spec).expect("apply");
    assert_eq!(result.column("c").unwrap(), &[Value::Int(2)]);
}

#[test]
fn partitions_do_not_leak_into_each_other() {
    let mut builder = OperationRegistry::builder();
    builder.register(
        OpKind::Validation,
        ConstantOperation {
            name: "audit",
            value: 1,
        },
    );
    let registry = builder.build();

    assert!(registry.get(OpKind::Validation, "audit").is_some());
    assert!(registry.column_op("audit").is_none());
    assert!(registry.get(OpKind::Schema, "audit").is_none());
}

#[test]
fn builtin_registry_exposes_the_shipped_column_ops() {
    let registry = builtin_registry();
    assert!(registry.column_op("date").is_some());
    assert!(registry.column_op("normalize_currency").is_some());
    assert!(registry.column_op("date_time").is_none());
}
