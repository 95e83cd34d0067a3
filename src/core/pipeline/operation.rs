use crate::core::error::AppError;
use crate::core::pipeline::schema::ColumnSpec;
use crate::core::table::Table;
use crate::core::types::ErrorCategory;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use tracing::warn;

/// Partition a registered operation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Schema,
    Column,
    Validation,
}

impl OpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpKind::Schema => "schema",
            OpKind::Column => "column",
            OpKind::Validation => "validation",
        }
    }
}

impl std::fmt::Display for OpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OpKind {
    type Err = AppError;

    /// Kind strings come from configuration; anything outside the three
    /// partitions is an explicit failure, never a silent drop.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "schema" => Ok(OpKind::Schema),
            "column" => Ok(OpKind::Column),
            "validation" => Ok(OpKind::Validation),
            other => Err(AppError::new(
                ErrorCategory::ValidationError,
                format!(
                    "unrecognized operation kind '{}' (expected schema, column, or validation)",
                    other
                ),
            )
            .with_code("TP-KIND-001")),
        }
    }
}

/// Trait implemented by every registered table operation.
///
/// Operations take an immutable table plus the spec that selected them and
/// return a new table; they never mutate their input.
pub trait Operation: Send + Sync + 'static {
    /// Operation name used in pipeline documents.
    fn name(&self) -> &'static str;

    /// Validate a spec ahead of application.
    fn validate_spec(&self, spec: &ColumnSpec) -> Result<(), AppError>;

    /// Apply the operation to `table` as described by `spec`.
    fn apply(&self, table: &Table, spec: &ColumnSpec) -> Result<Table, AppError>;
}

/// Builder used to register operations before any application runs.
pub struct OperationRegistryBuilder {
    partitions: HashMap<OpKind, HashMap<String, Arc<dyn Operation>>>,
}

impl Default for OperationRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationRegistryBuilder {
    pub fn new() -> Self {
        Self {
            partitions: HashMap::new(),
        }
    }

    /// Register an operation under its name within the `kind` partition.
    ///
    /// Re-registering under an occupied (kind, name) pair replaces the
    /// earlier entry; the replacement is logged but not an error.
    pub fn register<T: Operation>(&mut self, kind: OpKind, operation: T) -> &mut Self {
        let name = operation.name();
        let partition = self.partitions.entry(kind).or_default();
        if partition
            .insert(name.to_string(), Arc::new(operation))
            .is_some()
        {
            warn!(kind = %kind, op = name, "replacing previously registered operation");
        }
        self
    }

    pub fn build(self) -> OperationRegistry {
        OperationRegistry {
            inner: Arc::new(self.partitions),
        }
    }
}

/// Immutable registry available during pipeline application.
#[derive(Clone)]
pub struct OperationRegistry {
    inner: Arc<HashMap<OpKind, HashMap<String, Arc<dyn Operation>>>>,
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationRegistry {
    pub fn new() -> Self {
        OperationRegistryBuilder::new().build()
    }

    pub fn builder() -> OperationRegistryBuilder {
        OperationRegistryBuilder::new()
    }

    pub fn get(&self, kind: OpKind, name: &str) -> Option<Arc<dyn Operation>> {
        self.inner.get(&kind).and_then(|map| map.get(name)).cloned()
    }

    /// Look up a column operation by name.
    pub fn column_op(&self, name: &str) -> Option<Arc<dyn Operation>> {
        self.get(OpKind::Column, name)
    }
}
