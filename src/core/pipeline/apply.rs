use crate::core::error::AppError;
use crate::core::pipeline::operation::{OpKind, OperationRegistry};
use crate::core::pipeline::schema::ColumnSpec;
use crate::core::table::Table;
use crate::core::types::ErrorCategory;
use tracing::{debug, info};

/// Apply an ordered sequence of column specs to a table.
///
/// Strict left-to-right fold: each step consumes the table produced by the
/// previous one. The first spec whose `op` is not registered aborts the
/// whole sequence; no partial result escapes.
pub fn apply_columns(
    registry: &OperationRegistry,
    table: Table,
    specs: &[ColumnSpec],
) -> Result<Table, AppError> {
    let mut current = table;
    for spec in specs {
        let operation = registry.get(OpKind::Column, &spec.op).ok_or_else(|| {
            AppError::new(
                ErrorCategory::ValidationError,
                format!("unknown column operation '{}'", spec.op),
            )
            .with_code("TP-OP-001")
        })?;
        debug!(op = %spec.op, output = %spec.name, "applying column operation");
        current = operation.apply(&current, spec)?;
    }
    info!(steps = specs.len(), "column pipeline applied");
    Ok(current)
}
