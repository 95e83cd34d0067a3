use crate::core::error::AppError;
use crate::core::pipeline::operation::Operation;
use crate::core::pipeline::schema::ColumnSpec;
use crate::core::table::{col, Table};

/// Derives a date-typed column from the string content of `field`.
///
/// Cells that fail to parse with the engine's default format become null in
/// the output column; parse failures never abort the pipeline.
pub struct DateOperation;

impl Operation for DateOperation {
    fn name(&self) -> &'static str {
        "date"
    }

    fn validate_spec(&self, spec: &ColumnSpec) -> Result<(), AppError> {
        spec.field()?;
        Ok(())
    }

    fn apply(&self, table: &Table, spec: &ColumnSpec) -> Result<Table, AppError> {
        let field = spec.field()?;
        let cells = col(field).to_date().eval(table)?;
        Ok(table.with_column(&spec.name, cells)?)
    }
}
