//! Columnar JSON reading and writing for tables.
//!
//! File shape: `{"columns": [{"name": "...", "values": [...]}, ...]}` with
//! column order preserved. Dates serialize as ISO strings and come back as
//! strings; deriving date cells from them is the `date` operation's job.

use crate::core::error::AppError;
use crate::core::table::{Table, Value};
use crate::core::types::ErrorCategory;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
struct TableFile {
    columns: Vec<ColumnFile>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ColumnFile {
    name: String,
    values: Vec<Value>,
}

pub fn read_table_json(path: &Path) -> Result<Table, AppError> {
    let text = fs::read_to_string(path).map_err(|err| {
        AppError::new(
            ErrorCategory::IoError,
            format!("failed to read table file {}: {}", path.display(), err),
        )
        .with_code("TP-TABLE-IO-001")
    })?;
    let file: TableFile = serde_json::from_str(&text).map_err(|err| {
        AppError::new(
            ErrorCategory::SerializationError,
            format!("invalid table file {}: {}", path.display(), err),
        )
        .with_code("TP-TABLE-IO-002")
    })?;
    let table = Table::from_columns(
        file.columns
            .into_iter()
            .map(|column| (column.name, column.values)),
    )?;
    Ok(table)
}

pub fn write_table_json(path: &Path, table: &Table) -> Result<(), AppError> {
    let text = render_table_json(table)?;
    fs::write(path, text).map_err(|err| {
        AppError::new(
            ErrorCategory::IoError,
            format!("failed to write table file {}: {}", path.display(), err),
        )
        .with_code("TP-TABLE-IO-001")
    })
}

pub fn render_table_json(table: &Table) -> Result<String, AppError> {
    let file = TableFile {
        columns: table
            .column_names()
            .map(|name| {
                let values = table.column(name)?.to_vec();
                Ok(ColumnFile {
                    name: name.to_string(),
                    values,
                })
            })
            .collect::<Result<_, AppError>>()?,
    };
    Ok(serde_json::to_string_pretty(&file)?)
}
