pub mod error;
pub mod pipeline;
pub mod table;
pub mod types;

pub use error::AppError;
pub use pipeline::{
    apply_columns, parse_pipeline, validate_pipeline, ColumnSpec, OpKind, Operation,
    OperationRegistry, OperationRegistryBuilder, PipelineDocument,
};
pub use table::{Table, TableError, Value};
pub use types::{ErrorCategory, ErrorSeverity};
