//! Operation registry and column pipeline application.

pub mod apply;
pub mod operation;
pub mod ops;
pub mod schema;

pub use apply::apply_columns;
pub use operation::{OpKind, Operation, OperationRegistry, OperationRegistryBuilder};
pub use ops::{builtin_registry, register_builtins};
pub use schema::{parse_pipeline, validate_pipeline, ColumnSpec, PipelineDocument};
