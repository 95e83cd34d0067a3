use crate::core::error::AppError;
use crate::core::pipeline::operation::{OpKind, OperationRegistry};
use crate::core::types::ErrorCategory;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

const SUPPORTED_VERSION: &str = "1.0";

fn default_params_value() -> Value {
    Value::Object(Map::new())
}

/// Root document for a column pipeline definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineDocument {
    pub version: String,
    #[serde(default)]
    pub metadata: Option<PipelineMetadata>,
    pub columns: Vec<ColumnSpec>,
}

/// Metadata embedded with a pipeline document.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineMetadata {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// One transformation step: the operation name, the output column, and
/// whatever parameters the chosen operation interprets.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ColumnSpec {
    pub op: String,
    pub name: String,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default = "default_params_value")]
    pub params: Value,
}

impl ColumnSpec {
    pub fn new<O: Into<String>, N: Into<String>>(op: O, name: N) -> Self {
        Self {
            op: op.into(),
            name: name.into(),
            field: None,
            params: default_params_value(),
        }
    }

    pub fn with_field<F: Into<String>>(mut self, field: F) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_params(mut self, params: Value) -> Self {
        self.params = params;
        self
    }

    /// The input column this spec reads from; an error when absent.
    pub fn field(&self) -> Result<&str, AppError> {
        self.field.as_deref().ok_or_else(|| {
            AppError::new(
                ErrorCategory::ValidationError,
                format!("operation '{}' requires a 'field' key", self.op),
            )
            .with_code("TP-SPEC-001")
        })
    }
}

/// Parse a pipeline document from a YAML file.
pub fn parse_pipeline(path: &Path) -> Result<PipelineDocument, AppError> {
    let text = fs::read_to_string(path).map_err(|err| {
        AppError::new(
            ErrorCategory::IoError,
            format!("failed to read pipeline {}: {}", path.display(), err),
        )
        .with_code("TP-DOC-002")
    })?;
    let doc: PipelineDocument = serde_yaml::from_str(&text).map_err(|err| {
        AppError::new(
            ErrorCategory::SerializationError,
            format!("invalid pipeline document {}: {}", path.display(), err),
        )
        .with_code("TP-DOC-002")
    })?;
    if doc.version != SUPPORTED_VERSION {
        return Err(AppError::new(
            ErrorCategory::ValidationError,
            format!(
                "unsupported pipeline version '{}' (expected '{}')",
                doc.version, SUPPORTED_VERSION
            ),
        )
        .with_code("TP-DOC-001"));
    }
    Ok(doc)
}

/// Resolve and validate every spec in the document against `registry`.
///
/// Runs at configuration-load time so malformed specs fail before any table
/// is touched. `apply_columns` still guards against unknown ops on its own.
pub fn validate_pipeline(
    doc: &PipelineDocument,
    registry: &OperationRegistry,
) -> Result<(), AppError> {
    for spec in &doc.columns {
        let operation = registry.get(OpKind::Column, &spec.op).ok_or_else(|| {
            AppError::new(
                ErrorCategory::ValidationError,
                format!("unknown column operation '{}'", spec.op),
            )
            .with_code("TP-OP-001")
        })?;
        operation.validate_spec(spec)?;
    }
    Ok(())
}
