use crate::core::error::AppError;
use crate::core::pipeline::operation::Operation;
use crate::core::pipeline::schema::ColumnSpec;
use crate::core::table::{col, lit, when, Table};
use crate::core::types::ErrorCategory;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct NormalizeCurrencyParams {
    currency_field: String,
}

impl NormalizeCurrencyParams {
    fn from_spec(spec: &ColumnSpec) -> Result<Self, AppError> {
        serde_json::from_value(spec.params.clone()).map_err(|err| {
            AppError::new(
                ErrorCategory::ValidationError,
                format!("operation '{}' has invalid params: {}", spec.op, err),
            )
            .with_code("TP-SPEC-002")
        })
    }
}

/// Multiplies an amount column by a per-row rate keyed on a currency-code
/// column: USD at 1, EUR at 1.1, everything else falls back to 1.
///
/// The rate table is a worked example of a developer-supplied operation,
/// not real FX data; the three-way branch and its fallback are the contract.
pub struct NormalizeCurrencyOperation;

impl Operation for NormalizeCurrencyOperation {
    fn name(&self) -> &'static str {
        "normalize_currency"
    }

    fn validate_spec(&self, spec: &ColumnSpec) -> Result<(), AppError> {
        spec.field()?;
        NormalizeCurrencyParams::from_spec(spec)?;
        Ok(())
    }

    fn apply(&self, table: &Table, spec: &ColumnSpec) -> Result<Table, AppError> {
        let field = spec.field()?;
        let params = NormalizeCurrencyParams::from_spec(spec)?;
        let currency = || col(params.currency_field.as_str());
        let rate = when(currency().eq(lit("USD")), lit(1i64))
            .when(currency().eq(lit("EUR")), lit(1.1f64))
            .otherwise(lit(1i64));
        let cells = col(field).mul(rate).eval(table)?;
        Ok(table.with_column(&spec.name, cells)?)
    }
}
