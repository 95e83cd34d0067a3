//! Row-wise column expressions.
//!
//! This is the whole expression surface the pipeline operations need:
//! column references, literals, equality, multiplication, when/otherwise
//! chains, and default-format date parsing. Nulls propagate through
//! arithmetic and comparisons the way SQL engines treat them.

use crate::core::table::{Table, TableError, Value};
use chrono::NaiveDate;

/// Default parse format for [`Expr::ToDate`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Column(String),
    Literal(Value),
    Eq(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    When {
        branches: Vec<(Expr, Expr)>,
        otherwise: Box<Expr>,
    },
    ToDate(Box<Expr>),
}

/// Reference a column by name.
pub fn col<S: Into<String>>(name: S) -> Expr {
    Expr::Column(name.into())
}

/// A literal value broadcast over every row.
pub fn lit<V: Into<Value>>(value: V) -> Expr {
    Expr::Literal(value.into())
}

/// Start a when/otherwise chain with a first branch.
pub fn when(condition: Expr, then: Expr) -> WhenChain {
    WhenChain {
        branches: vec![(condition, then)],
    }
}

/// Partially-built when/otherwise chain; finish it with [`WhenChain::otherwise`].
#[derive(Debug, Clone)]
pub struct WhenChain {
    branches: Vec<(Expr, Expr)>,
}

impl WhenChain {
    pub fn when(mut self, condition: Expr, then: Expr) -> Self {
        self.branches.push((condition, then));
        self
    }

    pub fn otherwise(self, fallback: Expr) -> Expr {
        Expr::When {
            branches: self.branches,
            otherwise: Box::new(fallback),
        }
    }
}

impl Expr {
    pub fn eq(self, other: Expr) -> Expr {
        Expr::Eq(Box::new(self), Box::new(other))
    }

    pub fn mul(self, other: Expr) -> Expr {
        Expr::Mul(Box::new(self), Box::new(other))
    }

    pub fn to_date(self) -> Expr {
        Expr::ToDate(Box::new(self))
    }

    /// Evaluate the expression over every row of `table`.
    pub fn eval(&self, table: &Table) -> Result<Vec<Value>, TableError> {
        let rows = table.row_count();
        match self {
            Expr::Column(name) => Ok(table.column(name)?.to_vec()),
            Expr::Literal(value) => Ok(vec![value.clone(); rows]),
            Expr::Eq(left, right) => {
                let left = left.eval(table)?;
                let right = right.eval(table)?;
                Ok(left
                    .iter()
                    .zip(right.iter())
                    .map(|(a, b)| match (a, b) {
                        (Value::Null, _) | (_, Value::Null) => Value::Null,
                        _ => Value::Bool(values_equal(a, b)),
                    })
                    .collect())
            }
            Expr::Mul(left, right) => {
                let left = left.eval(table)?;
                let right = right.eval(table)?;
                left.iter()
                    .zip(right.iter())
                    .map(|(a, b)| multiply(a, b))
                    .collect()
            }
            Expr::When {
                branches,
                otherwise,
            } => {
                let conditions: Vec<Vec<Value>> = branches
                    .iter()
                    .map(|(condition, _)| condition.eval(table))
                    .collect::<Result<_, _>>()?;
                let outcomes: Vec<Vec<Value>> = branches
                    .iter()
                    .map(|(_, then)| then.eval(table))
                    .collect::<Result<_, _>>()?;
                let fallback = otherwise.eval(table)?;
                let mut result = Vec::with_capacity(rows);
                for row in 0..rows {
                    let mut picked = None;
                    for (condition, outcome) in conditions.iter().zip(outcomes.iter()) {
                        match &condition[row] {
                            Value::Bool(true) => {
                                picked = Some(outcome[row].clone());
                                break;
                            }
                            // null and false conditions fall through to the
                            // next branch, SQL-style
                            Value::Bool(false) | Value::Null => {}
                            other => {
                                return Err(TableError::InvalidCondition(other.type_name()))
                            }
                        }
                    }
                    result.push(picked.unwrap_or_else(|| fallback[row].clone()));
                }
                Ok(result)
            }
            Expr::ToDate(inner) => {
                let cells = inner.eval(table)?;
                Ok(cells.into_iter().map(parse_date).collect())
            }
        }
    }
}

fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Int(x), Value::Float(y)) | (Value::Float(y), Value::Int(x)) => *x as f64 == *y,
        _ => a == b,
    }
}

fn multiply(a: &Value, b: &Value) -> Result<Value, TableError> {
    match (a, b) {
        (Value::Null, _) | (_, Value::Null) => Ok(Value::Null),
        (Value::Int(x), Value::Int(y)) => Ok(Value::Int(x * y)),
        (Value::Int(x), Value::Float(y)) | (Value::Float(y), Value::Int(x)) => {
            Ok(Value::Float(*x as f64 * y))
        }
        (Value::Float(x), Value::Float(y)) => Ok(Value::Float(x * y)),
        _ => Err(TableError::InvalidArithmetic(a.type_name(), b.type_name())),
    }
}

/// String cells parse with [`DATE_FORMAT`]; failures and non-string cells
/// become null rather than raising. Existing dates pass through.
fn parse_date(cell: Value) -> Value {
    match cell {
        Value::Date(date) => Value::Date(date),
        Value::Str(text) => NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
            .map(Value::Date)
            .unwrap_or(Value::Null),
        _ => Value::Null,
    }
}
