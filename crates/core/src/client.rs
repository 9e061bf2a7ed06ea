use std::sync::Arc;

use crate::{EngineError, ResultShapeError, Value};

/// The network driver this layer talks through: SQL text in, rows out.
///
/// Engines may report a failure either when the statement is submitted or only
/// once rows are fetched, so both steps return [`EngineError`].
pub trait QueryClient {
    fn execute(&mut self, sql: &str) -> Result<Box<dyn RowCursor + '_>, EngineError>;
}

pub trait RowCursor {
    /// Returns the next row, or `None` once the result is exhausted.
    fn fetch(&mut self) -> Result<Option<Row>, EngineError>;

    fn fetch_all(&mut self) -> Result<Vec<Row>, EngineError> {
        let mut rows = Vec::new();
        while let Some(row) = self.fetch()? {
            rows.push(row);
        }
        Ok(rows)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Arc<[String]>,
    values: Vec<Value>,
}

impl Row {
    pub fn new(columns: Arc<[String]>, values: Vec<Value>) -> Self {
        Self { columns, values }
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Value> {
        let index = self.columns.iter().position(|name| name == column)?;
        self.values.get(index)
    }

    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn string(&self, sql: &str, column: &str) -> Result<String, ResultShapeError> {
        match self.require(sql, column)? {
            Value::String(value) => Ok(value.clone()),
            _ => Err(unexpected_value(sql, column, "string")),
        }
    }

    pub fn optional_string(&self, column: &str) -> Option<String> {
        match self.get(column)? {
            Value::String(value) => Some(value.clone()),
            _ => None,
        }
    }

    pub fn bool(&self, sql: &str, column: &str) -> Result<bool, ResultShapeError> {
        match self.require(sql, column)? {
            Value::Bool(value) => Ok(*value),
            Value::String(value) if value.eq_ignore_ascii_case("true") => Ok(true),
            Value::String(value) if value.eq_ignore_ascii_case("false") => Ok(false),
            _ => Err(unexpected_value(sql, column, "boolean")),
        }
    }

    /// `Ok(None)` when the column is absent or null.
    pub fn optional_bool(&self, sql: &str, column: &str) -> Result<Option<bool>, ResultShapeError> {
        match self.get(column) {
            None | Some(Value::Null) => Ok(None),
            Some(_) => self.bool(sql, column).map(Some),
        }
    }

    fn require(&self, sql: &str, column: &str) -> Result<&Value, ResultShapeError> {
        self.get(column)
            .ok_or_else(|| ResultShapeError::MissingColumn {
                sql: sql.to_string(),
                column: column.to_string(),
            })
    }
}

fn unexpected_value(sql: &str, column: &str, expected: &'static str) -> ResultShapeError {
    ResultShapeError::UnexpectedValue {
        sql: sql.to_string(),
        column: column.to_string(),
        expected,
    }
}
