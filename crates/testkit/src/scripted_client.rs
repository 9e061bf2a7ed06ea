use std::{collections::VecDeque, sync::Arc};

use dialectql_core::{EngineError, QueryClient, QueryFailure, Row, RowCursor, Value};
use serde::Deserialize;

/// One canned answer, matched against the exact SQL text a dialect issues.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptedResponse {
    pub sql: String,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<Option<ScriptedValue>>>,
    #[serde(default)]
    pub error: Option<ScriptedError>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScriptedValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

/// Engine failure to raise instead of returning rows. A `text` payload is
/// unstructured; otherwise the structured fields are used.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScriptedError {
    pub at: FailurePoint,
    pub message: Option<String>,
    pub error_name: Option<String>,
    pub error_code: Option<i64>,
    pub error_type: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePoint {
    Execute,
    /// Raised on the first fetch, the way the engine reports missing tables.
    #[default]
    Fetch,
}

impl ScriptedError {
    #[must_use]
    pub fn to_engine_error(&self) -> EngineError {
        match &self.text {
            Some(text) => EngineError::text(text.clone()),
            None => EngineError::query(QueryFailure {
                message: self.message.clone(),
                error_name: self.error_name.clone(),
                error_code: self.error_code,
                error_type: self.error_type.clone(),
            }),
        }
    }
}

#[derive(Debug, Default)]
pub struct ScriptedClient {
    responses: Vec<ScriptedResponse>,
    executed_sql: Vec<String>,
}

impl ScriptedClient {
    pub fn new(responses: Vec<ScriptedResponse>) -> Self {
        Self {
            responses,
            executed_sql: Vec::new(),
        }
    }

    pub fn from_yaml(yaml: &str) -> serde_yaml::Result<Self> {
        serde_yaml::from_str(yaml).map(Self::new)
    }

    #[must_use]
    pub fn executed_sql(&self) -> &[String] {
        &self.executed_sql
    }
}

impl QueryClient for ScriptedClient {
    fn execute(&mut self, sql: &str) -> Result<Box<dyn RowCursor + '_>, EngineError> {
        self.executed_sql.push(sql.to_string());

        let Some(response) = self.responses.iter().find(|response| response.sql == sql) else {
            return Err(EngineError::text(format!(
                "no scripted response for `{sql}`"
            )));
        };

        let late_error = match &response.error {
            Some(error) if error.at == FailurePoint::Execute => {
                return Err(error.to_engine_error());
            }
            Some(error) => Some(error.to_engine_error()),
            None => None,
        };

        let columns: Arc<[String]> = response.columns.clone().into();
        let rows = response
            .rows
            .iter()
            .map(|values| {
                Row::new(
                    Arc::clone(&columns),
                    values.iter().map(to_value).collect(),
                )
            })
            .collect();

        Ok(Box::new(ScriptedCursor { rows, late_error }))
    }
}

struct ScriptedCursor {
    rows: VecDeque<Row>,
    late_error: Option<EngineError>,
}

impl RowCursor for ScriptedCursor {
    fn fetch(&mut self) -> Result<Option<Row>, EngineError> {
        if let Some(error) = self.late_error.take() {
            return Err(error);
        }
        Ok(self.rows.pop_front())
    }
}

fn to_value(value: &Option<ScriptedValue>) -> Value {
    match value {
        None => Value::Null,
        Some(ScriptedValue::Bool(value)) => Value::Bool(*value),
        Some(ScriptedValue::Integer(value)) => Value::Integer(*value),
        Some(ScriptedValue::Float(value)) => Value::Float(*value),
        Some(ScriptedValue::String(value)) => Value::String(value.clone()),
    }
}
