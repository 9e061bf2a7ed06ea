use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    NoSuchTable(#[from] NoSuchTableError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error(transparent)]
    ResultShape(#[from] ResultShapeError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unexpected database format `{path}`; expected `catalog` or `catalog/schema`")]
    InvalidDatabasePath { path: String },
    #[error("invalid resource locator `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("resource locator `{url}` has no host")]
    MissingHost { url: String },
    #[error("invalid percent-encoding in `{input}`: {source}")]
    InvalidPercentEncoding {
        input: String,
        #[source]
        source: std::str::Utf8Error,
    },
    #[error("invalid port `{value}` in connection parameters")]
    InvalidPort { value: String },
}

/// Normalized "object not found" signal, raised whatever the engine's own
/// wording for a missing table was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no such table: {table}")]
pub struct NoSuchTableError {
    pub table: String,
}

impl NoSuchTableError {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }
}

/// The black-box client's generic failure. Carried through this layer untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("engine error: {payload}")]
pub struct EngineError {
    pub payload: ErrorPayload,
}

impl EngineError {
    pub fn query(failure: QueryFailure) -> Self {
        Self {
            payload: ErrorPayload::Query(failure),
        }
    }

    pub fn text(message: impl Into<String>) -> Self {
        Self {
            payload: ErrorPayload::Text(message.into()),
        }
    }

    #[must_use]
    pub fn failure(&self) -> Option<&QueryFailure> {
        match &self.payload {
            ErrorPayload::Query(failure) => Some(failure),
            ErrorPayload::Text(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorPayload {
    Query(QueryFailure),
    Text(String),
}

impl fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query(failure) => fmt::Display::fmt(failure, f),
            Self::Text(message) => f.write_str(message),
        }
    }
}

/// Structured error body reported by the engine for a failed query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryFailure {
    pub message: Option<String>,
    pub error_name: Option<String>,
    pub error_code: Option<i64>,
    pub error_type: Option<String>,
}

impl QueryFailure {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }
}

impl fmt::Display for QueryFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = self.message.as_deref().unwrap_or("<no message>");
        match (&self.error_name, self.error_code) {
            (Some(name), Some(code)) => write!(f, "{message} ({name}, code={code})"),
            (Some(name), None) => write!(f, "{message} ({name})"),
            (None, Some(code)) => write!(f, "{message} (code={code})"),
            (None, None) => f.write_str(message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("expression `{name}` is not supported by dialect `{dialect}`")]
    UnsupportedExtension { name: String, dialect: String },
    #[error("expression `{name}` expects {expected} argument(s), got {actual}")]
    InvalidExtensionArity {
        name: String,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResultShapeError {
    #[error("missing column `{column}` in result of `{sql}`")]
    MissingColumn { sql: String, column: String },
    #[error("column `{column}` in result of `{sql}` is not a {expected}")]
    UnexpectedValue {
        sql: String,
        column: String,
        expected: &'static str,
    },
}

/// Emitted when introspection meets a column type it cannot map. Never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedTypeWarning {
    pub column: String,
    pub raw_type: String,
}

impl fmt::Display for UnrecognizedTypeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "did not recognize type `{}` of column `{}`",
            self.raw_type, self.column
        )
    }
}
