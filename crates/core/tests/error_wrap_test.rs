use std::error::Error as StdError;

use dialectql_core::{
    CompileError, ConfigError, EngineError, Error, ErrorPayload, NoSuchTableError, QueryFailure,
    Result, ResultShapeError, UnrecognizedTypeWarning,
};

#[test]
fn top_level_error_wraps_each_category_with_from() {
    let config: Error = ConfigError::InvalidDatabasePath {
        path: "a/b/c".to_string(),
    }
    .into();
    let not_found: Error = NoSuchTableError::new("orders").into();
    let engine: Error = EngineError::text("connection reset").into();
    let compile: Error = CompileError::InvalidExtensionArity {
        name: "json_extract_scalar".to_string(),
        expected: 2,
        actual: 1,
    }
    .into();
    let shape: Error = ResultShapeError::MissingColumn {
        sql: "SHOW TABLES".to_string(),
        column: "Table".to_string(),
    }
    .into();

    assert!(matches!(config, Error::Config(_)));
    assert!(matches!(not_found, Error::NoSuchTable(_)));
    assert!(matches!(engine, Error::Engine(_)));
    assert!(matches!(compile, Error::Compile(_)));
    assert!(matches!(shape, Error::ResultShape(_)));
}

#[test]
fn wrapping_is_transparent_for_display() {
    let error: Error = NoSuchTableError::new("orders").into();
    assert_eq!(error.to_string(), "no such table: orders");

    let error: Error = ConfigError::InvalidDatabasePath {
        path: "a/b/c".to_string(),
    }
    .into();
    assert_eq!(
        error.to_string(),
        "unexpected database format `a/b/c`; expected `catalog` or `catalog/schema`"
    );
}

#[test]
fn engine_error_keeps_structured_payload() {
    let failure = QueryFailure {
        message: Some("Table 'hive.web.events' does not exist".to_string()),
        error_name: Some("TABLE_NOT_FOUND".to_string()),
        error_code: Some(46),
        error_type: Some("USER_ERROR".to_string()),
    };
    let error = EngineError::query(failure.clone());

    assert_eq!(error.failure(), Some(&failure));
    assert_eq!(
        error.to_string(),
        "engine error: Table 'hive.web.events' does not exist (TABLE_NOT_FOUND, code=46)"
    );

    let text = EngineError::text("503 Service Unavailable");
    assert_eq!(text.failure(), None);
    assert_eq!(
        text.payload,
        ErrorPayload::Text("503 Service Unavailable".to_string())
    );
    assert_eq!(QueryFailure::default().to_string(), "<no message>");
}

#[test]
fn invalid_url_exposes_parse_error_as_source() {
    let error = ConfigError::InvalidUrl {
        url: "presto://[".to_string(),
        source: url::ParseError::InvalidIpv6Address,
    };

    assert!(error.source().is_some());
}

#[test]
fn result_alias_uses_top_level_error() {
    fn fails() -> Result<()> {
        Err(NoSuchTableError::new("orders").into())
    }

    assert!(matches!(fails(), Err(Error::NoSuchTable(_))));
}

#[test]
fn unrecognized_type_warning_names_type_and_column() {
    let warning = UnrecognizedTypeWarning {
        column: "payload".to_string(),
        raw_type: "map(varchar,varchar)".to_string(),
    };

    assert_eq!(
        warning.to_string(),
        "did not recognize type `map(varchar,varchar)` of column `payload`"
    );
}
