use dialectql_core::{
    ColumnInfo, EngineError, IdentifierPreparer, IndexInfo, NoSuchTableError, QueryClient, Result,
    ResultShapeError, Row, Value,
};
use regex::Regex;
use tracing::debug;

use crate::{
    export_queries::{
        self, COLUMN_LABEL, COMMENT_LABEL, EXTRA_LABEL, EXTRA_PARTITION_KEY, NULL_LABEL,
        PARTITION_KEY_LABEL, TABLE_LABEL, TYPE_LABEL,
    },
    types::map_column_type,
};

pub(crate) const PARTITION_INDEX_NAME: &str = "partition";

// Symbolic engine error names that mean the table is missing. Checked before
// falling back to the message text.
const TABLE_NOT_FOUND_ERROR_NAMES: &[&str] = &["TABLE_NOT_FOUND", "MISSING_TABLE"];

/// Result of a describe-columns call with the missing-table case split out of
/// the error channel. The engine reports that case only while rows are
/// fetched, so it is classified here rather than left to generic handling.
#[derive(Debug)]
pub(crate) enum DescribeOutcome {
    Columns { sql: String, rows: Vec<Row> },
    NotFound,
}

pub(crate) fn describe_table(
    client: &mut dyn QueryClient,
    preparer: &IdentifierPreparer,
    table_name: &str,
    schema: Option<&str>,
) -> std::result::Result<DescribeOutcome, EngineError> {
    let sql = export_queries::show_columns_query(preparer, table_name, schema);
    debug!(sql = sql.as_str(), "describing table columns");

    let fetched = client
        .execute(&sql)
        .and_then(|mut cursor| cursor.fetch_all());
    match fetched {
        Ok(rows) => Ok(DescribeOutcome::Columns { sql, rows }),
        Err(error) if is_table_not_found(&error, table_name) => {
            debug!(table = table_name, "engine reported table as missing");
            Ok(DescribeOutcome::NotFound)
        }
        Err(error) => Err(error),
    }
}

pub(crate) fn has_table(
    client: &mut dyn QueryClient,
    preparer: &IdentifierPreparer,
    table_name: &str,
    schema: Option<&str>,
) -> Result<bool> {
    match describe_table(client, preparer, table_name, schema)? {
        DescribeOutcome::Columns { .. } => Ok(true),
        DescribeOutcome::NotFound => Ok(false),
    }
}

pub(crate) fn get_columns(
    client: &mut dyn QueryClient,
    preparer: &IdentifierPreparer,
    table_name: &str,
    schema: Option<&str>,
) -> Result<Vec<ColumnInfo>> {
    let (sql, rows) = require_columns(client, preparer, table_name, schema)?;
    let columns = rows
        .iter()
        .map(|row| column_info(&sql, row))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(columns)
}

pub(crate) fn get_indexes(
    client: &mut dyn QueryClient,
    preparer: &IdentifierPreparer,
    table_name: &str,
    schema: Option<&str>,
) -> Result<Vec<IndexInfo>> {
    let (sql, rows) = require_columns(client, preparer, table_name, schema)?;

    let mut column_names = Vec::new();
    for row in &rows {
        if is_partition_key(&sql, row)? {
            column_names.push(row.string(&sql, COLUMN_LABEL)?);
        }
    }

    if column_names.is_empty() {
        return Ok(Vec::new());
    }

    Ok(vec![IndexInfo {
        name: PARTITION_INDEX_NAME.to_string(),
        column_names,
        unique: false,
    }])
}

pub(crate) fn get_table_names(
    client: &mut dyn QueryClient,
    preparer: &IdentifierPreparer,
    schema: Option<&str>,
) -> Result<Vec<String>> {
    let sql = export_queries::show_tables_query(preparer, schema);
    debug!(sql = sql.as_str(), "listing tables");

    let rows = client
        .execute(&sql)
        .and_then(|mut cursor| cursor.fetch_all())?;
    let names = rows
        .iter()
        .map(|row| table_name(&sql, row))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(names)
}

fn require_columns(
    client: &mut dyn QueryClient,
    preparer: &IdentifierPreparer,
    table_name: &str,
    schema: Option<&str>,
) -> Result<(String, Vec<Row>)> {
    match describe_table(client, preparer, table_name, schema)? {
        DescribeOutcome::Columns { sql, rows } => Ok((sql, rows)),
        DescribeOutcome::NotFound => Err(NoSuchTableError::new(table_name).into()),
    }
}

fn column_info(sql: &str, row: &Row) -> std::result::Result<ColumnInfo, ResultShapeError> {
    let name = row.string(sql, COLUMN_LABEL)?;
    let raw_type = row.string(sql, TYPE_LABEL)?;
    let semantic_type = map_column_type(&name, &raw_type);

    Ok(ColumnInfo {
        semantic_type,
        nullable: row.optional_bool(sql, NULL_LABEL)?.unwrap_or(true),
        default: None,
        is_partition_key: is_partition_key(sql, row)?,
        comment: row
            .optional_string(COMMENT_LABEL)
            .filter(|comment| !comment.is_empty()),
        name,
        raw_type,
    })
}

fn is_partition_key(sql: &str, row: &Row) -> std::result::Result<bool, ResultShapeError> {
    if let Some(flag) = row.optional_bool(sql, PARTITION_KEY_LABEL)? {
        return Ok(flag);
    }

    Ok(row
        .optional_string(EXTRA_LABEL)
        .is_some_and(|extra| extra.contains(EXTRA_PARTITION_KEY)))
}

fn table_name(sql: &str, row: &Row) -> std::result::Result<String, ResultShapeError> {
    // Older servers label the column `tab_name`; only the position is stable.
    match row.get_index(0) {
        Some(Value::String(name)) => Ok(name.clone()),
        Some(_) => Err(ResultShapeError::UnexpectedValue {
            sql: sql.to_string(),
            column: TABLE_LABEL.to_string(),
            expected: "string",
        }),
        None => Err(ResultShapeError::MissingColumn {
            sql: sql.to_string(),
            column: TABLE_LABEL.to_string(),
        }),
    }
}

/// True only for errors positively identified as "table does not exist".
/// Anything else, including unstructured payloads, stays an engine error.
pub(crate) fn is_table_not_found(error: &EngineError, table_name: &str) -> bool {
    let Some(failure) = error.failure() else {
        return false;
    };

    if failure
        .error_name
        .as_deref()
        .is_some_and(|name| TABLE_NOT_FOUND_ERROR_NAMES.contains(&name))
    {
        return true;
    }

    failure
        .message
        .as_deref()
        .is_some_and(|message| missing_table_message_matches(message, table_name))
}

// The engine names the table fully qualified (`catalog.schema.table`), so any
// dotted qualifier in front of the exact name is accepted.
fn missing_table_message_matches(message: &str, table_name: &str) -> bool {
    let pattern = format!(
        r"^Table '(?:.*\.)?{}' does not exist$",
        regex::escape(table_name)
    );
    Regex::new(&pattern).is_ok_and(|regex| regex.is_match(message))
}
