use dialectql_core::IdentifierPreparer;

// Column labels of `SHOW COLUMNS`. Newer engine releases drop `Null` and
// `Partition Key` and report partitioning through `Extra` instead.
pub(crate) const COLUMN_LABEL: &str = "Column";
pub(crate) const TYPE_LABEL: &str = "Type";
pub(crate) const NULL_LABEL: &str = "Null";
pub(crate) const PARTITION_KEY_LABEL: &str = "Partition Key";
pub(crate) const EXTRA_LABEL: &str = "Extra";
pub(crate) const COMMENT_LABEL: &str = "Comment";
pub(crate) const EXTRA_PARTITION_KEY: &str = "partition key";

pub(crate) const TABLE_LABEL: &str = "Table";

pub(crate) fn show_columns_query(
    preparer: &IdentifierPreparer,
    table_name: &str,
    schema: Option<&str>,
) -> String {
    format!(
        "SHOW COLUMNS FROM {}",
        preparer.format_table(table_name, schema)
    )
}

pub(crate) fn show_tables_query(preparer: &IdentifierPreparer, schema: Option<&str>) -> String {
    match schema {
        Some(schema) => format!("SHOW TABLES FROM {}", preparer.quote_identifier(schema)),
        None => "SHOW TABLES".to_string(),
    }
}
