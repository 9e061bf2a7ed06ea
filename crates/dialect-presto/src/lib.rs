mod connect;
mod export_queries;
mod introspection;
mod json;
mod reserved_words;
mod types;

use dialectql_core::{
    ColumnInfo, CompileError, ConnectArgs, Dialect, DialectCapabilities, ExtensionExpr,
    ForeignKeyInfo, IdentifierPreparer, IndexInfo, PrimaryKeyConstraint, QueryClient,
    ResourceLocator, Result, SqlCompiler,
};

pub use json::{JSON_EXTRACT_SCALAR, JsonExtractScalar, json_extract_scalar};
pub use types::{lookup_type, map_type};

static PRESTO_PREPARER: IdentifierPreparer =
    IdentifierPreparer::new(reserved_words::RESERVED_WORDS, '"');

const PRESTO_CAPABILITIES: DialectCapabilities = DialectCapabilities {
    supports_alter: false,
    supports_pk_autoincrement: false,
    supports_default_values: false,
    supports_empty_insert: false,
    supports_unicode_statements: true,
    supports_unicode_binds: true,
    returns_unicode_strings: true,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct PrestoDialect;

impl PrestoDialect {
    #[must_use]
    pub fn preparer() -> &'static IdentifierPreparer {
        &PRESTO_PREPARER
    }
}

#[must_use]
pub fn reserved_words() -> &'static [&'static str] {
    reserved_words::RESERVED_WORDS
}

impl Dialect for PrestoDialect {
    fn name(&self) -> &str {
        "presto"
    }

    fn driver(&self) -> &str {
        "rest"
    }

    fn capabilities(&self) -> DialectCapabilities {
        PRESTO_CAPABILITIES
    }

    fn identifier_preparer(&self) -> &IdentifierPreparer {
        &PRESTO_PREPARER
    }

    fn create_connect_args(&self, locator: &ResourceLocator) -> Result<ConnectArgs> {
        connect::create_connect_args(locator)
    }

    fn has_table(
        &self,
        client: &mut dyn QueryClient,
        table_name: &str,
        schema: Option<&str>,
    ) -> Result<bool> {
        introspection::has_table(client, &PRESTO_PREPARER, table_name, schema)
    }

    fn get_columns(
        &self,
        client: &mut dyn QueryClient,
        table_name: &str,
        schema: Option<&str>,
    ) -> Result<Vec<ColumnInfo>> {
        introspection::get_columns(client, &PRESTO_PREPARER, table_name, schema)
    }

    fn get_indexes(
        &self,
        client: &mut dyn QueryClient,
        table_name: &str,
        schema: Option<&str>,
    ) -> Result<Vec<IndexInfo>> {
        introspection::get_indexes(client, &PRESTO_PREPARER, table_name, schema)
    }

    // The engine has no foreign keys.
    fn get_foreign_keys(
        &self,
        _client: &mut dyn QueryClient,
        _table_name: &str,
        _schema: Option<&str>,
    ) -> Result<Vec<ForeignKeyInfo>> {
        Ok(Vec::new())
    }

    // Nor primary keys.
    fn get_pk_constraint(
        &self,
        _client: &mut dyn QueryClient,
        _table_name: &str,
        _schema: Option<&str>,
    ) -> Result<PrimaryKeyConstraint> {
        Ok(PrimaryKeyConstraint::default())
    }

    fn get_table_names(
        &self,
        client: &mut dyn QueryClient,
        schema: Option<&str>,
    ) -> Result<Vec<String>> {
        introspection::get_table_names(client, &PRESTO_PREPARER, schema)
    }

    /// No-op: the engine has no transactions, so there is nothing to undo.
    fn do_rollback(&self, _client: &mut dyn QueryClient) -> Result<()> {
        Ok(())
    }

    fn compile_extension(
        &self,
        compiler: &mut SqlCompiler<'_>,
        node: &ExtensionExpr,
    ) -> Result<String> {
        match node.name {
            JSON_EXTRACT_SCALAR => json::compile_json_extract_scalar(compiler, node),
            _ => Err(CompileError::UnsupportedExtension {
                name: node.name.to_string(),
                dialect: self.name().to_string(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::reserved_words::RESERVED_WORDS;
    use super::JSON_EXTRACT_SCALAR;

    #[test]
    fn reserved_words_are_lowercase_sorted_and_unique() {
        for word in RESERVED_WORDS {
            assert_eq!(*word, word.to_ascii_lowercase(), "`{word}` must be lowercase");
        }
        for pair in RESERVED_WORDS.windows(2) {
            assert!(
                pair[0] < pair[1],
                "`{}` must sort strictly before `{}`",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn custom_operator_name_is_reserved() {
        assert!(RESERVED_WORDS.binary_search(&JSON_EXTRACT_SCALAR).is_ok());
    }
}
