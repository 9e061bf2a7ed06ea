use std::collections::BTreeMap;

use dialectql_core::{
    ColumnInfo, ConnectArgs, Dialect, DialectCapabilities, ForeignKeyInfo, IdentifierPreparer,
    IndexInfo, PrimaryKeyConstraint, QueryClient, ResourceLocator, Result,
};

const STUB_RESERVED_WORDS: &[&str] = &["from", "select", "table"];
static STUB_PREPARER: IdentifierPreparer = IdentifierPreparer::new(STUB_RESERVED_WORDS, '`');

/// Minimal dialect relying on every provided method of the contract.
#[derive(Debug, Default)]
pub struct StubDialect;

impl Dialect for StubDialect {
    fn name(&self) -> &str {
        "stub"
    }

    fn driver(&self) -> &str {
        "memory"
    }

    fn capabilities(&self) -> DialectCapabilities {
        DialectCapabilities {
            supports_alter: true,
            supports_pk_autoincrement: true,
            supports_default_values: true,
            supports_empty_insert: true,
            supports_unicode_statements: true,
            supports_unicode_binds: true,
            returns_unicode_strings: true,
        }
    }

    fn identifier_preparer(&self) -> &IdentifierPreparer {
        &STUB_PREPARER
    }

    fn create_connect_args(&self, locator: &ResourceLocator) -> Result<ConnectArgs> {
        Ok(ConnectArgs {
            host: locator.host.clone(),
            port: locator.port,
            username: locator.username.clone(),
            catalog: None,
            schema: None,
            extra: BTreeMap::new(),
        })
    }

    fn has_table(
        &self,
        _client: &mut dyn QueryClient,
        _table_name: &str,
        _schema: Option<&str>,
    ) -> Result<bool> {
        Ok(false)
    }

    fn get_columns(
        &self,
        _client: &mut dyn QueryClient,
        _table_name: &str,
        _schema: Option<&str>,
    ) -> Result<Vec<ColumnInfo>> {
        Ok(Vec::new())
    }

    fn get_indexes(
        &self,
        _client: &mut dyn QueryClient,
        _table_name: &str,
        _schema: Option<&str>,
    ) -> Result<Vec<IndexInfo>> {
        Ok(Vec::new())
    }

    fn get_foreign_keys(
        &self,
        _client: &mut dyn QueryClient,
        _table_name: &str,
        _schema: Option<&str>,
    ) -> Result<Vec<ForeignKeyInfo>> {
        Ok(Vec::new())
    }

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
        _client: &mut dyn QueryClient,
        _schema: Option<&str>,
    ) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    fn do_rollback(&self, _client: &mut dyn QueryClient) -> Result<()> {
        Ok(())
    }
}
