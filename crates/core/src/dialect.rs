use crate::{
    ColumnInfo, CompileError, ConnectArgs, ExtensionExpr, ForeignKeyInfo, IdentifierPreparer,
    IndexInfo, PrimaryKeyConstraint, QueryClient, ResourceLocator, Result, SqlCompiler,
};

/// Static feature flags the upstream query framework consults before
/// emitting statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectCapabilities {
    pub supports_alter: bool,
    pub supports_pk_autoincrement: bool,
    pub supports_default_values: bool,
    pub supports_empty_insert: bool,
    pub supports_unicode_statements: bool,
    pub supports_unicode_binds: bool,
    pub returns_unicode_strings: bool,
}

pub trait Dialect: Send + Sync {
    fn name(&self) -> &str;
    fn driver(&self) -> &str;
    fn capabilities(&self) -> DialectCapabilities;
    fn identifier_preparer(&self) -> &IdentifierPreparer;

    fn create_connect_args(&self, locator: &ResourceLocator) -> Result<ConnectArgs>;

    fn has_table(
        &self,
        client: &mut dyn QueryClient,
        table_name: &str,
        schema: Option<&str>,
    ) -> Result<bool>;

    fn get_columns(
        &self,
        client: &mut dyn QueryClient,
        table_name: &str,
        schema: Option<&str>,
    ) -> Result<Vec<ColumnInfo>>;

    fn get_indexes(
        &self,
        client: &mut dyn QueryClient,
        table_name: &str,
        schema: Option<&str>,
    ) -> Result<Vec<IndexInfo>>;

    fn get_foreign_keys(
        &self,
        client: &mut dyn QueryClient,
        table_name: &str,
        schema: Option<&str>,
    ) -> Result<Vec<ForeignKeyInfo>>;

    fn get_pk_constraint(
        &self,
        client: &mut dyn QueryClient,
        table_name: &str,
        schema: Option<&str>,
    ) -> Result<PrimaryKeyConstraint>;

    fn get_table_names(
        &self,
        client: &mut dyn QueryClient,
        schema: Option<&str>,
    ) -> Result<Vec<String>>;

    fn do_rollback(&self, client: &mut dyn QueryClient) -> Result<()>;

    /// Placeholder text for a bound parameter. Defaults to pyformat.
    fn bind_placeholder(&self, key: &str) -> String {
        format!("%({key})s")
    }

    fn compile_extension(
        &self,
        _compiler: &mut SqlCompiler<'_>,
        node: &ExtensionExpr,
    ) -> Result<String> {
        Err(CompileError::UnsupportedExtension {
            name: node.name.to_string(),
            dialect: self.name().to_string(),
        }
        .into())
    }
}
