mod client;
mod compiler;
mod config;
mod dialect;
mod error;
mod ir;
mod quoting;

pub use client::{QueryClient, Row, RowCursor};
pub use compiler::{CompileOptions, CompiledSql, SqlCompiler, render_literal};
pub use config::{ConnectArgs, DEFAULT_PORT, ResourceLocator};
pub use dialect::{Dialect, DialectCapabilities};
pub use error::{
    CompileError, ConfigError, EngineError, Error, ErrorPayload, NoSuchTableError, QueryFailure,
    Result, ResultShapeError, UnrecognizedTypeWarning,
};
pub use ir::{
    BinaryOperator, BindParam, ColumnInfo, ColumnRef, Expr, ExtensionExpr, ForeignKeyInfo, Ident,
    IndexInfo, IntoExpr, PrimaryKeyConstraint, SemanticType, Value,
};
pub use quoting::IdentifierPreparer;
