mod expr;
mod ident;
mod schema_object;
mod types;

pub use expr::{BinaryOperator, BindParam, ColumnRef, Expr, ExtensionExpr, IntoExpr};
pub use ident::Ident;
pub use schema_object::{ColumnInfo, ForeignKeyInfo, IndexInfo, PrimaryKeyConstraint};
pub use types::{SemanticType, Value};
