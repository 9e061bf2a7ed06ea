use dialectql_core::{
    ColumnRef, CompileError, Expr, ExtensionExpr, Ident, IntoExpr, Result, SemanticType,
    SqlCompiler,
};

/// Engine function name; doubles as a reserved word.
pub const JSON_EXTRACT_SCALAR: &str = "json_extract_scalar";

/// Extracts the scalar at `json_field` from the JSON form of `column`.
///
/// Construction only records the operands. Text is produced later by
/// [`crate::PrestoDialect`] when the owning expression is compiled, as
/// `json_extract_scalar(to_json(<column>), <json_field>)`.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonExtractScalar {
    pub column: Ident,
    pub json_field: Expr,
    pub result_type: SemanticType,
}

impl JsonExtractScalar {
    /// `json_field` may be an [`Expr`] or a plain value; plain values become
    /// bound parameters.
    pub fn new(column: impl Into<Ident>, json_field: impl IntoExpr) -> Self {
        Self {
            column: column.into(),
            json_field: json_field.into_expr(),
            result_type: SemanticType::Unknown,
        }
    }

    #[must_use]
    pub fn with_type(mut self, result_type: SemanticType) -> Self {
        self.result_type = result_type;
        self
    }
}

impl From<JsonExtractScalar> for Expr {
    fn from(node: JsonExtractScalar) -> Self {
        Expr::Extension(ExtensionExpr {
            name: JSON_EXTRACT_SCALAR,
            args: vec![
                Expr::Column(ColumnRef {
                    table: None,
                    name: node.column,
                }),
                node.json_field,
            ],
            result_type: node.result_type,
        })
    }
}

impl IntoExpr for JsonExtractScalar {
    fn into_expr(self) -> Expr {
        self.into()
    }
}

pub fn json_extract_scalar(
    column: impl Into<Ident>,
    json_field: impl IntoExpr,
    result_type: Option<SemanticType>,
) -> Expr {
    JsonExtractScalar::new(column, json_field)
        .with_type(result_type.unwrap_or_default())
        .into()
}

pub(crate) fn compile_json_extract_scalar(
    compiler: &mut SqlCompiler<'_>,
    node: &ExtensionExpr,
) -> Result<String> {
    let [column, json_field] = node.args.as_slice() else {
        return Err(CompileError::InvalidExtensionArity {
            name: node.name.to_string(),
            expected: 2,
            actual: node.args.len(),
        }
        .into());
    };

    let column = compiler.process(column)?;
    let json_field = compiler.process(json_field)?;
    Ok(format!("{JSON_EXTRACT_SCALAR}(to_json({column}), {json_field})"))
}
