use super::{Ident, SemanticType, Value};

/// Engine-agnostic expression tree. Building one never consults a dialect;
/// text only exists once a [`crate::SqlCompiler`] walks it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    // Leaves
    Column(ColumnRef),
    Literal(Value),
    Bind(BindParam),
    Raw(String),

    // Operators
    BinaryOp {
        left: Box<Expr>,
        op: BinaryOperator,
        right: Box<Expr>,
    },
    Not(Box<Expr>),
    IsNull {
        expr: Box<Expr>,
        negated: bool,
    },
    Paren(Box<Expr>),

    // Calls
    Function {
        name: String,
        args: Vec<Expr>,
    },
    Extension(ExtensionExpr),
}

impl Expr {
    pub fn column(name: impl Into<Ident>) -> Self {
        Self::Column(ColumnRef {
            table: None,
            name: name.into(),
        })
    }

    pub fn qualified_column(table: impl Into<Ident>, name: impl Into<Ident>) -> Self {
        Self::Column(ColumnRef {
            table: Some(table.into()),
            name: name.into(),
        })
    }

    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    pub fn bind(value: impl Into<Value>) -> Self {
        Self::Bind(BindParam {
            key: None,
            value: value.into(),
        })
    }

    pub fn named_bind(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Bind(BindParam {
            key: Some(key.into()),
            value: value.into(),
        })
    }

    pub fn function(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::Function {
            name: name.into(),
            args,
        }
    }

    #[must_use]
    pub fn binary(self, op: BinaryOperator, right: impl IntoExpr) -> Self {
        Self::BinaryOp {
            left: Box::new(self),
            op,
            right: Box::new(right.into_expr()),
        }
    }

    #[must_use]
    pub fn equals(self, right: impl IntoExpr) -> Self {
        self.binary(BinaryOperator::Eq, right)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRef {
    pub table: Option<Ident>,
    pub name: Ident,
}

/// A value sent alongside the statement instead of inline. Anonymous binds
/// get a generated key when compiled.
#[derive(Debug, Clone, PartialEq)]
pub struct BindParam {
    pub key: Option<String>,
    pub value: Value,
}

/// A dialect-specific node. `name` selects the dialect's renderer; `args` are
/// compiled recursively like any other sub-expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionExpr {
    pub name: &'static str,
    pub args: Vec<Expr>,
    pub result_type: SemanticType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Like,
    And,
    Or,
    Add,
    Subtract,
    Multiply,
    Divide,
    Concat,
}

impl BinaryOperator {
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Like => "LIKE",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Concat => "||",
        }
    }
}

/// Conversion used wherever an argument may be either an expression or a
/// plain value. Plain values become anonymous bind parameters.
pub trait IntoExpr {
    fn into_expr(self) -> Expr;
}

impl IntoExpr for Expr {
    fn into_expr(self) -> Expr {
        self
    }
}

impl IntoExpr for Value {
    fn into_expr(self) -> Expr {
        Expr::bind(self)
    }
}

impl IntoExpr for &str {
    fn into_expr(self) -> Expr {
        Expr::bind(self)
    }
}

impl IntoExpr for String {
    fn into_expr(self) -> Expr {
        Expr::bind(self)
    }
}

impl IntoExpr for i64 {
    fn into_expr(self) -> Expr {
        Expr::bind(self)
    }
}

impl IntoExpr for f64 {
    fn into_expr(self) -> Expr {
        Expr::bind(self)
    }
}

impl IntoExpr for bool {
    fn into_expr(self) -> Expr {
        Expr::bind(self)
    }
}
