use crate::{BinaryOperator, BindParam, ColumnRef, Dialect, Expr, Result, Value};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Render bind parameters inline as literals instead of placeholders.
    pub literal_binds: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompiledSql {
    pub sql: String,
    pub params: Vec<(String, Value)>,
}

/// Walks an [`Expr`] tree and produces dialect text. Dialect-specific nodes
/// are handed back to the dialect through [`Dialect::compile_extension`].
pub struct SqlCompiler<'a> {
    dialect: &'a dyn Dialect,
    options: CompileOptions,
    params: Vec<(String, Value)>,
    anonymous_binds: usize,
}

impl<'a> SqlCompiler<'a> {
    #[must_use]
    pub fn new(dialect: &'a dyn Dialect, options: CompileOptions) -> Self {
        Self {
            dialect,
            options,
            params: Vec::new(),
            anonymous_binds: 0,
        }
    }

    pub fn compile(mut self, expr: &Expr) -> Result<CompiledSql> {
        let sql = self.process(expr)?;
        Ok(CompiledSql {
            sql,
            params: self.params,
        })
    }

    /// Renders one sub-expression. Extension renderers call back into this.
    pub fn process(&mut self, expr: &Expr) -> Result<String> {
        match expr {
            Expr::Column(column) => Ok(self.render_column(column)),
            Expr::Literal(value) => Ok(render_literal(value)),
            Expr::Bind(bind) => Ok(self.render_bind(bind)),
            Expr::Raw(sql) => Ok(sql.clone()),
            Expr::BinaryOp { left, op, right } => {
                let left = self.process(left)?;
                let right = self.process(right)?;
                Ok(render_binary(&left, *op, &right))
            }
            Expr::Not(inner) => Ok(format!("NOT {}", self.process(inner)?)),
            Expr::IsNull { expr, negated } => {
                let inner = self.process(expr)?;
                if *negated {
                    Ok(format!("{inner} IS NOT NULL"))
                } else {
                    Ok(format!("{inner} IS NULL"))
                }
            }
            Expr::Paren(inner) => Ok(format!("({})", self.process(inner)?)),
            Expr::Function { name, args } => {
                let args = self.process_list(args)?;
                Ok(format!("{name}({args})"))
            }
            Expr::Extension(node) => {
                let dialect = self.dialect;
                dialect.compile_extension(self, node)
            }
        }
    }

    pub fn process_list(&mut self, exprs: &[Expr]) -> Result<String> {
        let rendered = exprs
            .iter()
            .map(|expr| self.process(expr))
            .collect::<Result<Vec<_>>>()?;
        Ok(rendered.join(", "))
    }

    fn render_column(&self, column: &ColumnRef) -> String {
        let preparer = self.dialect.identifier_preparer();
        let name = preparer.quote_ident(&column.name);
        match &column.table {
            Some(table) => format!("{}.{name}", preparer.quote_ident(table)),
            None => name,
        }
    }

    fn render_bind(&mut self, bind: &BindParam) -> String {
        if self.options.literal_binds {
            return render_literal(&bind.value);
        }

        let key = match &bind.key {
            Some(key) => key.clone(),
            None => {
                self.anonymous_binds += 1;
                format!("param_{}", self.anonymous_binds)
            }
        };
        let placeholder = self.dialect.bind_placeholder(&key);
        self.params.push((key, bind.value.clone()));
        placeholder
    }
}

fn render_binary(left: &str, op: BinaryOperator, right: &str) -> String {
    format!("{left} {} {right}", op.as_sql())
}

/// Inline SQL literal for `value`; strings use single quotes with embedded
/// quotes doubled.
#[must_use]
pub fn render_literal(value: &Value) -> String {
    match value {
        Value::String(text) => format!("'{}'", text.replace('\'', "''")),
        Value::Integer(number) => number.to_string(),
        Value::Float(number) => format!("{number:?}"),
        Value::Bool(true) => "TRUE".to_string(),
        Value::Bool(false) => "FALSE".to_string(),
        Value::Null => "NULL".to_string(),
    }
}
