use dialectql_core::{
    CompileError, CompileOptions, Error, Expr, ExtensionExpr, SemanticType, SqlCompiler, Value,
};
use dialectql_dialect_presto::{
    JSON_EXTRACT_SCALAR, JsonExtractScalar, PrestoDialect, json_extract_scalar,
};

fn compile(expr: &Expr) -> dialectql_core::Result<dialectql_core::CompiledSql> {
    SqlCompiler::new(&PrestoDialect, CompileOptions::default()).compile(expr)
}

#[test]
fn renders_column_and_literal_field() {
    let expr = json_extract_scalar("data", Expr::literal("$.field"), None);

    let compiled = compile(&expr).expect("compile should succeed");

    assert_eq!(compiled.sql, "json_extract_scalar(to_json(data), '$.field')");
    assert!(compiled.params.is_empty());
}

#[test]
fn construction_does_not_render_and_keeps_declared_type() {
    let node =
        JsonExtractScalar::new("data", Expr::literal("$.id")).with_type(SemanticType::BigInteger);
    let expr = Expr::from(node);

    assert_eq!(
        expr,
        Expr::Extension(ExtensionExpr {
            name: JSON_EXTRACT_SCALAR,
            args: vec![Expr::column("data"), Expr::literal("$.id")],
            result_type: SemanticType::BigInteger,
        })
    );
    assert_eq!(
        JsonExtractScalar::new("data", Expr::literal("$.id")).result_type,
        SemanticType::Unknown
    );
}

#[test]
fn plain_field_values_become_bound_parameters() {
    let expr = json_extract_scalar("data", "$.field", Some(SemanticType::String));

    let compiled = compile(&expr).expect("compile should succeed");
    assert_eq!(compiled.sql, "json_extract_scalar(to_json(data), %(param_1)s)");
    assert_eq!(
        compiled.params,
        vec![("param_1".to_string(), Value::String("$.field".to_string()))]
    );

    let inlined = SqlCompiler::new(
        &PrestoDialect,
        CompileOptions {
            literal_binds: true,
        },
    )
    .compile(&expr)
    .expect("compile should succeed");
    assert_eq!(inlined.sql, "json_extract_scalar(to_json(data), '$.field')");
    assert!(inlined.params.is_empty());
}

#[test]
fn operands_are_rendered_recursively() {
    let field = Expr::function(
        "concat",
        vec![Expr::literal("$."), Expr::qualified_column("keys", "name")],
    );
    let expr = json_extract_scalar("select", field, None).equals(Expr::literal("active"));

    let compiled = compile(&expr).expect("compile should succeed");

    assert_eq!(
        compiled.sql,
        "json_extract_scalar(to_json(\"select\"), concat('$.', keys.name)) = 'active'"
    );
}

#[test]
fn nested_extractions_number_binds_in_render_order() {
    let inner = json_extract_scalar("payload", "$.a", None);
    let outer = Expr::function(
        "coalesce",
        vec![inner, json_extract_scalar("backup", "$.b", None)],
    );

    let compiled = compile(&outer).expect("compile should succeed");

    assert_eq!(
        compiled.sql,
        "coalesce(json_extract_scalar(to_json(payload), %(param_1)s), json_extract_scalar(to_json(backup), %(param_2)s))"
    );
    assert_eq!(compiled.params.len(), 2);
    assert_eq!(compiled.params[1].1, Value::String("$.b".to_string()));
}

#[test]
fn malformed_and_unknown_extension_nodes_are_compile_errors() {
    let malformed = Expr::Extension(ExtensionExpr {
        name: JSON_EXTRACT_SCALAR,
        args: vec![Expr::column("data")],
        result_type: SemanticType::Unknown,
    });
    assert!(matches!(
        compile(&malformed),
        Err(Error::Compile(CompileError::InvalidExtensionArity {
            expected: 2,
            actual: 1,
            ..
        }))
    ));

    let unknown = Expr::Extension(ExtensionExpr {
        name: "approx_percentile",
        args: Vec::new(),
        result_type: SemanticType::Float,
    });
    match compile(&unknown) {
        Err(Error::Compile(CompileError::UnsupportedExtension { name, dialect })) => {
            assert_eq!(name, "approx_percentile");
            assert_eq!(dialect, "presto");
        }
        other => panic!("expected unsupported extension error, got {other:?}"),
    }
}
