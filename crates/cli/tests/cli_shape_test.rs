use std::process::Command;

fn run_dialectql(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_dialectql"))
        .args(args)
        .output()
        .unwrap_or_else(|error| panic!("failed to run dialectql: {error}"))
}

#[test]
fn connect_args_prints_sorted_kwargs() {
    let output = run_dialectql(&[
        "connect-args",
        "presto://etl@presto.internal:8443/hive/web?source=bi",
    ]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "catalog=hive\nhost=presto.internal\nport=8443\nschema=web\nsource=bi\nusername=etl\n"
    );
}

#[test]
fn bad_database_path_renders_config_category_with_raw_path() {
    let output = run_dialectql(&["connect-args", "presto://presto.internal/a/b/c"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[config]"), "got: {stderr}");
    assert!(
        stderr.contains("while deriving connection arguments"),
        "got: {stderr}"
    );
    assert!(stderr.contains("a/b/c"), "got: {stderr}");
}

#[test]
fn quote_renders_each_identifier_on_its_own_line() {
    let output = run_dialectql(&["quote", "orders", "select", "a\"b", "Mixed"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "orders\n\"select\"\n\"a\"\"b\"\n\"Mixed\"\n");
}

#[test]
fn keywords_lists_the_reserved_word_table() {
    let output = run_dialectql(&["keywords"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().any(|line| line == "json_extract_scalar"));
    assert!(stdout.lines().any(|line| line == "select"));
}

#[test]
fn json_extract_inlines_the_path() {
    let output = run_dialectql(&["json-extract", "data", "$.field"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "json_extract_scalar(to_json(data), '$.field')\n");
}

#[test]
fn quote_without_identifiers_is_a_usage_error() {
    let output = run_dialectql(&["quote"]);

    assert_eq!(output.status.code(), Some(2));
}
