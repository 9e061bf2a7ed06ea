mod error_presentation;

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use dialectql_core::{CompileOptions, Dialect, ResourceLocator, SqlCompiler};
use dialectql_dialect_presto::{PrestoDialect, json_extract_scalar, reserved_words};
use tracing_subscriber::EnvFilter;

use crate::error_presentation::{
    COMPILE_CONTEXT, CONNECT_ARGS_CONTEXT, CliError, CliResult, render_runtime_error,
};

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Parser)]
#[command(name = "dialectql", version, about = "Presto dialect toolbox")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the driver connection arguments derived from a locator URL
    ConnectArgs {
        /// e.g. presto://user@host:8080/catalog/schema?source=app
        url: String,
    },
    /// Print identifiers as the dialect would render them
    Quote {
        #[arg(required = true)]
        idents: Vec<String>,
    },
    /// List the dialect's reserved words
    Keywords,
    /// Render a json_extract_scalar call with the path inlined
    JsonExtract { column: String, path: String },
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let stdout = io::stdout();
    match run(cli.command, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", render_runtime_error(error));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(command: Command, out: &mut impl Write) -> CliResult<()> {
    let dialect = PrestoDialect;

    match command {
        Command::ConnectArgs { url } => {
            let args = ResourceLocator::parse(&url)
                .and_then(|locator| dialect.create_connect_args(&locator))
                .map_err(CliError::core(CONNECT_ARGS_CONTEXT))?;
            for (key, value) in args.to_kwargs() {
                writeln!(out, "{key}={value}")?;
            }
        }
        Command::Quote { idents } => {
            let preparer = dialect.identifier_preparer();
            for ident in idents {
                writeln!(out, "{}", preparer.quote(&ident))?;
            }
        }
        Command::Keywords => {
            for word in reserved_words() {
                writeln!(out, "{word}")?;
            }
        }
        Command::JsonExtract { column, path } => {
            let expr = json_extract_scalar(column, path, None);
            let compiled = SqlCompiler::new(
                &dialect,
                CompileOptions {
                    literal_binds: true,
                },
            )
            .compile(&expr)
            .map_err(CliError::core(COMPILE_CONTEXT))?;
            writeln!(out, "{}", compiled.sql)?;
        }
    }

    Ok(())
}
