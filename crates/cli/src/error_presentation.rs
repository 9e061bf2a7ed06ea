use std::io;

use anyhow::Context;
use miette::Report;

pub(crate) const CONNECT_ARGS_CONTEXT: &str = "while deriving connection arguments";
pub(crate) const COMPILE_CONTEXT: &str = "while compiling expression";
const OUTPUT_CONTEXT: &str = "while writing output";

pub(crate) type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug)]
pub(crate) enum CliError {
    Core {
        context: &'static str,
        source: dialectql_core::Error,
    },
    Output(io::Error),
}

impl CliError {
    pub(crate) fn core(context: &'static str) -> impl FnOnce(dialectql_core::Error) -> Self {
        move |source| Self::Core { context, source }
    }
}

impl From<io::Error> for CliError {
    fn from(value: io::Error) -> Self {
        Self::Output(value)
    }
}

pub(crate) fn render_runtime_error(error: CliError) -> String {
    match error {
        CliError::Core { context, source } => {
            let category = core_category(&source);
            let report = report_with_context(source, context);
            format!("[{category}] {report}")
        }
        CliError::Output(source) => {
            let report = report_with_context(source, OUTPUT_CONTEXT);
            format!("[io] {report}")
        }
    }
}

fn report_with_context<E, C>(source: E, context: C) -> Report
where
    E: std::error::Error + Send + Sync + 'static,
    C: Into<String>,
{
    let context = context.into();
    let anyhow_error = std::result::Result::<(), E>::Err(source)
        .context(context)
        .expect_err("context wrapping must produce an error");
    miette::miette!("{anyhow_error:#}")
}

fn core_category(error: &dialectql_core::Error) -> &'static str {
    match error {
        dialectql_core::Error::Config(_) => "config",
        dialectql_core::Error::NoSuchTable(_) => "not-found",
        dialectql_core::Error::Engine(_) => "engine",
        dialectql_core::Error::Compile(_) => "compile",
        dialectql_core::Error::ResultShape(_) => "result",
    }
}
