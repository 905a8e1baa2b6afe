//! mcp-arg-coerce - coerce string-encoded numbers in MCP tool arguments

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};

use mcp_arg_coerce::{
    Result,
    cli::{Cli, Command},
    coerce_arguments_owned,
    config::Config,
    document::{SchemaFormat, read_schema, read_value},
    number_fields, setup_tracing,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::from(e.exit_code());
        }
    };

    let level = cli.log_level.as_deref().unwrap_or(&config.log.level);
    let format = cli
        .log_format
        .as_deref()
        .unwrap_or(config.log.format.as_str());
    if let Err(e) = setup_tracing(level, Some(format)) {
        eprintln!("Failed to setup tracing: {e}");
        return ExitCode::FAILURE;
    }

    let result = match cli.command {
        Command::Coerce {
            schema,
            args,
            schema_format,
            pretty,
        } => run_coerce(&config, &schema, &args, schema_format, pretty),
        Command::Fields {
            schema,
            schema_format,
        } => run_fields(&config, &schema, schema_format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Coerce an argument bag and print it
fn run_coerce(
    config: &Config,
    schema_path: &Path,
    args_path: &Path,
    format: SchemaFormat,
    pretty: bool,
) -> Result<()> {
    let shape = read_schema(schema_path, format, &config.schema)?;
    let args = read_value(args_path)?;
    debug!(?shape, "Schema loaded");

    let coerced = coerce_arguments_owned(args, &shape);
    let out = if pretty {
        serde_json::to_string_pretty(&coerced)?
    } else {
        serde_json::to_string(&coerced)?
    };
    println!("{out}");
    Ok(())
}

/// Print the number-field set, one name per line
fn run_fields(config: &Config, schema_path: &Path, format: SchemaFormat) -> Result<()> {
    let shape = read_schema(schema_path, format, &config.schema)?;

    let mut names: Vec<&str> = number_fields(&shape).into_iter().collect();
    names.sort_unstable();
    for name in names {
        println!("{name}");
    }
    Ok(())
}
