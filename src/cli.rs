//! Command-line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::document::SchemaFormat;

/// Coerce string-encoded numbers in MCP tool-call arguments
#[derive(Parser, Debug)]
#[command(name = "mcp-arg-coerce")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short, long, env = "MCP_ARG_COERCE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (text, json); overrides the config file
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Subcommand
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Coerce an argument bag against a schema and print the result as JSON
    Coerce {
        /// Schema file (JSON or YAML)
        #[arg(short, long)]
        schema: PathBuf,

        /// Argument bag file (JSON or YAML), `-` for stdin
        #[arg(short, long, default_value = "-")]
        args: PathBuf,

        /// How to interpret the schema file
        #[arg(long, value_enum, default_value_t = SchemaFormat::JsonSchema)]
        schema_format: SchemaFormat,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },

    /// List the top-level fields a schema declares as numbers
    Fields {
        /// Schema file (JSON or YAML)
        #[arg(short, long)]
        schema: PathBuf,

        /// How to interpret the schema file
        #[arg(long, value_enum, default_value_t = SchemaFormat::JsonSchema)]
        schema_format: SchemaFormat,
    },
}
