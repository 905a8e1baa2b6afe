//! MCP tool-call argument coercion
//!
//! Some MCP clients send every scalar argument as a string. This crate turns
//! string-encoded numbers back into JSON numbers before schema validation, for
//! the top-level fields a tool's schema declares as numeric.
//!
//! # Features
//!
//! - **Schema shapes**: a small closed [`SchemaShape`] model, plus an adapter
//!   from the JSON Schema dialect MCP tools publish
//! - **Strict coercion**: only canonical numeric literals are converted, so
//!   `"42"` becomes `42` while `"1e3"` or `"007"` stay strings
//! - **Never fails**: unusual arguments or schemas fall back to passthrough
//!
//! ```
//! use mcp_arg_coerce::{SchemaShape, coerce_arguments};
//! use serde_json::json;
//!
//! let schema = SchemaShape::object([("limit", SchemaShape::Number.optional())]);
//! let out = coerce_arguments(&json!({ "limit": " 10 " }), &schema);
//! assert_eq!(out, json!({ "limit": 10 }));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod coerce;
pub mod config;
pub mod document;
pub mod error;
pub mod protocol;
pub mod schema;

pub use coerce::{
    coerce_arguments, coerce_arguments_owned, coerce_tool_call, is_number, number_fields,
};
pub use error::{Error, Result};
pub use schema::{AdapterOptions, SchemaShape};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Setup tracing/logging
///
/// Logs are written to stderr so stdout stays free for command output.
pub fn setup_tracing(level: &str, format: Option<&str>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry().with(filter);

    match format {
        Some("json") => {
            subscriber
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init()
                .map_err(|e| Error::Config(format!("tracing already initialized: {e}")))?;
        }
        _ => {
            subscriber
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init()
                .map_err(|e| Error::Config(format!("tracing already initialized: {e}")))?;
        }
    }

    Ok(())
}
