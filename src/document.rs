//! Reading argument bags and schemas from files or stdin

use std::io::Read;
use std::path::Path;

use clap::ValueEnum;
use serde_json::Value;
use tracing::debug;

use crate::schema::{AdapterOptions, SchemaShape};
use crate::{Error, Result};

/// How a schema document should be interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema (an MCP tool `inputSchema`)
    #[default]
    JsonSchema,
    /// A serialized [`SchemaShape`] with `kind` tags
    Shape,
}

/// Read a JSON or YAML document. `-` reads JSON from stdin.
///
/// Files ending in `.yaml` / `.yml` are parsed as YAML, everything else as JSON.
pub fn read_value(path: &Path) -> Result<Value> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return parse_value(&buf, false);
    }

    let text = std::fs::read_to_string(path)?;
    let yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
    debug!(path = %path.display(), yaml, "Reading document");
    parse_value(&text, yaml)
}

/// Parse `text` as YAML or JSON.
pub fn parse_value(text: &str, yaml: bool) -> Result<Value> {
    if yaml {
        Ok(serde_yaml::from_str(text)?)
    } else {
        Ok(serde_json::from_str(text)?)
    }
}

/// Build a [`SchemaShape`] from an already parsed schema document.
pub fn schema_from_value(
    value: &Value,
    format: SchemaFormat,
    options: &AdapterOptions,
) -> Result<SchemaShape> {
    match format {
        SchemaFormat::JsonSchema => Ok(SchemaShape::from_json_schema(value, options)),
        SchemaFormat::Shape => serde_json::from_value(value.clone())
            .map_err(|e| Error::Input(format!("not a schema shape: {e}"))),
    }
}

/// Read and translate a schema file.
pub fn read_schema(
    path: &Path,
    format: SchemaFormat,
    options: &AdapterOptions,
) -> Result<SchemaShape> {
    let value = read_value(path)?;
    schema_from_value(&value, format, options)
}
