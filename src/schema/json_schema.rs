//! JSON Schema → [`SchemaShape`] adapter.
//!
//! MCP tools describe their arguments with a JSON Schema `inputSchema`. This
//! adapter reads the handful of keywords that matter for numeric coercion and
//! maps everything else to [`SchemaShape::Other`]. It is total: malformed or
//! unfamiliar schemas never produce an error, only a less specific shape.
//!
//! Keyword mapping:
//!
//! | JSON Schema                                   | Shape                     |
//! |-----------------------------------------------|---------------------------|
//! | `"type": "number"`                            | `Number`                  |
//! | `"type": "integer"`                           | `Number` (configurable)   |
//! | `"type": "object"` / `properties`             | `Object`                  |
//! | property missing from `required`              | `Optional(..)`            |
//! | property with `default`                       | `Default(..)`             |
//! | `"type": [T, "null"]`, `"nullable": true`     | `Nullable(..)`            |
//! | `anyOf`/`oneOf` of one branch plus `null`     | `Nullable(..)`            |

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::SchemaShape;

/// Knobs for the JSON Schema adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterOptions {
    /// Treat `"type": "integer"` as a number field
    pub integer_as_number: bool,
}

impl Default for AdapterOptions {
    fn default() -> Self {
        Self {
            integer_as_number: true,
        }
    }
}

/// Translate a JSON Schema document into a [`SchemaShape`].
pub fn from_json_schema(schema: &Value, options: &AdapterOptions) -> SchemaShape {
    let Some(obj) = schema.as_object() else {
        // Boolean schemas (`true`/`false`) and garbage carry no structure.
        return SchemaShape::Other;
    };

    if obj.get("nullable").and_then(Value::as_bool) == Some(true) {
        return core_shape(obj, declared_type(obj), options).nullable();
    }

    if let Some(Value::Array(types)) = obj.get("type") {
        return shape_of_type_list(obj, types, options);
    }

    if let Some(branches) = obj
        .get("anyOf")
        .or_else(|| obj.get("oneOf"))
        .and_then(Value::as_array)
    {
        return shape_of_union(branches, options);
    }

    core_shape(obj, declared_type(obj), options)
}

fn declared_type(obj: &Map<String, Value>) -> Option<&str> {
    obj.get("type").and_then(Value::as_str)
}

/// `"type": ["number", "null"]` style declarations.
fn shape_of_type_list(
    obj: &Map<String, Value>,
    types: &[Value],
    options: &AdapterOptions,
) -> SchemaShape {
    let mut nullable = false;
    let mut concrete = Vec::with_capacity(types.len());
    for ty in types {
        match ty.as_str() {
            Some("null") => nullable = true,
            Some(name) => concrete.push(name),
            None => return SchemaShape::Other,
        }
    }

    let [single] = concrete.as_slice() else {
        return SchemaShape::Other;
    };
    let shape = core_shape(obj, Some(*single), options);
    if nullable { shape.nullable() } else { shape }
}

/// `anyOf` / `oneOf` unions: only `T | null` (or a lone `T`) is understood.
fn shape_of_union(branches: &[Value], options: &AdapterOptions) -> SchemaShape {
    let (nulls, others): (Vec<&Value>, Vec<&Value>) =
        branches.iter().partition(|branch| is_null_schema(branch));

    let [single] = others.as_slice() else {
        return SchemaShape::Other;
    };
    let shape = from_json_schema(single, options);
    if nulls.is_empty() {
        shape
    } else {
        shape.nullable()
    }
}

fn is_null_schema(schema: &Value) -> bool {
    schema.get("type").and_then(Value::as_str) == Some("null")
}

fn core_shape(
    obj: &Map<String, Value>,
    declared: Option<&str>,
    options: &AdapterOptions,
) -> SchemaShape {
    match declared {
        Some("number") => SchemaShape::Number,
        Some("integer") if options.integer_as_number => SchemaShape::Number,
        Some("object") => object_shape(obj, options),
        None if obj.contains_key("properties") => object_shape(obj, options),
        _ => SchemaShape::Other,
    }
}

fn object_shape(obj: &Map<String, Value>, options: &AdapterOptions) -> SchemaShape {
    let Some(properties) = obj.get("properties").and_then(Value::as_object) else {
        return SchemaShape::object(std::iter::empty::<(String, SchemaShape)>());
    };

    let required: Vec<&str> = obj
        .get("required")
        .and_then(Value::as_array)
        .map(|arr| arr.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    SchemaShape::object(properties.iter().map(|(name, prop)| {
        let mut shape = from_json_schema(prop, options);
        if let Some(default) = prop.get("default") {
            shape = shape.with_default(default.clone());
        }
        if !required.contains(&name.as_str()) {
            shape = shape.optional();
        }
        (name.clone(), shape)
    }))
}
