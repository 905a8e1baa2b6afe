//! Numeric pre-coercion of tool-call arguments.
//!
//! Some MCP clients serialize every scalar argument as a string, so a tool
//! declaring `{"count": {"type": "number"}}` receives `{"count": "5"}` and the
//! validator rejects it. [`coerce_arguments`] runs just before validation and
//! turns such strings back into numbers, touching only:
//!
//! - top-level fields whose shape is `Number` once optional/default/nullable
//!   layers are peeled off,
//! - values that are strings,
//! - strings that are canonical numeric literals (see [`number`]).
//!
//! Everything else is copied through unchanged. Nothing here can fail: odd
//! inputs and odd schemas just mean fewer coercions.

pub mod number;

use std::collections::HashSet;

use serde_json::{Map, Value};
use tracing::{debug, trace, warn};

use crate::protocol::{Tool, ToolsCallParams};
use crate::schema::{AdapterOptions, SchemaShape};

pub use number::{canonical_text, parse_canonical_number};

/// Returns `true` if `shape` is a number after peeling wrapper layers.
pub fn is_number(shape: &SchemaShape) -> bool {
    matches!(shape.unwrap_modifiers(), SchemaShape::Number)
}

/// Names of the top-level fields of `schema` that are declared as numbers.
///
/// Non-object schemas have no fields and yield an empty set. A wrapped object
/// (e.g. an optional object) is not unwrapped at the top level.
pub fn number_fields(schema: &SchemaShape) -> HashSet<&str> {
    schema
        .fields()
        .map(|fields| {
            fields
                .iter()
                .filter(|(_, shape)| is_number(shape))
                .map(|(name, _)| name.as_str())
                .collect()
        })
        .unwrap_or_default()
}

/// Coerce canonical numeric strings in `args` according to `schema`.
///
/// Non-object `args` (null, arrays, scalars) are returned unchanged. For
/// objects a new value is returned; `args` itself is only borrowed.
pub fn coerce_arguments(args: &Value, schema: &SchemaShape) -> Value {
    match args {
        Value::Object(map) => Value::Object(coerce_map(map.clone(), schema)),
        other => other.clone(),
    }
}

/// Owned variant of [`coerce_arguments`] that reuses the argument map.
pub fn coerce_arguments_owned(args: Value, schema: &SchemaShape) -> Value {
    match args {
        Value::Object(map) => Value::Object(coerce_map(map, schema)),
        other => other,
    }
}

fn coerce_map(mut map: Map<String, Value>, schema: &SchemaShape) -> Map<String, Value> {
    for name in number_fields(schema) {
        let Some(Value::String(text)) = map.get(name) else {
            continue;
        };
        let Some(number) = parse_canonical_number(text) else {
            trace!(field = %name, value = %text, "Numeric string is not canonical, left as-is");
            continue;
        };
        debug!(field = %name, %number, "Coerced string argument to number");
        map.insert(name.to_owned(), Value::Number(number));
    }
    map
}

/// Coerce the arguments of a `tools/call` request against the tool's
/// `inputSchema`.
///
/// `tool` must be the definition of the tool being called; on a name mismatch
/// the params are returned untouched.
pub fn coerce_tool_call(
    tool: &Tool,
    params: ToolsCallParams,
    options: &AdapterOptions,
) -> ToolsCallParams {
    if tool.name != params.name {
        warn!(
            tool = %tool.name,
            requested = %params.name,
            "Tool definition does not match call, skipping argument coercion"
        );
        return params;
    }

    let shape = SchemaShape::from_json_schema(&tool.input_schema, options);
    ToolsCallParams {
        arguments: coerce_arguments_owned(params.arguments, &shape),
        ..params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> SchemaShape {
        SchemaShape::object([
            ("count", SchemaShape::Number),
            ("limit", SchemaShape::Number.optional()),
            ("page", SchemaShape::Number.nullable().with_default(json!(1))),
            ("query", SchemaShape::Other),
            ("filter", SchemaShape::object([("min", SchemaShape::Number)])),
        ])
    }

    // ── Type classifier ─────────────────────────────────────────────────────

    #[test]
    fn is_number_through_wrappers() {
        assert!(is_number(&SchemaShape::Number));
        assert!(is_number(&SchemaShape::Number.optional()));
        assert!(is_number(&SchemaShape::Number.with_default(json!(0))));
        assert!(is_number(&SchemaShape::Number.nullable()));
        assert!(is_number(
            &SchemaShape::Number
                .nullable()
                .optional()
                .with_default(json!(3))
                .nullable()
        ));
    }

    #[test]
    fn is_number_rejects_other_shapes() {
        assert!(!is_number(&SchemaShape::Other));
        assert!(!is_number(&SchemaShape::Other.optional()));
        assert!(!is_number(&SchemaShape::object([("a", SchemaShape::Number)])));
    }

    // ── Number-field extractor ──────────────────────────────────────────────

    #[test]
    fn number_fields_collects_wrapped_numbers() {
        let schema = schema();
        let fields = number_fields(&schema);
        assert_eq!(fields, HashSet::from(["count", "limit", "page"]));
    }

    #[test]
    fn number_fields_empty_for_non_objects() {
        assert!(number_fields(&SchemaShape::Number).is_empty());
        assert!(number_fields(&SchemaShape::Other).is_empty());
        assert!(number_fields(&schema().optional()).is_empty());
    }

    // ── Coercer ─────────────────────────────────────────────────────────────

    #[test]
    fn coerces_number_fields_only() {
        let args = json!({
            "count": "42",
            "limit": "  10 ",
            "page": "2.5",
            "query": "42",
            "filter": { "min": "1" }
        });

        let out = coerce_arguments(&args, &schema());

        assert_eq!(
            out,
            json!({
                "count": 42,
                "limit": 10,
                "page": 2.5,
                "query": "42",
                "filter": { "min": "1" }
            })
        );
    }

    #[test]
    fn leaves_non_canonical_strings() {
        let args = json!({ "count": "1e3", "limit": "not-a-number", "page": "1.50" });
        assert_eq!(coerce_arguments(&args, &schema()), args);
    }

    #[test]
    fn leaves_non_string_values() {
        let args = json!({ "count": 7, "limit": null, "page": true });
        assert_eq!(coerce_arguments(&args, &schema()), args);
    }

    #[test]
    fn keeps_fields_missing_from_schema() {
        let args = json!({ "count": "3", "extra": "4" });
        assert_eq!(
            coerce_arguments(&args, &schema()),
            json!({ "count": 3, "extra": "4" })
        );
    }

    #[test]
    fn non_object_arguments_pass_through() {
        for args in [Value::Null, json!("5"), json!(5), json!(["5"]), json!(true)] {
            assert_eq!(coerce_arguments(&args, &schema()), args);
            assert_eq!(coerce_arguments_owned(args.clone(), &schema()), args);
        }
    }

    #[test]
    fn input_is_not_mutated() {
        let args = json!({ "count": "42" });
        let before = args.clone();
        let out = coerce_arguments(&args, &schema());
        assert_eq!(args, before);
        assert_eq!(out["count"], json!(42));
    }

    #[test]
    fn owned_and_borrowed_agree() {
        let args = json!({ "count": "-8", "limit": "x", "query": "9" });
        assert_eq!(
            coerce_arguments(&args, &schema()),
            coerce_arguments_owned(args, &schema())
        );
    }

    #[test]
    fn coercion_is_idempotent() {
        let args = json!({ "count": "42", "limit": "1e3", "page": " 7 " });
        let once = coerce_arguments(&args, &schema());
        let twice = coerce_arguments(&once, &schema());
        assert_eq!(once, twice);
    }

    // ── Tool-call hook ──────────────────────────────────────────────────────

    fn tool() -> Tool {
        Tool {
            name: "search".to_string(),
            title: None,
            description: None,
            input_schema: json!({
                "type": "object",
                "properties": {
                    "q": { "type": "string" },
                    "limit": { "type": "integer", "default": 10 }
                },
                "required": ["q"]
            }),
        }
    }

    #[test]
    fn tool_call_arguments_are_coerced() {
        let params = ToolsCallParams {
            name: "search".to_string(),
            arguments: json!({ "q": "123", "limit": "25" }),
        };

        let out = coerce_tool_call(&tool(), params, &AdapterOptions::default());

        assert_eq!(out.name, "search");
        assert_eq!(out.arguments, json!({ "q": "123", "limit": 25 }));
    }

    #[test]
    fn tool_call_respects_integer_option() {
        let params = ToolsCallParams {
            name: "search".to_string(),
            arguments: json!({ "limit": "25" }),
        };
        let options = AdapterOptions {
            integer_as_number: false,
        };

        let out = coerce_tool_call(&tool(), params, &options);

        assert_eq!(out.arguments, json!({ "limit": "25" }));
    }

    #[test]
    fn tool_call_name_mismatch_is_untouched() {
        let params = ToolsCallParams {
            name: "other".to_string(),
            arguments: json!({ "limit": "25" }),
        };

        let out = coerce_tool_call(&tool(), params, &AdapterOptions::default());

        assert_eq!(out.arguments, json!({ "limit": "25" }));
    }
}
