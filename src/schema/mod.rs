//! Schema shapes understood by the argument coercer.
//!
//! The coercer never looks at a validation library's native schema
//! representation. Instead, an adapter translates whatever the caller has
//! (see [`json_schema`] for MCP's `inputSchema`) into the small closed
//! [`SchemaShape`] variant below, and coercion runs against that.

pub mod json_schema;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use json_schema::AdapterOptions;

/// The subset of schema structure relevant to numeric coercion.
///
/// Wrapper variants (`Optional`, `Default`, `Nullable`) may nest arbitrarily
/// around an inner shape. Anything the coercer does not care about is
/// [`SchemaShape::Other`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchemaShape {
    /// Numeric field
    Number,
    /// Object with named fields
    Object {
        /// Field name → field shape
        #[serde(default)]
        fields: BTreeMap<String, SchemaShape>,
    },
    /// Field may be absent
    Optional {
        /// Wrapped shape
        inner: Box<SchemaShape>,
    },
    /// Field falls back to `value` when absent
    Default {
        /// Wrapped shape
        inner: Box<SchemaShape>,
        /// Default value declared by the schema
        #[serde(default)]
        value: Value,
    },
    /// Field may be `null`
    Nullable {
        /// Wrapped shape
        inner: Box<SchemaShape>,
    },
    /// Any other type (string, boolean, array, unions, unknown)
    #[serde(other)]
    Other,
}

impl SchemaShape {
    /// Build an object shape from `(name, shape)` pairs.
    pub fn object<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, SchemaShape)>,
        K: Into<String>,
    {
        Self::Object {
            fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Wrap in an optional layer.
    #[must_use]
    pub fn optional(self) -> Self {
        Self::Optional {
            inner: Box::new(self),
        }
    }

    /// Wrap in a default layer carrying `value`.
    #[must_use]
    pub fn with_default(self, value: Value) -> Self {
        Self::Default {
            inner: Box::new(self),
            value,
        }
    }

    /// Wrap in a nullable layer.
    #[must_use]
    pub fn nullable(self) -> Self {
        Self::Nullable {
            inner: Box::new(self),
        }
    }

    /// Peel every optional/default/nullable layer and return the core shape.
    pub fn unwrap_modifiers(&self) -> &SchemaShape {
        let mut shape = self;
        while let Self::Optional { inner } | Self::Default { inner, .. } | Self::Nullable { inner } =
            shape
        {
            shape = inner.as_ref();
        }
        shape
    }

    /// Declared fields if this is an object shape.
    pub fn fields(&self) -> Option<&BTreeMap<String, SchemaShape>> {
        match self {
            Self::Object { fields } => Some(fields),
            _ => None,
        }
    }

    /// Translate a JSON Schema document into a shape.
    ///
    /// Shorthand for [`json_schema::from_json_schema`].
    pub fn from_json_schema(schema: &Value, options: &AdapterOptions) -> Self {
        json_schema::from_json_schema(schema, options)
    }
}
