//! Recursive schema translation.
//!
//! [`Converter`] walks a schema tree top-down. Each node is unwrapped,
//! classified once and handed to the translator for its [`NodeKind`]:
//!
//! | Kind | Translator | Output |
//! |------|------------|--------|
//! | String | `primitive` | `{type: string, minimum?, maximum?}` |
//! | Number | `primitive` | `{type: number\|integer, minimum?, maximum?}` |
//! | Boolean | inline | `{type: boolean}` |
//! | Literal / Enum | `primitive` | `{type?: string, enum: [...]}` |
//! | Date | `primitive` | `{type: string}` |
//! | Object | `object` | `{type: object, properties, additionalProperties: false, required?}` |
//! | Array | `collection` | `{type: array, items}` |
//! | Record | `collection` | `{type: object, additionalProperties: <value>}` |
//! | Union | `union` | `{type: string, enum}`, `{type: string}` or `{}` |
//! | Unknown | inline | `{}` |
//!
//! Translation is total: malformed input degrades to a less specific schema
//! and never fails.

mod collection;
mod object;
mod primitive;
mod union;

use serde_json::Value;
use tracing::{debug, warn};

use crate::metadata::FieldTable;
use crate::node::{NodeKind, SchemaNode};
use crate::openapi::{OpenApiSchema, SchemaType};

/// Default bound on translation nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options controlling a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Nodes nested deeper than this translate to `{}`.
    pub max_depth: usize,
}

impl ConvertOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Translates schema nodes into [`OpenApiSchema`] values.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use zod_openapi::{Converter, FieldTable};
///
/// let fields = FieldTable::new();
/// let node = json!({ "def": { "type": "array", "element": { "def": { "type": "boolean" } } } });
///
/// let schema = Converter::new(&fields).convert(&node);
/// assert_eq!(
///     schema.to_value().unwrap(),
///     json!({ "type": "array", "items": { "type": "boolean" } })
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Converter<'a> {
    fields: &'a FieldTable,
    options: ConvertOptions,
}

impl<'a> Converter<'a> {
    /// Create a converter reading field metadata from `fields`.
    pub fn new(fields: &'a FieldTable) -> Self {
        Self {
            fields,
            options: ConvertOptions::default(),
        }
    }

    /// Replace the conversion options.
    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    /// The field metadata table.
    pub fn fields(&self) -> &'a FieldTable {
        self.fields
    }

    /// The conversion options.
    pub fn options(&self) -> ConvertOptions {
        self.options
    }

    /// Translate a root node.
    pub fn convert(&self, node: &Value) -> OpenApiSchema {
        self.convert_at(node, 0)
    }

    /// Translate a node found at the given nesting depth.
    ///
    /// Depth only matters for objects: the required list and external field
    /// descriptions apply at depth 0.
    pub fn convert_at(&self, node: &Value, depth: usize) -> OpenApiSchema {
        if depth > self.options.max_depth {
            warn!(depth, max_depth = self.options.max_depth, "nesting limit reached");
            return OpenApiSchema::empty();
        }

        let node = SchemaNode::new(node).unwrap();
        let kind = node.kind();
        debug!(?kind, depth, "translating node");

        match kind {
            NodeKind::String => primitive::string(&node),
            NodeKind::Number => primitive::number(&node),
            NodeKind::Boolean => OpenApiSchema::of_type(SchemaType::Boolean),
            NodeKind::Literal => primitive::literal(&node),
            NodeKind::Enum => primitive::enumeration(&node),
            NodeKind::Date => primitive::date(),
            NodeKind::Object => object::object(self, &node, depth),
            NodeKind::Array => collection::array(self, &node, depth),
            NodeKind::Record => collection::record(self, &node, depth),
            NodeKind::Union => union::union(&node),
            NodeKind::Modifier(modifier) => {
                debug!(?modifier, "modifier without inner schema");
                OpenApiSchema::empty()
            }
            NodeKind::Unknown => OpenApiSchema::empty(),
        }
    }
}
