//! # zod-openapi
//!
//! Convert [Zod](https://zod.dev/) validation schemas, together with the
//! per-field metadata of the model that owns them, into OpenAPI schema objects.
//!
//! ## Overview
//!
//! The input schema tree is an opaque JSON document whose internal layout
//! varies across Zod releases, so every layout detail is treated as optional:
//! every lookup goes through a [`ProbeChain`](probe::ProbeChain) of candidate key
//! paths, every node is classified into a closed [`NodeKind`], and anything
//! unexpected degrades to a less specific schema instead of failing.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use zod_openapi::{model_to_openapi, ModelDefinition};
//!
//! let model = ModelDefinition::from_json_value(json!({
//!     "schema": {
//!         "def": {
//!             "type": "object",
//!             "shape": {
//!                 "id": { "def": { "type": "string" } },
//!                 "age": { "def": { "type": "optional", "innerType": { "def": { "type": "number" } } } }
//!             }
//!         }
//!     },
//!     "properties": {
//!         "id": { "config": { "required": true, "description": "Identifier" } }
//!     }
//! }))
//! .unwrap();
//!
//! let schema = model_to_openapi(&model);
//! assert_eq!(
//!     schema.to_value().unwrap(),
//!     json!({
//!         "type": "object",
//!         "properties": {
//!             "id": { "type": "string", "description": "Identifier" },
//!             "age": { "type": "number" }
//!         },
//!         "required": ["id"],
//!         "additionalProperties": false
//!     })
//! );
//! ```
//!
//! ## Supported Kinds
//!
//! | Zod | OpenAPI |
//! |-----|---------|
//! | `z.string().min(a).max(b)` | `{type: "string", minimum: a, maximum: b}` |
//! | `z.number()` / `.int()` | `{type: "number"}` / `{type: "integer"}` |
//! | `z.boolean()` | `{type: "boolean"}` |
//! | `z.literal("x")` | `{type: "string", enum: ["x"]}` |
//! | `z.enum([...])`, `z.nativeEnum(E)` | `{type: "string", enum: [...]}` |
//! | `z.date()` | `{type: "string"}` |
//! | `z.object({...})` | `{type: "object", properties, additionalProperties: false, required}` |
//! | `z.array(T)` | `{type: "array", items: T}` |
//! | `z.record(K, V)` | `{type: "object", additionalProperties: V}` |
//! | `z.union([...])` | see [`convert`] |
//! | `.optional()`, `.nullable()`, `.nullish()`, `.default()` | inner schema |
//!
//! ## Field Metadata
//!
//! | Key | Effect |
//! |-----|--------|
//! | `required` | Required-list membership of free-form object fields |
//! | `description` | Property description at the root level |
//! | `propertyType: "Object"` | Rescue untyped fields as `{type: "object"}` |
//! | `minValue` / `maxValue` | `minimum` / `maximum` on numeric properties |
//! | `minLength` / `maxLength` | `minimum` / `maximum` on string properties |

pub mod convert;
pub mod error;
pub mod merge;
pub mod metadata;
pub mod model;
pub mod node;
pub mod openapi;
pub mod probe;

use serde_json::Value;
use tracing::debug;

pub use convert::{ConvertOptions, Converter, DEFAULT_MAX_DEPTH};
pub use error::{ModelError, ModelResult};
pub use metadata::{FieldMetadata, FieldTable, OBJECT_PROPERTY_KIND};
pub use model::{Model, ModelDefinition, ModelProperty, PropertyDefinition};
pub use node::{unwrap, ModifierKind, NodeKind, SchemaNode};
pub use openapi::{AdditionalProperties, OpenApiSchema, SchemaType};

/// Convert a model's root schema, merging in its field metadata.
///
/// Non-object roots are returned as translated, without an object wrapper.
pub fn model_to_openapi<M: Model + ?Sized>(model: &M) -> OpenApiSchema {
    convert_with_options(model, ConvertOptions::default())
}

/// [`model_to_openapi`] with explicit options.
pub fn convert_with_options<M: Model + ?Sized>(
    model: &M,
    options: ConvertOptions,
) -> OpenApiSchema {
    let fields = FieldTable::from_model(model);
    debug!(fields = fields.len(), "converting model");
    Converter::new(&fields)
        .with_options(options)
        .convert(model.schema())
}

/// Convert a bare schema tree against a prepared metadata table.
pub fn schema_to_openapi(schema: &Value, fields: &FieldTable) -> OpenApiSchema {
    Converter::new(fields).convert(schema)
}
