//! Merging field metadata into structurally derived schemas.
//!
//! Precedence rules:
//!
//! | Concern | Rule |
//! |---------|------|
//! | Description | External description at depth 0, otherwise the inline one |
//! | Bounds | Metadata bounds overwrite structural ones |
//! | Free-form objects | `propertyKind == "Object"` rescues an empty result |
//! | Required | Modifier-wrapped children are optional; rescued fields follow metadata |

use tracing::debug;

use crate::metadata::FieldMetadata;
use crate::openapi::OpenApiSchema;

/// Attach a description to a property schema.
///
/// The external description wins only at the root nesting level. Below the
/// root the child's inline description is used. With neither, the schema is
/// returned as is.
pub fn merge_description(
    schema: OpenApiSchema,
    metadata: Option<&FieldMetadata>,
    inline: Option<&str>,
    depth: usize,
) -> OpenApiSchema {
    let external = metadata.and_then(|meta| meta.description.as_deref());
    match (external, inline) {
        (Some(external), _) if depth == 0 => schema.with_description(external),
        (_, Some(inline)) => schema.with_description(inline),
        _ => schema,
    }
}

/// Overwrite bounds with the ones declared in metadata.
///
/// Numeric schemas take `minValue`/`maxValue`; string schemas take
/// `minLength`/`maxLength`. Both land on `minimum`/`maximum`.
pub fn apply_bounds(schema: OpenApiSchema, metadata: &FieldMetadata) -> OpenApiSchema {
    if schema.is_numeric() {
        schema
            .with_minimum(metadata.min_value.clone())
            .with_maximum(metadata.max_value.clone())
    } else if schema.is_string() {
        schema
            .with_minimum(metadata.min_length.clone())
            .with_maximum(metadata.max_length.clone())
    } else {
        schema
    }
}

/// Whether a property schema should be replaced by a free-form object.
pub fn needs_object_rescue(schema: &OpenApiSchema, metadata: &FieldMetadata) -> bool {
    metadata.is_object_property() && (schema.is_empty() || schema.is_bare_object())
}

/// The schema used for a rescued free-form object field.
pub fn rescued_object(metadata: &FieldMetadata) -> OpenApiSchema {
    debug!(required = metadata.required, "rescuing free-form object field");
    if metadata.required {
        OpenApiSchema::object()
    } else {
        OpenApiSchema::object().with_nullable(true)
    }
}
