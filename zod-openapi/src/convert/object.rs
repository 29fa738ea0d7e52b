//! Object translator.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use super::Converter;
use crate::merge::{apply_bounds, merge_description, needs_object_rescue, rescued_object};
use crate::node::{is_non_empty_str, SchemaNode};
use crate::openapi::{AdditionalProperties, OpenApiSchema};
use crate::probe::{Probe, ProbeChain};

/// Field map of an object node.
const SHAPE: ProbeChain = ProbeChain::new(
    "object.shape",
    &[
        Probe::node(&["shape"]),
        Probe::def(&["shape"]),
        Probe::node(&["properties"]),
        Probe::def(&["properties"]),
    ],
);

/// Description of the object itself.
const OBJECT_DESCRIPTION: ProbeChain = ProbeChain::new(
    "object.description",
    &[
        Probe::node(&["_def", "description"]),
        Probe::node(&["def", "description"]),
        Probe::node(&["description"]),
    ],
);

/// One translated property and whether it belongs in the required list.
struct ResolvedField {
    schema: OpenApiSchema,
    required: bool,
}

pub(super) fn object(
    converter: &Converter<'_>,
    node: &SchemaNode<'_>,
    depth: usize,
) -> OpenApiSchema {
    let shape = node
        .probe_where(&SHAPE, Value::is_object)
        .and_then(Value::as_object)
        .filter(|shape| !shape.is_empty());
    let Some(shape) = shape else {
        debug!(depth, "object without fields");
        return OpenApiSchema::object();
    };

    let (properties, required) = resolve_fields(converter, shape, depth);

    let mut schema = OpenApiSchema::object()
        .with_properties(properties)
        .with_additional_properties(AdditionalProperties::Bool(false));

    if let Some(description) = node
        .probe_where(&OBJECT_DESCRIPTION, is_non_empty_str)
        .and_then(Value::as_str)
    {
        schema = schema.with_description(description);
    }

    // Nested objects never carry a required list.
    if depth == 0 && !required.is_empty() {
        schema = schema.with_required(required);
    }

    schema
}

fn resolve_fields(
    converter: &Converter<'_>,
    shape: &Map<String, Value>,
    depth: usize,
) -> (IndexMap<String, OpenApiSchema>, Vec<String>) {
    let mut properties = IndexMap::with_capacity(shape.len());
    let mut required = Vec::new();

    for (name, child) in shape {
        let field = resolve_field(converter, name, child, depth);
        trace!(field = %name, required = field.required, "resolved field");
        if field.required {
            required.push(name.clone());
        }
        properties.insert(name.clone(), field.schema);
    }

    (properties, required)
}

fn resolve_field(
    converter: &Converter<'_>,
    name: &str,
    child: &Value,
    depth: usize,
) -> ResolvedField {
    let structural = converter.convert_at(child, depth + 1);

    let wrapper = SchemaNode::new(child);
    let inline = wrapper.unwrap().description().or_else(|| wrapper.description());
    let metadata = converter.fields().get(name);

    let schema = merge_description(structural, metadata, inline, depth);

    match metadata {
        Some(meta) if needs_object_rescue(&schema, meta) => ResolvedField {
            schema: rescued_object(meta),
            required: meta.required,
        },
        _ => ResolvedField {
            schema: match metadata {
                Some(meta) => apply_bounds(schema, meta),
                None => schema,
            },
            required: !wrapper.kind().is_modifier(),
        },
    }
}
