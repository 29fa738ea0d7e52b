//! Array and record translators.

use tracing::debug;

use super::Converter;
use crate::node::SchemaNode;
use crate::openapi::OpenApiSchema;
use crate::probe::{is_truthy, Probe, ProbeChain};

/// Element schema of an array node.
const ARRAY_ELEMENT: ProbeChain = ProbeChain::new(
    "array.element",
    &[
        Probe::def(&["element"]),
        Probe::def(&["inner"]),
        Probe::def(&["schema"]),
        Probe::def(&["type"]),
        Probe::node(&["_def", "element"]),
        Probe::node(&["_def", "inner"]),
        Probe::node(&["_def", "schema"]),
    ],
);

/// Value schema of a record node.
const RECORD_VALUE: ProbeChain = ProbeChain::new(
    "record.value",
    &[
        Probe::node(&["_def", "valueType"]),
        Probe::node(&["_def", "value"]),
        Probe::node(&["_def", "type"]),
        Probe::def(&["valueType"]),
        Probe::def(&["value"]),
        Probe::def(&["type"]),
        Probe::def(&["_def", "valueType"]),
        Probe::def(&["_def", "value"]),
        Probe::def(&["_def", "type"]),
        Probe::def(&["_def", "element"]),
        Probe::def(&["element"]),
    ],
);

/// `{type: array, items}`. Only schema-shaped candidates qualify as the
/// element; otherwise items accept anything.
pub(super) fn array(
    converter: &Converter<'_>,
    node: &SchemaNode<'_>,
    depth: usize,
) -> OpenApiSchema {
    let element = node.probe_where(&ARRAY_ELEMENT, |candidate| {
        SchemaNode::new(candidate).is_schema()
    });

    let items = match element {
        Some(element) => converter.convert_at(element, depth + 1),
        None => {
            debug!(depth, "array without element schema");
            OpenApiSchema::empty()
        }
    };
    OpenApiSchema::array(items)
}

/// `{type: object, additionalProperties: <value>}`.
///
/// The first truthy candidate decides. When it is a tag string rather than
/// a node, the value schema is left open.
pub(super) fn record(
    converter: &Converter<'_>,
    node: &SchemaNode<'_>,
    depth: usize,
) -> OpenApiSchema {
    let values = match node.probe_where(&RECORD_VALUE, is_truthy) {
        Some(value) if value.is_object() => converter.convert_at(value, depth + 1),
        _ => {
            debug!(depth, "record without value schema");
            OpenApiSchema::empty()
        }
    };
    OpenApiSchema::record(values)
}
