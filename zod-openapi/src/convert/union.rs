//! Union translator.
//!
//! Unions are only modeled in two coarse ways: a union made purely of string
//! literals and enums collapses into a string enumeration, and a handful of
//! mixed unions degrade to `{type: string}`. Everything else is `{}`.

use serde_json::Value;
use tracing::debug;

use super::primitive::{enum_values, literal_values};
use crate::node::{NodeKind, SchemaNode};
use crate::openapi::OpenApiSchema;
use crate::probe::{Probe, ProbeChain};

/// Option list of a union node.
const OPTIONS: ProbeChain = ProbeChain::new(
    "union.options",
    &[Probe::node(&["options"]), Probe::def(&["options"])],
);

fn options<'v>(node: &SchemaNode<'v>) -> Vec<&'v Value> {
    match node.probe_where(&OPTIONS, |v| v.is_array() || v.is_object()) {
        Some(Value::Array(items)) => items.iter().collect(),
        Some(Value::Object(map)) => map.values().collect(),
        _ => Vec::new(),
    }
}

/// Values of every option when all options unwrap to literals or enums.
fn collect_literals(options: &[&Value]) -> Option<Vec<Value>> {
    let mut values = Vec::new();
    for option in options {
        let node = SchemaNode::new(option).unwrap();
        match node.kind() {
            NodeKind::Literal => values.extend(literal_values(&node)),
            NodeKind::Enum => values.extend(enum_values(&node)),
            _ => return None,
        }
    }
    Some(values)
}

/// Keep the first occurrence of each value.
fn dedupe(values: Vec<Value>) -> Vec<Value> {
    let mut unique: Vec<Value> = Vec::with_capacity(values.len());
    for value in values {
        if !unique.contains(&value) {
            unique.push(value);
        }
    }
    unique
}

pub(super) fn union(node: &SchemaNode<'_>) -> OpenApiSchema {
    let options = options(node);

    if let Some(values) = collect_literals(&options) {
        if !values.is_empty() && values.iter().all(Value::is_string) {
            return OpenApiSchema::string().with_enum(dedupe(values));
        }
    }

    // Options are classified by their own tag, wrappers included.
    let kinds: Vec<NodeKind> = options
        .iter()
        .map(|option| SchemaNode::new(option).kind())
        .collect();
    let has = |kind: NodeKind| kinds.contains(&kind);

    if has(NodeKind::Date) || (has(NodeKind::String) && has(NodeKind::Number)) {
        OpenApiSchema::string()
    } else {
        debug!(?kinds, "union not modeled");
        OpenApiSchema::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::FieldTable;
    use crate::Converter;
    use serde_json::json;

    fn literal(value: Value) -> Value {
        json!({ "def": { "type": "literal", "value": value } })
    }

    fn union_of(options: Vec<Value>) -> Value {
        json!({ "def": { "type": "union", "options": options } })
    }

    fn convert(node: &Value) -> Value {
        let fields = FieldTable::new();
        Converter::new(&fields).convert(node).to_value().unwrap()
    }

    #[test]
    fn test_string_literals_collapse_in_first_seen_order() {
        let node = union_of(vec![
            literal(json!("b")),
            literal(json!("a")),
            literal(json!("b")),
        ]);
        assert_eq!(convert(&node), json!({ "type": "string", "enum": ["b", "a"] }));
    }

    #[test]
    fn test_enum_options_flatten() {
        let node = union_of(vec![
            json!({ "def": { "type": "enum", "entries": { "X": "x", "Y": "y" } } }),
            json!({ "def": { "type": "optional", "innerType": literal(json!("z")) } }),
        ]);
        assert_eq!(
            convert(&node),
            json!({ "type": "string", "enum": ["x", "y", "z"] })
        );
    }

    #[test]
    fn test_number_literals_do_not_collapse() {
        let node = union_of(vec![literal(json!(1)), literal(json!(2))]);
        assert_eq!(convert(&node), json!({}));
    }

    #[test]
    fn test_non_literal_member_prevents_collapse() {
        let node = union_of(vec![literal(json!("a")), json!({ "def": { "type": "boolean" } })]);
        assert_eq!(convert(&node), json!({}));
    }

    #[test]
    fn test_string_number_union() {
        let node = union_of(vec![
            json!({ "def": { "type": "string" } }),
            json!({ "_def": { "typeName": "ZodNumber" } }),
        ]);
        assert_eq!(convert(&node), json!({ "type": "string" }));
    }

    #[test]
    fn test_date_union() {
        let node = union_of(vec![
            json!({ "def": { "type": "date" } }),
            json!({ "def": { "type": "boolean" } }),
        ]);
        assert_eq!(convert(&node), json!({ "type": "string" }));
    }

    #[test]
    fn test_wrapped_option_is_not_string_for_heuristic() {
        let node = union_of(vec![
            json!({ "def": { "type": "optional", "innerType": { "def": { "type": "string" } } } }),
            json!({ "def": { "type": "number" } }),
        ]);
        assert_eq!(convert(&node), json!({}));
    }

    #[test]
    fn test_options_missing() {
        assert_eq!(convert(&json!({ "def": { "type": "union" } })), json!({}));
    }
}
