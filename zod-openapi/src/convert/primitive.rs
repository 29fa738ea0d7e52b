//! String, number, literal, enum and date translators.

use serde_json::{Number, Value};
use tracing::{debug, trace};

use crate::node::SchemaNode;
use crate::openapi::{OpenApiSchema, SchemaType};
use crate::probe::{is_truthy, Probe, ProbeChain};

/// Constraint list of a string or number node.
const CHECKS: ProbeChain = ProbeChain::new(
    "checks",
    &[Probe::def(&["checks"]), Probe::node(&["_def", "checks"])],
);

/// Tag identifying what a single check constrains. Probes are rooted at the
/// check entry.
const CHECK_TAG: ProbeChain = ProbeChain::new(
    "check.tag",
    &[
        Probe::node(&["kind"]),
        Probe::node(&["check"]),
        Probe::node(&["def", "type"]),
        Probe::node(&["def", "check"]),
        Probe::node(&["_zod", "def", "check"]),
    ],
);

const CHECK_MIN: ProbeChain = ProbeChain::new(
    "check.min",
    &[
        Probe::node(&["value"]),
        Probe::node(&["minimum"]),
        Probe::node(&["def", "value"]),
        Probe::node(&["def", "minimum"]),
        Probe::node(&["_zod", "def", "value"]),
        Probe::node(&["_zod", "def", "minimum"]),
    ],
);

const CHECK_MAX: ProbeChain = ProbeChain::new(
    "check.max",
    &[
        Probe::node(&["value"]),
        Probe::node(&["maximum"]),
        Probe::node(&["def", "value"]),
        Probe::node(&["def", "maximum"]),
        Probe::node(&["_zod", "def", "value"]),
        Probe::node(&["_zod", "def", "maximum"]),
    ],
);

const CHECK_INCLUSIVE: ProbeChain = ProbeChain::new(
    "check.inclusive",
    &[
        Probe::node(&["inclusive"]),
        Probe::node(&["def", "inclusive"]),
        Probe::node(&["_zod", "def", "inclusive"]),
    ],
);

/// Single literal value.
const LITERAL_VALUE: ProbeChain = ProbeChain::new(
    "literal.value",
    &[
        Probe::def(&["value"]),
        Probe::def(&["_def", "value"]),
        Probe::node(&["_def", "value"]),
        Probe::node(&["value"]),
    ],
);

/// Multi-valued literal (`def.values`).
const LITERAL_VALUES: ProbeChain =
    ProbeChain::new("literal.values", &[Probe::def(&["values"])]);

/// Enumeration members, either a list or a name-to-value map.
const ENUM_VALUES: ProbeChain = ProbeChain::new(
    "enum.values",
    &[
        Probe::node(&["_def", "values"]),
        Probe::node(&["_def", "options"]),
        Probe::node(&["values"]),
        Probe::node(&["options"]),
        Probe::def(&["values"]),
        Probe::def(&["options"]),
        Probe::def(&["_def", "values"]),
        Probe::def(&["_def", "options"]),
        Probe::def(&["entries"]),
        Probe::def(&["enum"]),
    ],
);

/// Which untagged fallback keys apply to a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bounded {
    Length,
    Value,
}

impl Bounded {
    fn fallback_keys(self) -> (&'static str, &'static str) {
        match self {
            Self::Length => ("minLength", "maxLength"),
            Self::Value => ("minValue", "maxValue"),
        }
    }
}

/// Bounds and markers collected from a constraint list.
#[derive(Debug, Clone, Default, PartialEq)]
struct Constraints {
    min: Option<Number>,
    max: Option<Number>,
    integer: bool,
}

impl Constraints {
    /// Scan the node's checks in order. Later checks override earlier ones.
    fn scan(node: &SchemaNode<'_>, bounded: Bounded) -> Self {
        let Some(checks) = node.probe_where(&CHECKS, Value::is_array).and_then(Value::as_array)
        else {
            return Self::default();
        };

        checks
            .iter()
            .filter(|check| check.is_object())
            .fold(Self::default(), |mut acc, check| {
                if let Some(min) = check_bound(check, Side::Min, bounded) {
                    acc.min = Some(min);
                }
                if let Some(max) = check_bound(check, Side::Max, bounded) {
                    acc.max = Some(max);
                }
                acc.integer = acc.integer || is_integer_check(check);
                acc
            })
    }

    fn apply(self, schema: OpenApiSchema) -> OpenApiSchema {
        schema.with_minimum(self.min).with_maximum(self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Min,
    Max,
}

fn check_tag(check: &Value) -> Option<&str> {
    CHECK_TAG
        .resolve_where(check, None, Value::is_string)
        .and_then(Value::as_str)
}

fn is_inclusive(check: &Value) -> bool {
    CHECK_INCLUSIVE
        .resolve(check, None)
        .is_some_and(is_truthy)
}

fn check_bound(check: &Value, side: Side, bounded: Bounded) -> Option<Number> {
    let tagged = match (side, check_tag(check)) {
        (Side::Min, Some("min" | "min_length")) | (Side::Max, Some("max" | "max_length")) => {
            true
        }
        (Side::Min, Some("greater_than")) | (Side::Max, Some("less_than")) => is_inclusive(check),
        _ => false,
    };

    let chain = match side {
        Side::Min => &CHECK_MIN,
        Side::Max => &CHECK_MAX,
    };
    let tagged_value = tagged
        .then(|| chain.resolve_where(check, None, Value::is_number))
        .flatten();

    let (min_key, max_key) = bounded.fallback_keys();
    let key = match side {
        Side::Min => min_key,
        Side::Max => max_key,
    };
    let fallback = || check.get("def").and_then(|def| def.get(key)).filter(|v| v.is_number());

    tagged_value.or_else(fallback).and_then(|value| match value {
        Value::Number(n) => Some(n.clone()),
        _ => None,
    })
}

fn is_integer_check(check: &Value) -> bool {
    if check_tag(check) == Some("int") {
        return true;
    }
    // Newer layouts spell the marker inside a format name (`safeint`, `int32`).
    serde_json::to_string(check).is_ok_and(|compact| compact.contains("int"))
}

/// `{type: string, minimum?, maximum?}` from length checks.
pub(super) fn string(node: &SchemaNode<'_>) -> OpenApiSchema {
    let constraints = Constraints::scan(node, Bounded::Length);
    trace!(?constraints, "string constraints");
    constraints.apply(OpenApiSchema::string())
}

/// `{type: number|integer, minimum?, maximum?}` from value checks.
pub(super) fn number(node: &SchemaNode<'_>) -> OpenApiSchema {
    let constraints = Constraints::scan(node, Bounded::Value);
    trace!(?constraints, "number constraints");
    let schema_type = if constraints.integer {
        SchemaType::Integer
    } else {
        SchemaType::Number
    };
    constraints.apply(OpenApiSchema::of_type(schema_type))
}

/// Values of a literal node.
///
/// A single `value` is preferred, including an explicit `null`. Multi-valued
/// literals contribute every entry of `def.values`.
pub(super) fn literal_values(node: &SchemaNode<'_>) -> Vec<Value> {
    if let Some(value) = LITERAL_VALUE.hits(node.value(), node.def()).next() {
        return vec![value.clone()];
    }
    node.probe_where(&LITERAL_VALUES, Value::is_array)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

/// Members of an enumeration node, in declaration order.
///
/// Object maps contribute their values. Empty candidates are skipped.
pub(super) fn enum_values(node: &SchemaNode<'_>) -> Vec<Value> {
    let found = node.probe_where(&ENUM_VALUES, |candidate| match candidate {
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        _ => false,
    });
    match found {
        Some(Value::Array(items)) => items.clone(),
        Some(Value::Object(map)) => map.values().cloned().collect(),
        _ => Vec::new(),
    }
}

/// Only string literals carry an explicit `type`.
pub(super) fn literal(node: &SchemaNode<'_>) -> OpenApiSchema {
    let values = literal_values(node);
    if values.is_empty() {
        debug!("literal without a value");
        return OpenApiSchema::empty();
    }
    if values.iter().all(Value::is_string) {
        OpenApiSchema::string().with_enum(values)
    } else {
        OpenApiSchema::enumeration(values)
    }
}

/// Enumerations are always string-typed.
pub(super) fn enumeration(node: &SchemaNode<'_>) -> OpenApiSchema {
    OpenApiSchema::string().with_enum(enum_values(node))
}

/// Dates carry no format keyword.
pub(super) fn date() -> OpenApiSchema {
    OpenApiSchema::string()
}
