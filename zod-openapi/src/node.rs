//! Schema node introspection.
//!
//! This module turns an opaque Zod schema node (a JSON object whose layout
//! depends on the library version that produced it) into a [`NodeKind`], and
//! strips modifier wrappers (`optional`, `nullable`, `nullish`, `default`)
//! until a concrete node is reached.
//!
//! # Accepted layouts
//!
//! | Layout | Definition record | Kind tag |
//! |--------|-------------------|----------|
//! | Legacy | `_def` | `_def.typeName` (e.g. `"ZodString"`) |
//! | Current | `def` | `def.type` (e.g. `"string"`) |
//!
//! Both layouts normalize to the same [`NodeKind`]. Anything missing or
//! malformed classifies as [`NodeKind::Unknown`].

use serde_json::Value;
use tracing::trace;

use crate::probe::{Probe, ProbeChain};

/// Keys under which the definition record may live, in preference order.
const DEF_KEYS: [&str; 2] = ["_def", "def"];

/// Inner payload of a modifier wrapper.
const INNER_TYPE: ProbeChain = ProbeChain::new(
    "modifier.inner",
    &[
        Probe::def(&["innerType"]),
        Probe::def(&["type"]),
        Probe::def(&["schema"]),
        Probe::def(&["payload"]),
        Probe::def(&["value"]),
        Probe::def(&["inner"]),
        Probe::def(&["_def", "inner"]),
        Probe::def(&["_def", "type"]),
    ],
);

/// Inline description attached to a node.
const DESCRIPTION: ProbeChain = ProbeChain::new(
    "node.description",
    &[
        Probe::node(&["description"]),
        Probe::node(&["_def", "description"]),
        Probe::node(&["def", "description"]),
    ],
);

/// Modifier wrapper kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierKind {
    /// `.optional()`
    Optional,
    /// `.nullable()`
    Nullable,
    /// `.nullish()`
    Nullish,
    /// `.default(value)`
    Default,
}

/// Canonical node kinds.
///
/// Every translator switches over this enum rather than re-inspecting the raw
/// node shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    String,
    Number,
    Boolean,
    Literal,
    Enum,
    Object,
    Array,
    Union,
    Record,
    Date,
    /// A wrapper whose only role is to modify its single inner node.
    Modifier(ModifierKind),
    /// Absent, malformed or unsupported node.
    Unknown,
}

impl NodeKind {
    /// Classify a lowercase kind tag (`"string"`, `"nativeEnum"`, ...).
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "string" => Self::String,
            "number" => Self::Number,
            "boolean" => Self::Boolean,
            "literal" => Self::Literal,
            "enum" | "nativeEnum" => Self::Enum,
            "object" => Self::Object,
            "array" => Self::Array,
            "union" => Self::Union,
            "record" => Self::Record,
            "date" => Self::Date,
            "optional" => Self::Modifier(ModifierKind::Optional),
            "nullable" => Self::Modifier(ModifierKind::Nullable),
            "nullish" => Self::Modifier(ModifierKind::Nullish),
            "default" => Self::Modifier(ModifierKind::Default),
            _ => Self::Unknown,
        }
    }

    /// Classify a legacy type name (`"ZodString"`, `"ZodNativeEnum"`, ...).
    pub fn from_type_name(name: &str) -> Self {
        let tag = name.strip_prefix("Zod").unwrap_or(name);
        let mut chars = tag.chars();
        let normalized: String = match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        };
        Self::from_tag(&normalized)
    }

    /// Whether this kind is a modifier wrapper.
    pub fn is_modifier(&self) -> bool {
        matches!(self, Self::Modifier(_))
    }

    /// Whether this kind carries a fixed set of values.
    pub fn is_literal_like(&self) -> bool {
        matches!(self, Self::Literal | Self::Enum)
    }
}

/// A borrowed view of one schema node and its definition record.
#[derive(Debug, Clone, Copy)]
pub struct SchemaNode<'v> {
    value: &'v Value,
    def: Option<&'v Value>,
}

impl<'v> SchemaNode<'v> {
    /// Wrap a raw value. Never fails; a value without a definition record
    /// simply classifies as [`NodeKind::Unknown`].
    pub fn new(value: &'v Value) -> Self {
        let def = DEF_KEYS
            .iter()
            .filter_map(|key| value.get(*key))
            .find(|def| def.is_object());
        Self { value, def }
    }

    /// The raw node.
    pub fn value(&self) -> &'v Value {
        self.value
    }

    /// The definition record, if the node has one.
    pub fn def(&self) -> Option<&'v Value> {
        self.def
    }

    /// Whether the node looks like a schema (carries a definition record).
    pub fn is_schema(&self) -> bool {
        self.def.is_some()
    }

    /// Resolve a probe chain against this node.
    pub fn probe(&self, chain: &ProbeChain) -> Option<&'v Value> {
        chain.resolve(self.value, self.def)
    }

    /// Resolve a probe chain, accepting only values matching `accept`.
    pub fn probe_where(
        &self,
        chain: &ProbeChain,
        accept: impl Fn(&Value) -> bool,
    ) -> Option<&'v Value> {
        chain.resolve_where(self.value, self.def, accept)
    }

    /// Classify the node.
    ///
    /// A string `def.type` takes precedence; otherwise `def.typeName` is used.
    pub fn kind(&self) -> NodeKind {
        let Some(def) = self.def else {
            return NodeKind::Unknown;
        };
        if let Some(tag) = def.get("type").and_then(Value::as_str) {
            return NodeKind::from_tag(tag);
        }
        def.get("typeName")
            .and_then(Value::as_str)
            .map(NodeKind::from_type_name)
            .unwrap_or(NodeKind::Unknown)
    }

    /// The node's inline description, if any.
    pub fn description(&self) -> Option<&'v str> {
        self.probe_where(&DESCRIPTION, is_non_empty_str)
            .and_then(Value::as_str)
    }

    /// Strip one modifier layer. Returns `self` unchanged when the node is not
    /// a modifier or its inner payload cannot be found.
    pub fn unwrap_once(&self) -> SchemaNode<'v> {
        let kind = self.kind();
        if !kind.is_modifier() {
            return *self;
        }
        match self.probe_where(&INNER_TYPE, Value::is_object) {
            Some(inner) => {
                trace!(?kind, "unwrapped modifier");
                SchemaNode::new(inner)
            }
            None => *self,
        }
    }

    /// Strip modifier layers until a concrete node is reached.
    pub fn unwrap(&self) -> SchemaNode<'v> {
        let mut current = *self;
        loop {
            let next = current.unwrap_once();
            if std::ptr::eq(next.value, current.value) {
                return current;
            }
            current = next;
        }
    }
}

/// Strip modifier wrappers from a raw node.
///
/// Unwrapping an already concrete node returns the same reference.
pub fn unwrap(value: &Value) -> &Value {
    SchemaNode::new(value).unwrap().value()
}

/// Accepts non-empty JSON strings.
pub(crate) fn is_non_empty_str(value: &Value) -> bool {
    value.as_str().is_some_and(|s| !s.is_empty())
}
