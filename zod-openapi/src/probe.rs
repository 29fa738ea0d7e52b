//! Probe chains for version-tolerant field lookup.
//!
//! The Zod schema tree does not have a stable internal layout: the same piece
//! of information (a wrapped inner type, an array element, a check bound) lives
//! under different keys depending on the library version that produced it.
//! Instead of scattering fallbacks through the translators, every lookup is
//! described once as a [`ProbeChain`]: an ordered list of key paths, each rooted
//! either at the node itself or at its definition record.
//!
//! ```rust
//! use serde_json::json;
//! use zod_openapi::probe::{Probe, ProbeChain};
//!
//! const INNER: ProbeChain = ProbeChain::new(
//!     "inner",
//!     &[Probe::def(&["innerType"]), Probe::def(&["inner"])],
//! );
//!
//! let node = json!({ "_def": { "inner": { "def": { "type": "string" } } } });
//! let def = node.get("_def");
//! assert!(INNER.resolve(&node, def).is_some());
//! ```

use serde_json::Value;
use tracing::trace;

/// Where a probe path starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Root {
    /// The schema node itself.
    Node,
    /// The node's definition record (`_def` or `def`).
    Def,
}

/// A single key path rooted at a node or its definition record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    /// Where the path starts.
    pub root: Root,
    /// Object keys to follow, in order.
    pub path: &'static [&'static str],
}

impl Probe {
    /// Create a probe rooted at the node.
    pub const fn node(path: &'static [&'static str]) -> Self {
        Self {
            root: Root::Node,
            path,
        }
    }

    /// Create a probe rooted at the definition record.
    pub const fn def(path: &'static [&'static str]) -> Self {
        Self {
            root: Root::Def,
            path,
        }
    }

    /// Follow this probe's path. Returns `None` when any step is missing.
    pub fn lookup<'v>(&self, node: &'v Value, def: Option<&'v Value>) -> Option<&'v Value> {
        let start = match self.root {
            Root::Node => Some(node),
            Root::Def => def,
        }?;
        lookup_path(start, self.path)
    }
}

/// Follow a key path through nested JSON objects.
pub fn lookup_path<'v>(value: &'v Value, path: &[&str]) -> Option<&'v Value> {
    path.iter().try_fold(value, |current, key| current.get(*key))
}

/// JavaScript-style truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// An ordered sequence of fallback lookups.
///
/// The chain is consulted front to back and the first acceptable hit wins.
#[derive(Debug, Clone, Copy)]
pub struct ProbeChain {
    name: &'static str,
    probes: &'static [Probe],
}

impl ProbeChain {
    /// Create a named chain from a static probe list.
    pub const fn new(name: &'static str, probes: &'static [Probe]) -> Self {
        Self { name, probes }
    }

    /// Name used in trace output.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The probes in lookup order.
    pub fn probes(&self) -> &'static [Probe] {
        self.probes
    }

    /// Every present value along the chain, in probe order. `null` values are
    /// included so callers that care about explicit nulls can see them.
    pub fn hits<'v>(
        &self,
        node: &'v Value,
        def: Option<&'v Value>,
    ) -> impl Iterator<Item = &'v Value> + 'v {
        let probes = self.probes;
        probes.iter().filter_map(move |probe| probe.lookup(node, def))
    }

    /// First present, non-null value.
    pub fn resolve<'v>(&self, node: &'v Value, def: Option<&'v Value>) -> Option<&'v Value> {
        self.resolve_where(node, def, |value| !value.is_null())
    }

    /// First present value accepted by `accept`.
    pub fn resolve_where<'v>(
        &self,
        node: &'v Value,
        def: Option<&'v Value>,
        accept: impl Fn(&Value) -> bool,
    ) -> Option<&'v Value> {
        let hit = self
            .probes
            .iter()
            .enumerate()
            .filter_map(|(index, probe)| probe.lookup(node, def).map(|value| (index, value)))
            .find(|(_, value)| accept(value));

        if let Some((index, _)) = hit {
            trace!(chain = self.name, index, "probe hit");
        }

        hit.map(|(_, value)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const CHAIN: ProbeChain = ProbeChain::new(
        "test",
        &[
            Probe::def(&["first"]),
            Probe::node(&["second"]),
            Probe::def(&["nested", "third"]),
        ],
    );

    #[test]
    fn test_first_hit_wins() {
        let node = json!({ "second": 2, "def": { "first": 1 } });
        let def = node.get("def");
        assert_eq!(CHAIN.resolve(&node, def), Some(&json!(1)));
    }

    #[test]
    fn test_null_is_skipped_by_resolve() {
        let node = json!({ "second": 2, "def": { "first": null } });
        let def = node.get("def");
        assert_eq!(CHAIN.resolve(&node, def), Some(&json!(2)));
        assert_eq!(CHAIN.hits(&node, def).count(), 2);
    }

    #[test]
    fn test_def_probes_skipped_without_def() {
        let node = json!({ "first": 1 });
        assert_eq!(CHAIN.resolve(&node, None), None);
    }

    #[test]
    fn test_nested_path() {
        let node = json!({ "def": { "nested": { "third": "x" } } });
        let def = node.get("def");
        assert_eq!(CHAIN.resolve(&node, def), Some(&json!("x")));
    }

    #[test]
    fn test_resolve_where_predicate() {
        let node = json!({ "second": "text", "def": { "first": 1, "nested": { "third": "x" } } });
        let def = node.get("def");
        let hit = CHAIN.resolve_where(&node, def, Value::is_string);
        assert_eq!(hit, Some(&json!("text")));
    }

    #[test]
    fn test_path_through_non_object() {
        assert_eq!(lookup_path(&json!([1, 2]), &["a"]), None);
        assert_eq!(lookup_path(&json!({ "a": 3 }), &["a", "b"]), None);
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("record")));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!([])));
    }
}
