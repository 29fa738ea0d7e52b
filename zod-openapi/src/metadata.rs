//! Per-field metadata supplied by the host model.
//!
//! Field metadata is independent of the schema tree. It is keyed by field
//! name and merged into each object property during conversion (see
//! [`crate::merge`]).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::model::Model;
use crate::node::is_non_empty_str;

/// Property kind marking a free-form object field.
pub const OBJECT_PROPERTY_KIND: &str = "Object";

/// Externally supplied annotations for one object field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMetadata {
    #[serde(default)]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Declared property kind (e.g. `"Object"`, `"Text"`).
    #[serde(
        default,
        alias = "propertyType",
        skip_serializing_if = "Option::is_none"
    )]
    pub property_kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<Number>,
}

impl FieldMetadata {
    /// Create empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive metadata from a field's declared configuration and its declared
    /// property kind.
    ///
    /// The configuration is read leniently: entries with an unexpected JSON
    /// type are ignored rather than rejected. An explicit `property_kind`
    /// overrides a `propertyType` found in the configuration.
    pub fn from_config(config: Option<&Value>, property_kind: Option<&str>) -> Self {
        let get = |key: &str| config.and_then(|c| c.get(key));
        let number = |key: &str| match get(key) {
            Some(Value::Number(n)) => Some(n.clone()),
            _ => None,
        };
        let text = |key: &str| {
            get(key)
                .filter(|v| is_non_empty_str(v))
                .and_then(Value::as_str)
                .map(String::from)
        };

        Self {
            required: get("required").and_then(Value::as_bool).unwrap_or(false),
            description: text("description"),
            property_kind: property_kind.map(String::from).or_else(|| text("propertyType")),
            min_value: number("minValue"),
            max_value: number("maxValue"),
            min_length: number("minLength"),
            max_length: number("maxLength"),
        }
    }

    /// Set the required flag.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the declared property kind.
    pub fn with_property_kind(mut self, kind: impl Into<String>) -> Self {
        self.property_kind = Some(kind.into());
        self
    }

    /// Set numeric value bounds.
    pub fn with_value_bounds(mut self, min: Option<Number>, max: Option<Number>) -> Self {
        self.min_value = min;
        self.max_value = max;
        self
    }

    /// Set string length bounds.
    pub fn with_length_bounds(mut self, min: Option<Number>, max: Option<Number>) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    /// Whether the field is declared as a free-form object property.
    pub fn is_object_property(&self) -> bool {
        self.property_kind.as_deref() == Some(OBJECT_PROPERTY_KIND)
    }
}

/// Field metadata keyed by field name, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldTable {
    fields: IndexMap<String, FieldMetadata>,
}

impl FieldTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table from a host model's properties.
    pub fn from_model<M: Model + ?Sized>(model: &M) -> Self {
        model
            .properties()
            .into_iter()
            .map(|(name, property)| {
                (
                    name.to_string(),
                    FieldMetadata::from_config(property.config(), property.property_type()),
                )
            })
            .collect()
    }

    /// Insert or replace a field's metadata.
    pub fn insert(&mut self, name: impl Into<String>, metadata: FieldMetadata) {
        self.fields.insert(name.into(), metadata);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_field(mut self, name: impl Into<String>, metadata: FieldMetadata) -> Self {
        self.insert(name, metadata);
        self
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&FieldMetadata> {
        self.fields.get(name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldMetadata)> {
        self.fields.iter().map(|(name, meta)| (name.as_str(), meta))
    }
}

impl FromIterator<(String, FieldMetadata)> for FieldTable {
    fn from_iter<I: IntoIterator<Item = (String, FieldMetadata)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
