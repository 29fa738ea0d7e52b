//! OpenAPI schema object produced by the converter.
//!
//! [`OpenApiSchema`] is deliberately flat: it mirrors the subset of the OpenAPI
//! schema object the converter emits and nothing more. Length bounds share the
//! `minimum`/`maximum` keys with numeric bounds.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// The `type` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
}

/// The `additionalProperties` keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    /// `false` for closed objects.
    Bool(bool),
    /// Value schema for key-value maps.
    Schema(Box<OpenApiSchema>),
}

/// A structural description of one value.
///
/// An all-`None` schema serializes as `{}` and accepts anything.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenApiSchema {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,

    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, OpenApiSchema>>,

    /// Field names in declaration order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<AdditionalProperties>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<OpenApiSchema>>,
}

impl OpenApiSchema {
    /// The untyped schema `{}`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A schema with only a `type`.
    pub fn of_type(schema_type: SchemaType) -> Self {
        Self {
            schema_type: Some(schema_type),
            ..Self::default()
        }
    }

    /// `{ "type": "string" }`
    pub fn string() -> Self {
        Self::of_type(SchemaType::String)
    }

    /// `{ "type": "object" }`
    pub fn object() -> Self {
        Self::of_type(SchemaType::Object)
    }

    /// `{ "type": "array", "items": ... }`
    pub fn array(items: OpenApiSchema) -> Self {
        Self::of_type(SchemaType::Array).with_items(items)
    }

    /// `{ "type": "object", "additionalProperties": ... }`
    pub fn record(values: OpenApiSchema) -> Self {
        Self::object().with_additional_properties(AdditionalProperties::Schema(Box::new(values)))
    }

    /// `{ "enum": [...] }` without a type.
    pub fn enumeration(values: Vec<Value>) -> Self {
        Self::empty().with_enum(values)
    }

    /// Set the `enum` values.
    pub fn with_enum(mut self, values: Vec<Value>) -> Self {
        self.enum_values = Some(values);
        self
    }

    /// Set `minimum` when a bound is given. An existing value is overwritten.
    pub fn with_minimum(mut self, minimum: Option<Number>) -> Self {
        if minimum.is_some() {
            self.minimum = minimum;
        }
        self
    }

    /// Set `maximum` when a bound is given. An existing value is overwritten.
    pub fn with_maximum(mut self, maximum: Option<Number>) -> Self {
        if maximum.is_some() {
            self.maximum = maximum;
        }
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the `nullable` flag.
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = Some(nullable);
        self
    }

    /// Set the object properties.
    pub fn with_properties(mut self, properties: IndexMap<String, OpenApiSchema>) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Set the required field list.
    pub fn with_required(mut self, required: Vec<String>) -> Self {
        self.required = Some(required);
        self
    }

    /// Set `additionalProperties`.
    pub fn with_additional_properties(mut self, additional: AdditionalProperties) -> Self {
        self.additional_properties = Some(additional);
        self
    }

    /// Set the array item schema.
    pub fn with_items(mut self, items: OpenApiSchema) -> Self {
        self.items = Some(Box::new(items));
        self
    }

    /// Whether no keyword is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether the type is `number` or `integer`.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self.schema_type,
            Some(SchemaType::Number | SchemaType::Integer)
        )
    }

    /// Whether the type is `string`.
    pub fn is_string(&self) -> bool {
        self.schema_type == Some(SchemaType::String)
    }

    /// An object schema that says nothing about its contents: no properties
    /// and no permissive `additionalProperties`.
    pub fn is_bare_object(&self) -> bool {
        self.schema_type == Some(SchemaType::Object)
            && self.properties.as_ref().map_or(true, IndexMap::is_empty)
            && !matches!(
                self.additional_properties,
                Some(AdditionalProperties::Bool(true) | AdditionalProperties::Schema(_))
            )
    }

    /// Serialize to a JSON value.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}
