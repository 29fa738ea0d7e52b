//! Host model abstraction.
//!
//! A model owns the root schema and a set of named properties, each with a
//! declared configuration and property kind. The converter only reads from
//! it through the [`Model`] and [`ModelProperty`] traits.
//!
//! [`ModelDefinition`] is a ready-made implementation that can be loaded from
//! a JSON document:
//!
//! ```json
//! {
//!   "schema": { "def": { "type": "object", "shape": { "id": { "def": { "type": "string" } } } } },
//!   "properties": {
//!     "id": { "config": { "required": true }, "propertyType": "UniqueId" }
//!   }
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ModelError, ModelResult};

/// One declared model property.
pub trait ModelProperty {
    /// The property's declared configuration, if any.
    fn config(&self) -> Option<&Value>;

    /// The property's declared kind (e.g. `"Object"`).
    fn property_type(&self) -> Option<&str>;
}

/// A host model exposing its schema and declared properties.
pub trait Model {
    /// Root schema node.
    fn schema(&self) -> &Value;

    /// Declared properties in declaration order.
    fn properties(&self) -> Vec<(&str, &dyn ModelProperty)>;
}

/// A property declared in a [`ModelDefinition`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub config: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
}

impl PropertyDefinition {
    /// Create a property with the given configuration.
    pub fn new(config: Value) -> Self {
        Self {
            config,
            property_type: None,
        }
    }

    /// Set the property kind.
    pub fn with_property_type(mut self, property_type: impl Into<String>) -> Self {
        self.property_type = Some(property_type.into());
        self
    }
}

impl ModelProperty for PropertyDefinition {
    fn config(&self) -> Option<&Value> {
        (!self.config.is_null()).then_some(&self.config)
    }

    fn property_type(&self) -> Option<&str> {
        self.property_type.as_deref()
    }
}

/// A serializable model: root schema plus declared properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelDefinition {
    #[serde(default)]
    pub schema: Value,

    #[serde(default)]
    pub properties: IndexMap<String, PropertyDefinition>,
}

impl ModelDefinition {
    /// Create a model around a root schema.
    pub fn new(schema: Value) -> Self {
        Self {
            schema,
            properties: IndexMap::new(),
        }
    }

    /// Add a property.
    pub fn with_property(mut self, name: impl Into<String>, property: PropertyDefinition) -> Self {
        self.properties.insert(name.into(), property);
        self
    }

    /// Parse a model document from JSON text.
    pub fn from_json_str(json: &str) -> ModelResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(value)
    }

    /// Build a model from an already parsed JSON document.
    pub fn from_json_value(value: Value) -> ModelResult<Self> {
        if !value.is_object() {
            return Err(ModelError::not_an_object(&value));
        }
        Ok(serde_json::from_value(value)?)
    }
}

impl Model for ModelDefinition {
    fn schema(&self) -> &Value {
        &self.schema
    }

    fn properties(&self) -> Vec<(&str, &dyn ModelProperty)> {
        self.properties
            .iter()
            .map(|(name, property)| (name.as_str(), property as &dyn ModelProperty))
            .collect()
    }
}
