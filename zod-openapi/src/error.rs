//! Error types for loading model documents.
//!
//! Conversion itself never fails; these errors only arise when a model
//! definition is read from JSON.

use thiserror::Error;

/// Result type alias for model loading.
pub type ModelResult<T> = Result<T, ModelError>;

/// Error reading a model definition document.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The document is not valid JSON or does not match the model layout.
    #[error("Invalid model document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document root is not a JSON object.
    #[error("Model document must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

impl ModelError {
    /// Create a not-an-object error from the offending value.
    pub fn not_an_object(value: &serde_json::Value) -> Self {
        let found = match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "a boolean",
            serde_json::Value::Number(_) => "a number",
            serde_json::Value::String(_) => "a string",
            serde_json::Value::Array(_) => "an array",
            serde_json::Value::Object(_) => "an object",
        };
        Self::NotAnObject { found }
    }
}
