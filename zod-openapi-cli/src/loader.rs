//! Reading model and OpenAPI documents from disk.

use crate::error::LoadError;
use serde_json::Value;
use std::path::Path;
use tracing::debug;
use zod_openapi::ModelDefinition;

fn read(path: &Path) -> Result<String, LoadError> {
    if !path.exists() {
        return Err(LoadError::not_found(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load a model document (`{"schema": ..., "properties": ...}`).
pub fn load_model(path: &Path) -> Result<ModelDefinition, LoadError> {
    let content = read(path)?;
    let model = ModelDefinition::from_json_str(&content).map_err(|e| LoadError::Model {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(
        path = %path.display(),
        properties = model.properties.len(),
        "loaded model"
    );
    Ok(model)
}

/// Load an arbitrary JSON document.
pub fn load_json(path: &Path) -> Result<Value, LoadError> {
    let content = read(path)?;
    serde_json::from_str(&content).map_err(|e| LoadError::Json {
        path: path.to_path_buf(),
        source: e,
    })
}
