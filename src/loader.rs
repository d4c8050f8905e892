use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_yaml::Value;

use crate::errors::{AppError, AppResult, SourceDoc};

/// Reads a file and parses it as a single YAML document. An empty or
/// comment-only file parses to `Value::Null`, which callers treat as an
/// absent document. Only a parse failure is classified as a yaml error;
/// filesystem problems stay plain io errors.
pub fn yaml_value(path: &Path, doc: SourceDoc) -> AppResult<Value> {
    tracing::debug!(path = %path.display(), %doc, "reading yaml document");
    let text = fs::read_to_string(path)?;
    serde_yaml::from_str(&text).map_err(|source| AppError::Yaml { doc, source })
}

/// Second stage: lower an already-parsed document into its typed shape.
/// Shape mismatches (wrong type at a key, missing required field) are a
/// different failure class than malformed YAML.
pub fn typed<T: DeserializeOwned>(value: Value, doc: SourceDoc) -> AppResult<T> {
    serde_yaml::from_value(value).map_err(|source| AppError::Shape { doc, source })
}
