use std::path::Path;

use serde_yaml::Value;

use crate::errors::{AppResult, SourceDoc};
use crate::loader;

const KUBEVIP_KEY: &str = "k3s_enable_kubevip";

/// The ansible user vars stay an untyped document: we only ever probe one
/// key and operators put arbitrary role variables in this file.
pub fn load(path: &Path) -> AppResult<Value> {
    loader::yaml_value(path, SourceDoc::UserVars)
}

/// True iff the vars document is a mapping that contains
/// `k3s_enable_kubevip` with a truthy value. An absent document, absent key,
/// or falsy value all mean the feature is off.
pub fn kubevip_enabled(vars: &Value) -> bool {
    match vars.get(KUBEVIP_KEY) {
        Some(value) => truthy(value),
        None => false,
    }
}

// Operators write this flag as a bool, but yes/"true"/1 have been seen in
// the wild, so truthiness follows the loose convention ansible vars use:
// null, false, zero and empty values are off, everything else is on.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(seq) => !seq.is_empty(),
        Value::Mapping(map) => !map.is_empty(),
        Value::Tagged(tagged) => truthy(&tagged.value),
    }
}
