use serde_json::{Map, Value};

use crate::ipc::types::AppState;
use crate::store::Store;

pub fn require_str<'a>(params: &'a Value, key: &str) -> Result<&'a str, String> {
    params
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| format!("missing {key}"))
}

pub fn require_object<'a>(params: &'a Value, key: &str) -> Result<&'a Map<String, Value>, String> {
    params
        .get(key)
        .and_then(Value::as_object)
        .ok_or_else(|| format!("missing {key} object"))
}

/// Every roster method addresses a (academicYear, classLevel) pair.
pub fn year_class(params: &Value) -> Result<(&str, &str), String> {
    Ok((
        require_str(params, "academicYear")?,
        require_str(params, "classLevel")?,
    ))
}

pub fn store_of(state: &AppState) -> Result<&Store, String> {
    state
        .store
        .as_ref()
        .ok_or_else(|| "select a workspace first".to_string())
}
