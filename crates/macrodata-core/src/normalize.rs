//! Upstream response normalization.
//!
//! The upstream does not fix its response shape: payloads arrive as `{ "data": [...] }`,
//! `{ "value": [...] }`, a bare array, or something else entirely. Each indicator
//! declares one of two policies and the result is always `{ "data": ... }`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::Normalization;

/// The only success contract exposed to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedResult {
    pub data: Value,
}

impl NormalizedResult {
    pub fn new(data: Value) -> Self {
        Self { data }
    }
}

impl Normalization {
    pub fn apply(self, upstream: Value) -> NormalizedResult {
        match self {
            Self::Direct => normalize_direct(upstream),
            Self::ListOrValue => normalize_list_or_value(upstream),
        }
    }
}

/// `data` verbatim if the body is an object holding it, otherwise the whole body.
pub fn normalize_direct(upstream: Value) -> NormalizedResult {
    match upstream {
        Value::Object(mut map) if map.contains_key("data") => {
            NormalizedResult::new(map.remove("data").unwrap_or(Value::Null))
        }
        other => NormalizedResult::new(other),
    }
}

/// `data` only when it is a list, then `value` of any type, then an empty list.
/// Non-list junk under `data` never reaches the caller.
pub fn normalize_list_or_value(upstream: Value) -> NormalizedResult {
    let Value::Object(mut map) = upstream else {
        return NormalizedResult::new(Value::Array(Vec::new()));
    };

    if let Some(Value::Array(items)) = map.remove("data") {
        return NormalizedResult::new(Value::Array(items));
    }
    match map.remove("value") {
        Some(value) => NormalizedResult::new(value),
        None => NormalizedResult::new(Value::Array(Vec::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    fn direct(v: Value) -> Value {
        serde_json::to_value(Normalization::Direct.apply(v)).unwrap()
    }

    fn list_or_value(v: Value) -> Value {
        serde_json::to_value(Normalization::ListOrValue.apply(v)).unwrap()
    }

    #[test]
    fn test_direct_unwraps_data() {
        assert_json_eq!(direct(json!({"data": [1, 2, 3]})), json!({"data": [1, 2, 3]}));
    }

    #[test]
    fn test_direct_keeps_non_list_data_verbatim() {
        assert_json_eq!(
            direct(json!({"data": {"count": 0}, "extra": true})),
            json!({"data": {"count": 0}})
        );
        assert_json_eq!(direct(json!({"data": null})), json!({"data": null}));
    }

    #[test]
    fn test_direct_wraps_whole_body_without_data_key() {
        assert_json_eq!(direct(json!({"foo": "bar"})), json!({"data": {"foo": "bar"}}));
        assert_json_eq!(direct(json!([{"OBS_VALUE": 1}])), json!({"data": [{"OBS_VALUE": 1}]}));
        assert_json_eq!(direct(json!("text")), json!({"data": "text"}));
    }

    #[test]
    fn test_direct_ignores_value_key() {
        assert_json_eq!(direct(json!({"value": [4, 5]})), json!({"data": {"value": [4, 5]}}));
    }

    #[test]
    fn test_list_or_value_accepts_list_data() {
        assert_json_eq!(
            list_or_value(json!({"data": [1, 2], "value": [9]})),
            json!({"data": [1, 2]})
        );
    }

    #[test]
    fn test_list_or_value_rejects_non_list_data() {
        assert_json_eq!(list_or_value(json!({"data": "not-a-list"})), json!({"data": []}));
        assert_json_eq!(list_or_value(json!({"data": {"a": 1}})), json!({"data": []}));
    }

    #[test]
    fn test_list_or_value_falls_back_to_value() {
        assert_json_eq!(list_or_value(json!({"value": [4, 5]})), json!({"data": [4, 5]}));
        assert_json_eq!(
            list_or_value(json!({"data": "junk", "value": [4]})),
            json!({"data": [4]})
        );
        // `value` is returned whatever its type.
        assert_json_eq!(list_or_value(json!({"value": 7})), json!({"data": 7}));
    }

    #[test]
    fn test_list_or_value_empty_fallback() {
        assert_json_eq!(list_or_value(json!({"foo": "bar"})), json!({"data": []}));
        assert_json_eq!(list_or_value(json!([1, 2, 3])), json!({"data": []}));
        assert_json_eq!(list_or_value(Value::Null), json!({"data": []}));
    }
}
