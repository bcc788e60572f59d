//! Mapping lifters
//!
//! Mappings lift into `IndexMap<String, T>`: keys go through the string
//! coercion, values through an element coercer. Text input is the one JSON
//! stand-in path, decoded straight into the target map shape.

use crate::coerce::{to_bool, to_i64, to_isize, to_string};
use crate::collection::seq::to_string_vec;
use crate::error::{ConvertError, ConvertResult, type_label};
use crate::limits::ConvertLimits;
use crate::resolve::indirect_with;
use crate::value::Value;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;

/// Lift a value into `IndexMap<String, T>` under default limits.
///
/// ```
/// use morph_convert::{Value, coerce_map_of, to_i64};
///
/// let lifted = coerce_map_of(&Value::from(r#"{"a": 1}"#), to_i64).unwrap();
/// assert_eq!(lifted["a"], 1);
///
/// let lifted = coerce_map_of(&Value::map([(7, "8")]), to_i64).unwrap();
/// assert_eq!(lifted["7"], 8);
/// ```
pub fn coerce_map_of<T, F>(value: &Value, elem: F) -> ConvertResult<IndexMap<String, T>>
where
    T: DeserializeOwned,
    F: Fn(&Value) -> ConvertResult<T>,
{
    coerce_map_of_with(value, elem, &ConvertLimits::default())
}

/// [`coerce_map_of`] with explicit limits.
///
/// JSON text longer than `limits.max_json_bytes` is rejected before decoding.
/// Repeated keys keep their first position and their last value.
pub fn coerce_map_of_with<T, F>(
    value: &Value,
    elem: F,
    limits: &ConvertLimits,
) -> ConvertResult<IndexMap<String, T>>
where
    T: DeserializeOwned,
    F: Fn(&Value) -> ConvertResult<T>,
{
    let value = indirect_with(value, limits);
    if let Some(text) = value.as_text() {
        limits.check_json_bytes(text.len())?;
        tracing::trace!(len = text.len(), "decoding mapping from JSON text");
        return serde_json::from_str(text).map_err(|err| ConvertError::json(map_label::<T>(), err));
    }
    match &*value {
        Value::Map(entries) => entries
            .iter()
            .map(|(k, v)| Ok((to_string(k)?, elem(v)?)))
            .collect(),
        other => Err(ConvertError::structure(
            other.kind(),
            map_label::<T>(),
            "expected a mapping or JSON object text",
        )),
    }
}

fn map_label<T>() -> String {
    format!("IndexMap<String, {}>", type_label::<T>())
}

/// Keys of a mapping, in order
pub fn map_keys(value: &Value) -> ConvertResult<Vec<Value>> {
    let value = indirect_with(value, &ConvertLimits::default());
    match &*value {
        Value::Map(entries) => Ok(entries.iter().map(|(k, _)| k.clone()).collect()),
        other => Err(ConvertError::structure(other.kind(), "Vec<Value>", "expected a mapping")),
    }
}

/// Values of a mapping, in order
pub fn map_values(value: &Value) -> ConvertResult<Vec<Value>> {
    let value = indirect_with(value, &ConvertLimits::default());
    match &*value {
        Value::Map(entries) => Ok(entries.iter().map(|(_, v)| v.clone()).collect()),
        other => Err(ConvertError::structure(other.kind(), "Vec<Value>", "expected a mapping")),
    }
}

/// String-keyed mapping with values kept as they are
pub fn to_value_map(value: &Value) -> ConvertResult<IndexMap<String, Value>> {
    coerce_map_of(value, |v| Ok(v.clone()))
}

pub fn to_string_map(value: &Value) -> ConvertResult<IndexMap<String, String>> {
    coerce_map_of(value, to_string)
}

pub fn to_string_vec_map(value: &Value) -> ConvertResult<IndexMap<String, Vec<String>>> {
    coerce_map_of(value, to_string_vec)
}

pub fn to_bool_map(value: &Value) -> ConvertResult<IndexMap<String, bool>> {
    coerce_map_of(value, to_bool)
}

pub fn to_isize_map(value: &Value) -> ConvertResult<IndexMap<String, isize>> {
    coerce_map_of(value, to_isize)
}

pub fn to_i64_map(value: &Value) -> ConvertResult<IndexMap<String, i64>> {
    coerce_map_of(value, to_i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_text_path() {
        let map = to_string_map(&Value::from(r#"{"a":"1","b":"2"}"#)).unwrap();
        assert_eq!(map.get("a").map(String::as_str), Some("1"));
        assert_eq!(map.get("b").map(String::as_str), Some("2"));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_truncated_json_errors() {
        let err = to_string_map(&Value::from(r#"{"a":"1","#)).unwrap_err();
        assert!(matches!(err, ConvertError::Json { .. }));
    }

    #[test]
    fn test_json_shape_is_strict() {
        // Numbers in JSON text do not become strings
        assert!(to_string_map(&Value::from(r#"{"a":1}"#)).is_err());
        assert!(to_i64_map(&Value::from(r#"{"a":1}"#)).is_ok());
    }

    #[test]
    fn test_non_string_keys() {
        let value = Value::map([(Value::from(1), Value::from("on")), (Value::from(true), Value::from("F"))]);
        let map = to_bool_map(&Value::map([(1, "true"), (2, "0")])).unwrap();
        assert_eq!(map.get("1"), Some(&true));
        assert_eq!(map.get("2"), Some(&false));
        assert!(to_bool_map(&value).is_err());
    }

    #[test]
    fn test_value_errors_propagate() {
        let err = to_isize_map(&Value::map([("a", "x")])).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_string_vec_values() {
        let map = to_string_vec_map(&Value::map([("tags", "a b")])).unwrap();
        assert_eq!(map["tags"], vec!["a".to_owned(), "b".to_owned()]);
    }

    #[test]
    fn test_json_limit() {
        let limits = ConvertLimits {
            max_json_bytes: 4,
            ..ConvertLimits::default()
        };
        let err = coerce_map_of_with(&Value::from(r#"{"a":1}"#), to_i64, &limits).unwrap_err();
        assert!(matches!(err, ConvertError::LimitExceeded { .. }));
    }

    #[test]
    fn test_non_mapping_is_structural() {
        for value in [Value::Null, Value::from(3), Value::seq([1])] {
            assert!(matches!(
                to_value_map(&value),
                Err(ConvertError::Structure { .. })
            ));
        }
    }

    #[test]
    fn test_keys_and_values() {
        let value = Value::map([("x", 1), ("y", 2)]);
        assert_eq!(map_keys(&value).unwrap(), vec![Value::from("x"), Value::from("y")]);
        assert_eq!(map_values(&value).unwrap(), vec![Value::from(1), Value::from(2)]);
        assert!(map_keys(&Value::seq([1])).is_err());
    }
}
