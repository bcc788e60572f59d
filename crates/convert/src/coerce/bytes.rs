use crate::error::{ConvertError, ConvertResult};
use crate::resolve::indirect;
use crate::value::Value;

/// Coerce a value to raw bytes.
///
/// Null is empty and text is its UTF-8 encoding. Any other value is encoded
/// as JSON.
pub fn to_bytes(value: &Value) -> ConvertResult<Vec<u8>> {
    let value = indirect(value);
    if let Some(text) = value.as_text() {
        return Ok(text.as_bytes().to_vec());
    }
    match &*value {
        Value::Null => Ok(Vec::new()),
        Value::Bytes(b) => Ok(b.clone()),
        other => serde_json::to_vec(other).map_err(|err| ConvertError::json("bytes", err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_and_null() {
        assert_eq!(to_bytes(&Value::from("hé")).unwrap(), "hé".as_bytes());
        assert!(to_bytes(&Value::Null).unwrap().is_empty());
    }

    #[test]
    fn test_bytes_pass_through() {
        assert_eq!(to_bytes(&Value::bytes(vec![0, 255])).unwrap(), vec![0, 255]);
    }

    #[test]
    fn test_json_fallback() {
        let value = Value::map([("a", Value::seq([1, 2]))]);
        assert_eq!(to_bytes(&value).unwrap(), br#"{"a":[1,2]}"#.to_vec());
        assert!(to_bytes(&Value::named_function("f")).is_err());
    }
}
