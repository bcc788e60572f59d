//! Sequence lifters

use crate::coerce::{
    to_bool, to_duration, to_i8, to_i16, to_i32, to_i64, to_isize, to_string, to_u8, to_u16,
    to_u32, to_u64,
};
use crate::error::{ConvertError, ConvertResult, type_label};
use crate::resolve::indirect;
use crate::value::Value;
use chrono::TimeDelta;

/// Lift a value into `Vec<T>` with an element coercer.
///
/// Sequences convert element by element and the first failing element's
/// error is returned. Byte strings yield one unsigned element per byte. A bare
/// text value becomes a one-element sequence. Null and other kinds are a
/// structural error.
///
/// ```
/// use morph_convert::{Value, coerce_slice_of, to_i32};
///
/// let lifted = coerce_slice_of(&Value::seq(["1", "2"]), to_i32).unwrap();
/// assert_eq!(lifted, vec![1, 2]);
/// ```
pub fn coerce_slice_of<T, F>(value: &Value, elem: F) -> ConvertResult<Vec<T>>
where
    F: Fn(&Value) -> ConvertResult<T>,
{
    let value = indirect(value);
    if value.as_text().is_some() {
        return Ok(vec![elem(&value)?]);
    }
    match &*value {
        Value::Seq(items) => items.iter().map(elem).collect(),
        Value::Bytes(bytes) => bytes
            .iter()
            .map(|b| elem(&Value::Uint(u64::from(*b))))
            .collect(),
        other => Err(not_a_sequence(other, &type_label::<Vec<T>>())),
    }
}

/// Lift a value into strings.
///
/// Text splits on whitespace. Sequences convert element by element. Any
/// other scalar becomes a one-element list of its string form.
pub fn to_string_vec(value: &Value) -> ConvertResult<Vec<String>> {
    let value = indirect(value);
    if let Some(text) = value.as_text() {
        return Ok(text.split_whitespace().map(str::to_owned).collect());
    }
    match &*value {
        Value::Null => Err(not_a_sequence(&value, "Vec<String>")),
        Value::Seq(_) | Value::Bytes(_) => coerce_slice_of(&value, to_string),
        other => Ok(vec![to_string(other)?]),
    }
}

/// Lift sequences and byte strings into their elements
pub fn to_value_vec(value: &Value) -> ConvertResult<Vec<Value>> {
    let value = indirect(value);
    match &*value {
        Value::Seq(items) => Ok(items.clone()),
        Value::Bytes(bytes) => Ok(bytes.iter().map(|b| Value::Uint(u64::from(*b))).collect()),
        other => Err(not_a_sequence(other, "Vec<Value>")),
    }
}

fn not_a_sequence(value: &Value, target: &str) -> ConvertError {
    ConvertError::structure(value.kind(), target, "expected a sequence")
}

macro_rules! typed_vec {
    ($($name:ident => $elem:ident : $ty:ty),+ $(,)?) => {$(
        #[doc = concat!("Lift a value into `Vec<", stringify!($ty), ">` via [`", stringify!($elem), "`](crate::", stringify!($elem), ")")]
        pub fn $name(value: &Value) -> ConvertResult<Vec<$ty>> {
            coerce_slice_of(value, $elem)
        }
    )+};
}

typed_vec! {
    to_bool_vec => to_bool: bool,
    to_isize_vec => to_isize: isize,
    to_i64_vec => to_i64: i64,
    to_i32_vec => to_i32: i32,
    to_i16_vec => to_i16: i16,
    to_i8_vec => to_i8: i8,
    to_u64_vec => to_u64: u64,
    to_u32_vec => to_u32: u32,
    to_u16_vec => to_u16: u16,
    to_u8_vec => to_u8: u8,
    to_duration_vec => to_duration: TimeDelta,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;

    #[test]
    fn test_elementwise_with_mixed_sources() {
        let value = Value::seq([Value::from("3"), Value::from(4.9), Value::from(true)]);
        assert_eq!(to_i64_vec(&value).unwrap(), vec![3, 4, 1]);
    }

    #[test]
    fn test_first_failure_wins() {
        let value = Value::seq([Value::from(1), Value::from("x"), Value::from(-1)]);
        let err = to_u8_vec(&value).unwrap_err();
        assert!(err.is_parse());
        assert_eq!(err.target(), Some("u8"));
    }

    #[test]
    fn test_bytes_lift_per_byte() {
        assert_eq!(to_u16_vec(&Value::bytes(vec![1, 2])).unwrap(), vec![1, 2]);
        assert_eq!(to_value_vec(&Value::bytes(vec![7])).unwrap(), vec![Value::Uint(7)]);
    }

    #[test]
    fn test_bare_text_is_single_element() {
        assert_eq!(to_bool_vec(&Value::from("true")).unwrap(), vec![true]);
    }

    #[test]
    fn test_null_is_structural() {
        assert!(matches!(
            to_i32_vec(&Value::Null),
            Err(ConvertError::Structure { .. })
        ));
        assert!(to_value_vec(&Value::from("a b")).is_err());
    }

    #[test]
    fn test_string_vec_forms() {
        assert_eq!(to_string_vec(&Value::from(" a  b\tc ")).unwrap(), vec!["a", "b", "c"]);
        assert_eq!(to_string_vec(&Value::seq([1, 2])).unwrap(), vec!["1", "2"]);
        assert_eq!(to_string_vec(&Value::from(5)).unwrap(), vec!["5"]);
        assert!(to_string_vec(&Value::Null).is_err());
        assert!(to_string_vec(&Value::map([(1, 2)])).is_err());
    }

    #[test]
    fn test_duration_vec() {
        let value = Value::seq(["1s", "5"]);
        assert_eq!(
            to_duration_vec(&value).unwrap(),
            vec![TimeDelta::seconds(1), TimeDelta::nanoseconds(5)]
        );
    }
}
