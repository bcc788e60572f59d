use super::{Coerce, duration_nanos, unsupported};
use crate::error::ConvertResult;
use crate::parse::parse_bool;
use crate::resolve::indirect;
use crate::value::Value;

/// Coerce a value to `bool`.
///
/// Numbers are `true` when non-zero (NaN included). Text must be one of the
/// literals accepted by [`parse_bool`].
pub fn to_bool(value: &Value) -> ConvertResult<bool> {
    let value = indirect(value);
    if let Some(text) = value.as_text() {
        return parse_bool(text);
    }
    Ok(match &*value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Int(n) => *n != 0,
        Value::Uint(n) => *n != 0,
        Value::Float(x) => *x != 0.0,
        Value::Float32(x) => *x != 0.0,
        Value::Duration(d) => duration_nanos(*d) != 0,
        other => return Err(unsupported(other, "bool")),
    })
}

impl Coerce for bool {
    const TARGET: &'static str = "bool";

    fn coerce(value: &Value) -> ConvertResult<Self> {
        to_bool(value)
    }

    fn zero() -> Self {
        false
    }
}
