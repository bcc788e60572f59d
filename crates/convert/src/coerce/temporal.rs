//! Timestamp and duration targets

use super::{Coerce, unsupported};
use crate::epoch::{sec_to_time, zero_time};
use crate::error::{ConvertError, ConvertResult};
use crate::parse::{parse_duration, parse_timestamp};
use crate::resolve::indirect;
use crate::value::{Timestamp, Value};
use chrono::TimeDelta;

/// Characters whose presence marks text as a unit-qualified duration literal
const UNIT_CHARS: &[char] = &['n', 's', 'u', 'µ', 'm', 'h'];

/// Coerce a value to a timestamp.
///
/// Integers are Unix seconds and floats Unix seconds with a fractional part,
/// both in UTC. Text goes through [`parse_timestamp`]. Null is unsupported.
pub fn to_time(value: &Value) -> ConvertResult<Timestamp> {
    let value = indirect(value);
    if let Some(text) = value.as_text() {
        return parse_timestamp(text);
    }
    match &*value {
        Value::Time(t) => Ok(*t),
        Value::Int(n) => sec_to_time(*n),
        Value::Uint(n) => i64::try_from(*n)
            .map_err(|_| ConvertError::parse(n.to_string(), "timestamp", "seconds since epoch out of range"))
            .and_then(sec_to_time),
        Value::Float(x) => float_seconds_to_time(*x),
        Value::Float32(x) => float_seconds_to_time(f64::from(*x)),
        other => Err(unsupported(other, "timestamp")),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn float_seconds_to_time(x: f64) -> ConvertResult<Timestamp> {
    let out_of_range =
        || ConvertError::parse(x.to_string(), "timestamp", "seconds since epoch out of range");
    if !x.is_finite() || x.abs() >= i64::MAX as f64 {
        return Err(out_of_range());
    }
    let secs = x.floor();
    let nanos = ((x - secs) * 1e9) as u32;
    let base = sec_to_time(secs as i64)?;
    // Nanosecond rounding can reach a full second
    Ok(base + TimeDelta::nanoseconds(i64::from(nanos.min(999_999_999))))
}

impl Coerce for Timestamp {
    const TARGET: &'static str = "timestamp";

    fn coerce(value: &Value) -> ConvertResult<Self> {
        to_time(value)
    }

    fn zero() -> Self {
        zero_time()
    }
}

/// Coerce a value to a duration.
///
/// Numbers are nanosecond counts. Text containing a unit character is a
/// duration literal; bare numeric text is read as nanoseconds.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn to_duration(value: &Value) -> ConvertResult<TimeDelta> {
    let value = indirect(value);
    if let Some(text) = value.as_text() {
        return if text.contains(UNIT_CHARS) {
            parse_duration(text)
        } else {
            parse_duration(&format!("{text}ns"))
        };
    }
    match &*value {
        Value::Duration(d) => Ok(*d),
        Value::Int(n) => Ok(TimeDelta::nanoseconds(*n)),
        Value::Uint(n) => Ok(TimeDelta::nanoseconds(*n as i64)),
        Value::Float(x) => Ok(TimeDelta::nanoseconds(*x as i64)),
        Value::Float32(x) => Ok(TimeDelta::nanoseconds(*x as i64)),
        other => Err(unsupported(other, "duration")),
    }
}

impl Coerce for TimeDelta {
    const TARGET: &'static str = "duration";

    fn coerce(value: &Value) -> ConvertResult<Self> {
        to_duration(value)
    }

    fn zero() -> Self {
        Self::zero()
    }
}
