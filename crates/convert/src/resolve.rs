//! Indirection resolution
//!
//! Strips reference layers off a value before the coercion matrix looks at
//! it. Resolution never fails: a value that cannot be followed further is
//! returned as reached, and the coercion reports its kind.

use crate::limits::ConvertLimits;
use crate::value::Value;
use std::borrow::Cow;
use std::sync::Arc;

static NULL: Value = Value::Null;

/// Follow reference layers down to the concrete value.
///
/// A null reference resolves to [`Value::Null`]. A renderable that exposes an
/// underlying value resolves to that value.
pub fn indirect(value: &Value) -> Cow<'_, Value> {
    indirect_with(value, &ConvertLimits::default())
}

/// [`indirect`] bounded by `limits.max_indirection_depth` hops
pub fn indirect_with<'a>(value: &'a Value, limits: &ConvertLimits) -> Cow<'a, Value> {
    follow(value, limits.max_indirection_depth, true)
}

/// Follow reference layers, stopping at values that render themselves.
///
/// Used on the string path, where a renderable's own text form takes
/// precedence over whatever it wraps.
pub fn indirect_to_renderable(value: &Value) -> Cow<'_, Value> {
    indirect_to_renderable_with(value, &ConvertLimits::default())
}

/// [`indirect_to_renderable`] bounded by `limits.max_indirection_depth` hops
pub fn indirect_to_renderable_with<'a>(value: &'a Value, limits: &ConvertLimits) -> Cow<'a, Value> {
    follow(value, limits.max_indirection_depth, false)
}

fn follow(value: &Value, depth: usize, see_through: bool) -> Cow<'_, Value> {
    let mut current = value;
    for hop in 0..depth {
        match current {
            Value::Ref(Some(inner)) => current = inner,
            Value::Ref(None) => return Cow::Borrowed(&NULL),
            Value::Render(r) if see_through => {
                return match r.underlying() {
                    Some(under) => Cow::Owned(follow_owned(under, depth - hop - 1)),
                    None => Cow::Borrowed(current),
                };
            }
            _ => return Cow::Borrowed(current),
        }
    }
    if matches!(current, Value::Ref(_)) {
        tracing::trace!(depth, "indirection depth limit reached");
    }
    Cow::Borrowed(current)
}

fn follow_owned(mut value: Value, mut remaining: usize) -> Value {
    while remaining > 0 {
        value = match value {
            Value::Ref(Some(inner)) => Arc::unwrap_or_clone(inner),
            Value::Ref(None) => return Value::Null,
            Value::Render(r) => match r.underlying() {
                Some(under) => under,
                None => return Value::Render(r),
            },
            other => return other,
        };
        remaining -= 1;
    }
    value
}
