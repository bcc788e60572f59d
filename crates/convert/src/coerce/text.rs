//! String target

use super::{Coerce, unsupported};
use crate::error::ConvertResult;
use crate::parse::format_duration;
use crate::resolve::indirect_to_renderable;
use crate::value::{Timestamp, Value};
use chrono::Timelike;

/// Coerce a value to its canonical text form.
///
/// Reference layers are followed but renderables and errors are not looked
/// through, so their own text wins. Floats use the shortest round-trip
/// decimal without an exponent; sequences and mappings are unsupported.
pub fn to_string(value: &Value) -> ConvertResult<String> {
    let value = indirect_to_renderable(value);
    Ok(match &*value {
        Value::Null => String::new(),
        Value::Str(s) => s.clone(),
        Value::Markup(m) => m.as_str().to_owned(),
        Value::Bytes(b) => String::from_utf8_lossy(b).into_owned(),
        Value::Bool(b) => b.to_string(),
        Value::Int(n) => n.to_string(),
        Value::Uint(n) => n.to_string(),
        Value::Float(x) => format_f64(*x),
        Value::Float32(x) => format_f32(*x),
        Value::Render(r) => r.render(),
        Value::Error(e) => e.to_string(),
        Value::Time(t) => format_timestamp(t),
        Value::Duration(d) => format_duration(*d),
        Value::Version(v) => v.to_string(),
        Value::Func(name) => unqualified(name).to_owned(),
        other => return Err(unsupported(other, "String")),
    })
}

impl Coerce for String {
    const TARGET: &'static str = "String";

    fn coerce(value: &Value) -> ConvertResult<Self> {
        to_string(value)
    }

    fn zero() -> Self {
        Self::new()
    }
}

fn format_f64(x: f64) -> String {
    if x.is_infinite() {
        return if x > 0.0 { "+Inf" } else { "-Inf" }.to_owned();
    }
    x.to_string()
}

fn format_f32(x: f32) -> String {
    if x.is_infinite() {
        return if x > 0.0 { "+Inf" } else { "-Inf" }.to_owned();
    }
    x.to_string()
}

/// `2006-01-02 15:04:05.5 -0700 ZONE`, where zone is `UTC` for offset zero
fn format_timestamp(t: &Timestamp) -> String {
    let mut out = t.format("%Y-%m-%d %H:%M:%S").to_string();
    let nanos = t.nanosecond() % 1_000_000_000;
    if nanos > 0 {
        let digits = format!("{nanos:09}");
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    let offset = t.format("%z").to_string();
    out.push(' ');
    out.push_str(&offset);
    out.push(' ');
    if t.offset().local_minus_utc() == 0 {
        out.push_str("UTC");
    } else {
        out.push_str(&offset);
    }
    out
}

/// Trailing segment of a qualified name, after the last `::` or `.`
fn unqualified(name: &str) -> &str {
    let tail = name.rsplit("::").next().unwrap_or(name);
    tail.rsplit('.').next().unwrap_or(tail)
}
