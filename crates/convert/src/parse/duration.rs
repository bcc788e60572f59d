//! Unit-qualified duration literals
//!
//! The grammar is `[-+]?(<decimal><unit>)+` with units `ns`, `us` (`µs`,
//! `μs`), `ms`, `s`, `m` and `h`, or a bare `0`. Totals past 2^63 nanoseconds
//! are rejected.

use crate::error::{ConvertError, ConvertResult};
use chrono::TimeDelta;
use std::fmt::Write;

const LIMIT: u64 = 1 << 63;

const NANOSECOND: u64 = 1;
const MICROSECOND: u64 = 1_000 * NANOSECOND;
const MILLISECOND: u64 = 1_000 * MICROSECOND;
const SECOND: u64 = 1_000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;

/// Parse a duration literal such as `"1h15m30.5s"` or `"-250ms"`
pub fn parse_duration(text: &str) -> ConvertResult<TimeDelta> {
    let invalid = || ConvertError::parse(text, "duration", "invalid duration");
    let overflow = || ConvertError::parse(text, "duration", "duration out of range");

    let (negative, mut rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    if rest == "0" {
        return Ok(TimeDelta::zero());
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let int_len = digit_run(rest);
        let (int_text, tail) = rest.split_at(int_len);
        let mut whole = leading_int(int_text).ok_or_else(overflow)?;
        rest = tail;

        let mut frac: u64 = 0;
        let mut scale: f64 = 1.0;
        let mut has_frac = false;
        if let Some(tail) = rest.strip_prefix('.') {
            let frac_len = digit_run(tail);
            (frac, scale) = leading_fraction(&tail[..frac_len]);
            has_frac = frac_len > 0;
            rest = &tail[frac_len..];
        }
        if int_len == 0 && !has_frac {
            return Err(invalid());
        }

        let unit_len = rest
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(rest.len());
        if unit_len == 0 {
            return Err(ConvertError::parse(text, "duration", "missing unit in duration"));
        }
        let (unit_text, tail) = rest.split_at(unit_len);
        let unit = unit_nanos(unit_text).ok_or_else(|| {
            ConvertError::parse(
                text,
                "duration",
                format!("unknown unit {unit_text:?} in duration"),
            )
        })?;
        rest = tail;

        if whole > LIMIT / unit {
            return Err(overflow());
        }
        whole *= unit;
        if frac > 0 {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
            let scaled = (frac as f64 * (unit as f64 / scale)) as u64;
            whole += scaled;
            if whole > LIMIT {
                return Err(overflow());
            }
        }
        total += whole;
        if total > LIMIT {
            return Err(overflow());
        }
    }

    let signed = if negative {
        -i128::from(total)
    } else {
        i128::from(total)
    };
    i64::try_from(signed)
        .map(TimeDelta::nanoseconds)
        .map_err(|_| overflow())
}

fn digit_run(text: &str) -> usize {
    text.bytes().take_while(u8::is_ascii_digit).count()
}

/// Decimal value of an all-digit run, `None` past 2^63
fn leading_int(digits: &str) -> Option<u64> {
    let mut x: u64 = 0;
    for d in digits.bytes() {
        if x > LIMIT / 10 {
            return None;
        }
        x = x * 10 + u64::from(d - b'0');
        if x > LIMIT {
            return None;
        }
    }
    Some(x)
}

/// Fraction digits as a value and its scale; digits past u64 precision are dropped
fn leading_fraction(digits: &str) -> (u64, f64) {
    let mut x: u64 = 0;
    let mut scale: f64 = 1.0;
    let mut saturated = false;
    for d in digits.bytes() {
        if saturated {
            continue;
        }
        if x > LIMIT / 10 {
            saturated = true;
            continue;
        }
        let y = x * 10 + u64::from(d - b'0');
        if y > LIMIT {
            saturated = true;
            continue;
        }
        x = y;
        scale *= 10.0;
    }
    (x, scale)
}

fn unit_nanos(unit: &str) -> Option<u64> {
    Some(match unit {
        "ns" => NANOSECOND,
        "us" | "µs" | "μs" => MICROSECOND,
        "ms" => MILLISECOND,
        "s" => SECOND,
        "m" => MINUTE,
        "h" => HOUR,
        _ => return None,
    })
}

/// Format a duration the way [`parse_duration`] reads it, e.g. `72h3m0.5s`.
///
/// Sub-second durations use the largest fitting unit (`1.5µs`, `250ms`) and
/// zero is `0s`. Durations beyond the i64 nanosecond range are clamped.
pub fn format_duration(d: TimeDelta) -> String {
    let nanos = d.num_nanoseconds().unwrap_or(if d < TimeDelta::zero() {
        i64::MIN
    } else {
        i64::MAX
    });
    let mut out = String::new();
    if nanos < 0 {
        out.push('-');
    }
    let u = nanos.unsigned_abs();

    if u < SECOND {
        let (unit, prec) = match u {
            0 => return "0s".to_owned(),
            1..MICROSECOND => ("ns", 0),
            MICROSECOND..MILLISECOND => ("µs", 3),
            _ => ("ms", 6),
        };
        let (whole, frac) = split_fraction(u, prec);
        let _ = write!(out, "{whole}{frac}{unit}");
        return out;
    }

    let (secs_total, frac) = split_fraction(u, 9);
    let minutes_total = secs_total / 60;
    if minutes_total > 0 {
        let hours = minutes_total / 60;
        if hours > 0 {
            let _ = write!(out, "{hours}h");
        }
        let _ = write!(out, "{}m", minutes_total % 60);
    }
    let _ = write!(out, "{}{frac}s", secs_total % 60);
    out
}

/// Integer part of `v / 10^prec` and its fraction as `.ddd` without trailing zeros
fn split_fraction(v: u64, prec: u32) -> (u64, String) {
    if prec == 0 {
        return (v, String::new());
    }
    let pow = 10u64.pow(prec);
    let frac = v % pow;
    if frac == 0 {
        return (v / pow, String::new());
    }
    let digits = format!("{frac:0width$}", width = prec as usize);
    (v / pow, format!(".{}", digits.trim_end_matches('0')))
}
