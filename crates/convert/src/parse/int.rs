//! Integer text parsing
//!
//! Accepts an optional sign and a radix prefix (`0x`, `0o`, `0b`, or a bare
//! leading `0` for octal). Before that, one leading `0` at a time is stripped
//! while the text does not start with `0o`, so `"09"` reads as decimal 9.
//!
//! Underscores may separate digits, or follow a radix prefix, as in
//! `"1_000"` or `"0x_FF"`. A leading, trailing or doubled underscore is a
//! syntax error.

use crate::error::{ConvertError, ConvertResult};

const INVALID: &str = "invalid syntax";
const OUT_OF_RANGE: &str = "value out of range";

/// Parse signed integer text into 64 bits
pub fn parse_i64(text: &str) -> ConvertResult<i64> {
    parse_signed(text, "i64")
}

/// Parse unsigned integer text into 64 bits; a sign is a syntax error
pub fn parse_u64(text: &str) -> ConvertResult<u64> {
    parse_unsigned(text, "u64")
}

pub(crate) fn parse_signed(text: &str, target: &str) -> ConvertResult<i64> {
    let digits = strip_leading_zeros(text);
    if digits.is_empty() && !text.is_empty() {
        return Ok(0);
    }
    prefixed_i64(digits).map_err(|reason| ConvertError::parse(text, target, reason))
}

pub(crate) fn parse_unsigned(text: &str, target: &str) -> ConvertResult<u64> {
    let digits = strip_leading_zeros(text);
    if digits.is_empty() && !text.is_empty() {
        return Ok(0);
    }
    prefixed_u64(digits).map_err(|reason| ConvertError::parse(text, target, reason))
}

fn strip_leading_zeros(text: &str) -> &str {
    let mut rest = text;
    while rest.starts_with('0') && !rest.starts_with("0o") {
        rest = &rest[1..];
    }
    if rest.len() != text.len() {
        tracing::trace!(input = text, normalized = rest, "stripped leading zeros");
    }
    rest
}

fn prefixed_i64(text: &str) -> Result<i64, &'static str> {
    let (negative, body) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let magnitude = i128::from(prefixed_u64(body)?);
    let signed = if negative { -magnitude } else { magnitude };
    i64::try_from(signed).map_err(|_| OUT_OF_RANGE)
}

fn prefixed_u64(text: &str) -> Result<u64, &'static str> {
    if !text.contains('_') {
        return radix_u64(text);
    }
    if !underscores_ok(text) {
        return Err(INVALID);
    }
    let joined: String = text.chars().filter(|c| *c != '_').collect();
    radix_u64(&joined)
}

fn radix_u64(text: &str) -> Result<u64, &'static str> {
    let (radix, digits) = split_radix(text);
    if digits.is_empty() || !digits.as_bytes()[0].is_ascii_alphanumeric() {
        return Err(INVALID);
    }
    u64::from_str_radix(digits, radix).map_err(|err| match err.kind() {
        std::num::IntErrorKind::PosOverflow => OUT_OF_RANGE,
        _ => INVALID,
    })
}

/// Every underscore must sit between two digits, where a radix prefix counts
/// as a digit
fn underscores_ok(text: &str) -> bool {
    #[derive(PartialEq)]
    enum Last {
        Start,
        Digit,
        Underscore,
        Other,
    }

    let bytes = text.as_bytes();
    let mut last = Last::Start;
    let mut i = 0;
    let mut hex = false;
    if bytes.len() >= 2
        && bytes[0] == b'0'
        && matches!(bytes[1].to_ascii_lowercase(), b'b' | b'o' | b'x')
    {
        hex = bytes[1].eq_ignore_ascii_case(&b'x');
        last = Last::Digit;
        i = 2;
    }
    for &b in &bytes[i..] {
        if b.is_ascii_digit() || (hex && b.is_ascii_hexdigit()) {
            last = Last::Digit;
        } else if b == b'_' {
            if last != Last::Digit {
                return false;
            }
            last = Last::Underscore;
        } else if last == Last::Underscore {
            return false;
        } else {
            last = Last::Other;
        }
    }
    last != Last::Underscore
}

fn split_radix(text: &str) -> (u32, &str) {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return (10, text);
    }
    match bytes[1] {
        b'x' | b'X' => (16, &text[2..]),
        b'o' | b'O' => (8, &text[2..]),
        b'b' | b'B' => (2, &text[2..]),
        _ => (8, &text[1..]),
    }
}
