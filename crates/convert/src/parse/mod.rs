//! Text parsers behind the string paths of the coercion matrix
//!
//! Each parser accepts exactly one lexical family and reports failure as
//! [`ConvertError::Parse`](crate::ConvertError::Parse).

mod boolean;
mod datetime;
mod duration;
mod int;

pub use boolean::parse_bool;
pub use datetime::parse_timestamp;
pub use duration::{format_duration, parse_duration};
pub use int::{parse_i64, parse_u64};

pub(crate) use int::{parse_signed, parse_unsigned};

use crate::error::{ConvertError, ConvertResult};

/// Parse float text; accepts exponents, `inf` and `NaN`
///
/// A finite literal too large for the width is an error rather than infinity.
pub fn parse_f64(text: &str) -> ConvertResult<f64> {
    let x = text
        .parse::<f64>()
        .map_err(|err| ConvertError::parse(text, "f64", err.to_string()))?;
    if x.is_infinite() && !is_infinity_literal(text) {
        return Err(ConvertError::parse(text, "f64", "value out of range"));
    }
    Ok(x)
}

/// Parse float text at 32-bit precision
pub fn parse_f32(text: &str) -> ConvertResult<f32> {
    let x = text
        .parse::<f32>()
        .map_err(|err| ConvertError::parse(text, "f32", err.to_string()))?;
    if x.is_infinite() && !is_infinity_literal(text) {
        return Err(ConvertError::parse(text, "f32", "value out of range"));
    }
    Ok(x)
}

fn is_infinity_literal(text: &str) -> bool {
    let unsigned = text.trim().trim_start_matches(['+', '-']);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_grammar() {
        assert_eq!(parse_f64("1e3").unwrap(), 1000.0);
        assert_eq!(parse_f64("-2.5").unwrap(), -2.5);
        assert!(parse_f64("inf").unwrap().is_infinite());
        assert!(parse_f64("NaN").unwrap().is_nan());
        assert!(parse_f64("1.2.3").is_err());
        assert_eq!(parse_f32("0.1").unwrap(), 0.1_f32);
    }

    #[test]
    fn test_float_overflow_is_an_error() {
        let err = parse_f64("1e400").unwrap_err();
        assert_eq!(err.to_string(), r#"unable to parse "1e400" as f64: value out of range"#);
        assert!(parse_f64("-1e400").unwrap_err().is_parse());
        let err = parse_f32("1e40").unwrap_err();
        assert_eq!(err.target(), Some("f32"));
        assert_eq!(parse_f64("1e40").unwrap(), 1e40);
    }

    #[test]
    fn test_infinity_literals_still_parse() {
        assert_eq!(parse_f64("-Infinity").unwrap(), f64::NEG_INFINITY);
        assert_eq!(parse_f64("+INF").unwrap(), f64::INFINITY);
        assert_eq!(parse_f32("infinity").unwrap(), f32::INFINITY);
        assert_eq!(parse_f32("-inf").unwrap(), f32::NEG_INFINITY);
    }
}
