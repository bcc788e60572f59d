use crate::error::{ConvertError, ConvertResult};

/// Parse a boolean literal.
///
/// Accepts exactly `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(text: &str) -> ConvertResult<bool> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ConvertError::parse(text, "bool", "invalid syntax")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_set() {
        for text in ["1", "t", "T", "TRUE", "true", "True"] {
            assert!(parse_bool(text).unwrap(), "{text}");
        }
        for text in ["0", "f", "F", "FALSE", "false", "False"] {
            assert!(!parse_bool(text).unwrap(), "{text}");
        }
    }

    #[test]
    fn test_near_misses_fail() {
        for text in ["test", "tRUE", "yes", " true", "", "01"] {
            assert!(parse_bool(text).is_err(), "{text}");
        }
    }
}
