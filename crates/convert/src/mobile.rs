//! Mainland China mobile number normalisation

use crate::coerce::to_string;
use crate::error::{ConvertError, ConvertResult};
use crate::value::Value;
use regex::Regex;
use std::sync::LazyLock;

/// Optional `0`, `86` or `+86` prefix, a `13x`-`19x` carrier block, eight digits
static CN_MOBILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0|\+?86)?(1[3-9][0-9])[0-9]{8}$").unwrap());

/// Whether `text` is a mainland China mobile number
pub fn is_cn_mobile(text: &str) -> bool {
    CN_MOBILE.is_match(text)
}

/// Coerce a value to a mobile number without the `+86` prefix
pub fn to_mobile(value: &Value) -> ConvertResult<String> {
    let text = to_string(value)?;
    let text = text.trim();
    if is_cn_mobile(text) {
        Ok(text.strip_prefix("+86").unwrap_or(text).to_owned())
    } else {
        Err(ConvertError::parse(text, "mobile number", "invalid mobile format"))
    }
}
