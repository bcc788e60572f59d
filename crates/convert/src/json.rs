//! JSON helpers

use crate::error::{ConvertError, ConvertResult, type_label};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Compact JSON text for any serializable value
pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> ConvertResult<String> {
    serde_json::to_string(value).map_err(|err| ConvertError::json(type_label::<T>(), err))
}

/// Tab-indented JSON text
pub fn to_styled_json_string<T: Serialize + ?Sized>(value: &T) -> ConvertResult<String> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|err| ConvertError::json(type_label::<T>(), err))?;
    String::from_utf8(out).map_err(|err| ConvertError::json(type_label::<T>(), err))
}

/// Decode JSON bytes into `T`
pub fn from_json_slice<T: DeserializeOwned>(bytes: &[u8]) -> ConvertResult<T> {
    serde_json::from_slice(bytes).map_err(|err| ConvertError::json(type_label::<T>(), err))
}

/// Copy `src` into a fresh `D` by way of its JSON form.
///
/// Works across types whose JSON shapes agree.
pub fn deep_copy<S, D>(src: &S) -> ConvertResult<D>
where
    S: Serialize + ?Sized,
    D: DeserializeOwned,
{
    let json = serde_json::to_value(src).map_err(|err| ConvertError::json(type_label::<D>(), err))?;
    serde_json::from_value(json).map_err(|err| ConvertError::json(type_label::<D>(), err))
}

/// Body of the JSON string literal for `text`, without the surrounding quotes
pub fn json_escape(text: &str) -> String {
    let quoted = serde_json::Value::String(text.to_owned()).to_string();
    quoted[1..quoted.len() - 1].to_owned()
}
