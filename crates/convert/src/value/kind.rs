//! Value kinds
//!
//! `ValueKind` is the lightweight classification of a [`Value`] that error
//! messages and dispatch use.

use super::Value;
use core::fmt::{Display, Formatter};

/// Represents the kind of a [`Value`]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Uint,
    Float,
    String,
    Bytes,
    Markup,
    Seq,
    Map,
    Time,
    Duration,
    Version,
    Reference,
    Renderable,
    Error,
    Function,
}

impl ValueKind {
    /// Get the kind from a Value
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Int(_) => Self::Int,
            Value::Uint(_) => Self::Uint,
            Value::Float(_) | Value::Float32(_) => Self::Float,
            Value::Str(_) => Self::String,
            Value::Bytes(_) => Self::Bytes,
            Value::Markup(_) => Self::Markup,
            Value::Seq(_) => Self::Seq,
            Value::Map(_) => Self::Map,
            Value::Time(_) => Self::Time,
            Value::Duration(_) => Self::Duration,
            Value::Version(_) => Self::Version,
            Value::Ref(_) => Self::Reference,
            Value::Render(_) => Self::Renderable,
            Value::Error(_) => Self::Error,
            Value::Func(_) => Self::Function,
        }
    }

    /// Check if this kind is numeric
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int | Self::Uint | Self::Float)
    }

    /// Check if this kind holds text that string parsers accept
    pub const fn is_textual(&self) -> bool {
        matches!(self, Self::String | Self::Markup)
    }

    /// Check if this kind is a collection
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::Seq | Self::Map)
    }

    /// Get a descriptive name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Float => "float",
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::Markup => "markup",
            Self::Seq => "sequence",
            Self::Map => "map",
            Self::Time => "time",
            Self::Duration => "duration",
            Self::Version => "version",
            Self::Reference => "reference",
            Self::Renderable => "renderable",
            Self::Error => "error",
            Self::Function => "function",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
