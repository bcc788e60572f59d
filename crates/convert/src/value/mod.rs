//! The dynamic value model
//!
//! [`Value`] is the closed set of runtime shapes the coercion matrix accepts.
//! Reference layers, self-rendering values and error values are first-class
//! variants, so a coercion never has to guess at a value's concrete type.

mod kind;
mod render;
mod serde;

pub use kind::ValueKind;
pub use render::{Displayed, Markup, MarkupKind, Render};

use crate::version::VersionInfo;
use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use indexmap::IndexMap;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

/// Timestamp type produced by time coercions
pub type Timestamp = DateTime<FixedOffset>;

/// A runtime value of unknown concrete type
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absent value
    #[default]
    Null,

    Bool(bool),

    /// Any signed integer width
    Int(i64),

    /// Any unsigned integer width
    Uint(u64),

    Float(f64),

    /// 32-bit float, kept apart so it renders in its own shortest form
    Float32(f32),

    Str(String),

    /// Raw byte sequence
    Bytes(Vec<u8>),

    /// Markup-safe text (HTML, URL, JS, CSS, attribute)
    Markup(Markup),

    Seq(Vec<Value>),

    /// Ordered entries; keys may be of any kind
    Map(Vec<(Value, Value)>),

    Time(Timestamp),

    /// Signed elapsed time
    Duration(TimeDelta),

    Version(VersionInfo),

    /// A reference layer; `None` is a null reference
    Ref(Option<Arc<Value>>),

    /// Value that renders itself to text
    Render(Arc<dyn Render>),

    /// Value that renders as an error message
    Error(Arc<dyn std::error::Error + Send + Sync>),

    /// Function value, carrying its fully qualified name
    Func(Cow<'static, str>),
}

impl Value {
    // ==================== Constructors ====================

    pub const fn null() -> Self {
        Self::Null
    }

    pub fn text(v: impl Into<String>) -> Self {
        Self::Str(v.into())
    }

    pub fn bytes(v: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(v.into())
    }

    pub fn markup(kind: MarkupKind, text: impl Into<String>) -> Self {
        Self::Markup(Markup::new(kind, text))
    }

    /// Sequence from anything convertible into values
    pub fn seq<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::Seq(items.into_iter().map(Into::into).collect())
    }

    /// Mapping from key/value pairs, in iteration order
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Wrap a value in one reference layer
    pub fn reference(v: impl Into<Value>) -> Self {
        Self::Ref(Some(Arc::new(v.into())))
    }

    pub const fn null_ref() -> Self {
        Self::Ref(None)
    }

    pub fn renderable(r: impl Render + 'static) -> Self {
        Self::Render(Arc::new(r))
    }

    /// Renderable backed by a `Display` implementation
    pub fn display<T>(v: T) -> Self
    where
        T: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self::renderable(Displayed(v))
    }

    pub fn error(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Error(Arc::new(e))
    }

    /// Function value named by the function's type path
    pub fn function<F: ?Sized>(_f: &F) -> Self {
        Self::Func(Cow::Borrowed(std::any::type_name::<F>()))
    }

    pub fn named_function(qualified: impl Into<Cow<'static, str>>) -> Self {
        Self::Func(qualified.into())
    }

    // ==================== Inspection ====================

    pub fn kind(&self) -> ValueKind {
        ValueKind::from_value(self)
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Text content of `Str` and `Markup` values
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Markup(m) => Some(m.as_str()),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Self::Seq(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&[(Value, Value)]> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Uint(a), Self::Uint(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Float32(a), Self::Float32(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            (Self::Markup(a), Self::Markup(b)) => a == b,
            (Self::Seq(a), Self::Seq(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Time(a), Self::Time(b)) => a == b,
            (Self::Duration(a), Self::Duration(b)) => a == b,
            (Self::Version(a), Self::Version(b)) => a == b,
            (Self::Ref(a), Self::Ref(b)) => a == b,
            (Self::Render(a), Self::Render(b)) => Arc::ptr_eq(a, b),
            (Self::Error(a), Self::Error(b)) => Arc::ptr_eq(a, b),
            (Self::Func(a), Self::Func(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Uint(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Float32(x) => write!(f, "{x}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Bytes(b) => write!(f, "bytes[{}]", b.len()),
            Self::Markup(m) => write!(f, "{:?}", m.as_str()),
            Self::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                f.write_str("}")
            }
            Self::Time(t) => f.write_str(&t.to_rfc3339()),
            Self::Duration(d) => f.write_str(&crate::parse::format_duration(*d)),
            Self::Version(v) => write!(f, "{v}"),
            Self::Ref(Some(inner)) => write!(f, "&{inner}"),
            Self::Ref(None) => f.write_str("&null"),
            Self::Render(r) => f.write_str(&r.render()),
            Self::Error(e) => write!(f, "{e}"),
            Self::Func(name) => write!(f, "func {name}"),
        }
    }
}

// ==================== From impls ====================

macro_rules! from_scalar {
    ($variant:ident as $inner:ty: $($ty:ty),+ $(,)?) => {$(
        impl From<$ty> for Value {
            #[allow(trivial_numeric_casts)]
            fn from(v: $ty) -> Self {
                Self::$variant(v as $inner)
            }
        }
    )+};
}

from_scalar!(Int as i64: i8, i16, i32, i64, isize);
from_scalar!(Uint as u64: u8, u16, u32, u64, usize);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float32(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Markup> for Value {
    fn from(v: Markup) -> Self {
        Self::Markup(v)
    }
}

impl From<Timestamp> for Value {
    fn from(v: Timestamp) -> Self {
        Self::Time(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Time(v.fixed_offset())
    }
}

impl From<TimeDelta> for Value {
    fn from(v: TimeDelta) -> Self {
        Self::Duration(v)
    }
}

impl From<VersionInfo> for Value {
    fn from(v: VersionInfo) -> Self {
        Self::Version(v)
    }
}

impl From<Arc<Value>> for Value {
    fn from(v: Arc<Value>) -> Self {
        Self::Ref(Some(v))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::seq(v)
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(v: [T; N]) -> Self {
        Self::seq(v)
    }
}

impl<K: Into<Value>, V: Into<Value>, S> From<HashMap<K, V, S>> for Value {
    fn from(v: HashMap<K, V, S>) -> Self {
        Self::map(v)
    }
}

impl<K: Into<Value>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(v: BTreeMap<K, V>) -> Self {
        Self::map(v)
    }
}

impl<K: Into<Value>, V: Into<Value>, S> From<IndexMap<K, V, S>> for Value {
    fn from(v: IndexMap<K, V, S>) -> Self {
        Self::map(v)
    }
}
