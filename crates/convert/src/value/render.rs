//! Self-rendering values and markup-safe text

use super::Value;
use core::fmt;

/// A value that produces its own canonical text form.
///
/// String coercion consults [`Render::render`] before anything else. Other
/// targets look through to [`Render::underlying`] when it is provided, and
/// otherwise report the value as unsupported.
pub trait Render: fmt::Debug + Send + Sync {
    /// Canonical text form
    fn render(&self) -> String;

    /// The concrete value this renderable wraps, if any
    fn underlying(&self) -> Option<Value> {
        None
    }
}

/// Adapter that renders any `Display` type.
#[derive(Debug, Clone)]
pub struct Displayed<T>(pub T);

impl<T> Render for Displayed<T>
where
    T: fmt::Display + fmt::Debug + Send + Sync,
{
    fn render(&self) -> String {
        self.0.to_string()
    }
}

/// Kind of markup-safe text
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MarkupKind {
    Html,
    HtmlAttr,
    Js,
    Css,
    Url,
}

/// Text already escaped for a markup context.
///
/// Coerces exactly like plain text.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Markup {
    kind: MarkupKind,
    text: String,
}

impl Markup {
    pub fn new(kind: MarkupKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn html(text: impl Into<String>) -> Self {
        Self::new(MarkupKind::Html, text)
    }

    pub fn url(text: impl Into<String>) -> Self {
        Self::new(MarkupKind::Url, text)
    }

    pub const fn kind(&self) -> MarkupKind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
