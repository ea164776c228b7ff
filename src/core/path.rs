//! Purpose: Define `FieldPath`, the key type for path-addressed type bindings.
//! Exports: `FieldPath`, `SEPARATOR`.
//! Role: Shared addressing value between the resolver, layouts, and decoders.
//! Invariants: Equality is element-wise and order-sensitive; no prefix matching.
//! Invariants: The empty segment list is the document root.
//! Notes: Dotted keys are split literally; empty segments are kept as-is.

use std::fmt;

pub const SEPARATOR: char = '.';

#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Splits an override key on `.`.
    ///
    /// The empty key designates the root. Any other key keeps every segment,
    /// so `"a..b"` is `["a", "", "b"]` and `"a."` is `["a", ""]`.
    ///
    /// This is not a regex-style split that drops trailing empty pieces: such a
    /// split turns `"a."` into `["a"]`, aliasing the `"a"` binding, and `""` into
    /// the one-segment path `[""]` rather than the root. Keys with empty segments
    /// are kept as written; `PathTypeResolver::validate` reports them.
    pub fn from_dotted(key: &str) -> Self {
        if key.is_empty() {
            return Self::root();
        }
        Self::new(key.split(SEPARATOR))
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn first(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    pub fn has_empty_segment(&self) -> bool {
        self.segments.iter().any(String::is_empty)
    }

    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    pub fn pop(&mut self) -> Option<String> {
        self.segments.pop()
    }

    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.push(segment);
        next
    }

    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        let mut parent = self.clone();
        parent.pop();
        Some(parent)
    }

    /// Everything after the first segment; `None` at the root.
    pub fn tail(&self) -> Option<Self> {
        self.segments.split_first().map(|(_, rest)| Self {
            segments: rest.to_vec(),
        })
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("<root>");
        }
        for (idx, segment) in self.segments.iter().enumerate() {
            if idx > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for FieldPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<String>> for FieldPath {
    fn from(segments: Vec<String>) -> Self {
        Self { segments }
    }
}

impl From<&[&str]> for FieldPath {
    fn from(segments: &[&str]) -> Self {
        Self::new(segments.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for FieldPath {
    fn from(segments: [&str; N]) -> Self {
        Self::new(segments)
    }
}
