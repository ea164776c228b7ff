//! Purpose: Crate-wide error model for resolver construction, instantiation, and decode.
//! Exports: `Error`, `ErrorKind`, `BoxError`.
//! Role: Single error type surfaced by every fallible operation.
//! Invariants: Instantiation errors always carry the attempted type name and path.
//! Invariants: Underlying causes are preserved through `source()`, never flattened.
use std::error::Error as StdError;
use std::fmt;

use crate::core::path::FieldPath;

pub type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Configuration,
    Instantiation,
    Decode,
    Io,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    type_name: Option<String>,
    path: Option<FieldPath>,
    hint: Option<String>,
    source: Option<BoxError>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            type_name: None,
            path: None,
            hint: None,
            source: None,
        }
    }

    pub(crate) fn instantiation(type_name: &str, path: &FieldPath, source: BoxError) -> Self {
        Self::new(ErrorKind::Instantiation)
            .with_message("can't create a new instance")
            .with_type_name(type_name)
            .with_path(path.clone())
            .with_boxed_source(source)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    pub fn path(&self) -> Option<&FieldPath> {
        self.path.as_ref()
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<FieldPath>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn with_boxed_source(mut self, source: BoxError) -> Self {
        self.source = Some(source);
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(type_name) = &self.type_name {
            write!(f, " (type: {type_name})")?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {path})")?;
        }
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}
