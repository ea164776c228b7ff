//! Purpose: Define the object model that decoded documents are written into.
//! Exports: `Document`, `FieldValue`, `GenericDocument`.
//! Role: Target trait for typed document structs plus the default untyped container.
//! Invariants: `GenericDocument` preserves first-insertion key order; re-puts replace in place.
//! Invariants: `Document` stays object-safe so resolvers can hand out `Box<dyn Document>`.

use std::any::Any;
use std::fmt;

use serde_json::{Map, Value};

/// A value stored under one key of a decoded document.
#[derive(Debug)]
pub enum FieldValue {
    Scalar(Value),
    List(Vec<FieldValue>),
    Document(Box<dyn Document>),
}

impl FieldValue {
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            FieldValue::Scalar(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Value::as_str)
    }

    pub fn as_list(&self) -> Option<&[FieldValue]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_document(&self) -> Option<&dyn Document> {
        match self {
            FieldValue::Document(doc) => Some(doc.as_ref()),
            _ => None,
        }
    }

    pub fn into_document(self) -> Option<Box<dyn Document>> {
        match self {
            FieldValue::Document(doc) => Some(doc),
            _ => None,
        }
    }

    /// Lossy JSON view; typed documents render through `Document::to_json`.
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Scalar(value) => value.clone(),
            FieldValue::List(items) => Value::Array(items.iter().map(FieldValue::to_json).collect()),
            FieldValue::Document(doc) => doc.to_json(),
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        FieldValue::Scalar(value)
    }
}

impl From<Box<dyn Document>> for FieldValue {
    fn from(doc: Box<dyn Document>) -> Self {
        FieldValue::Document(doc)
    }
}

/// An in-memory object a decoded subdocument is written into.
///
/// Implementors receive each child field through `put` in document order.
pub trait Document: Any + Send + Sync + fmt::Debug {
    fn put(&mut self, key: &str, value: FieldValue);

    fn get(&self, key: &str) -> Option<&FieldValue>;

    fn keys(&self) -> Vec<String>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn to_json(&self) -> Value {
        let mut out = Map::new();
        for key in self.keys() {
            if let Some(value) = self.get(&key) {
                out.insert(key, value.to_json());
            }
        }
        Value::Object(out)
    }
}

impl dyn Document {
    pub fn is<T: Document>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Document>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Document>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

/// Untyped container used wherever no specific type is bound.
#[derive(Debug, Default)]
pub struct GenericDocument {
    entries: Vec<(String, FieldValue)>,
}

impl GenericDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Document for GenericDocument {
    fn put(&mut self, key: &str, value: FieldValue) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|(k, _)| k.clone()).collect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
