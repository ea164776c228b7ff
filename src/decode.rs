//! Purpose: Reference decoding collaborator that builds typed documents from JSON values.
//! Exports: `DocumentDecoder`.
//! Role: Walks a parsed document, asking the resolver for an instance at every nesting level.
//! Invariants: Paths are built outermost-first; array elements use their index as a segment.
//! Invariants: Any resolver error aborts the decode; partial trees are dropped, not returned.

use serde_json::{Map, Value};

use crate::core::doc::{Document, FieldValue};
use crate::core::error::{Error, ErrorKind};
use crate::core::path::FieldPath;
use crate::core::resolver::PathTypeResolver;
use crate::json::parse;

#[derive(Clone, Copy, Debug)]
pub struct DocumentDecoder<'a> {
    resolver: &'a PathTypeResolver,
}

impl<'a> DocumentDecoder<'a> {
    pub fn new(resolver: &'a PathTypeResolver) -> Self {
        Self { resolver }
    }

    pub fn decode_str(&self, input: &str) -> Result<Box<dyn Document>, Error> {
        let value: Value = parse::from_str(input).map_err(|err| {
            let category = parse::categorize_error(&err);
            Error::new(ErrorKind::Decode)
                .with_message(format!("invalid document json ({})", category.label()))
                .with_source(err)
        })?;
        self.decode_value(&value)
    }

    pub fn decode_value(&self, value: &Value) -> Result<Box<dyn Document>, Error> {
        let Value::Object(members) = value else {
            return Err(Error::new(ErrorKind::Decode)
                .with_message(format!("document root must be an object, got {}", kind(value)))
                .with_path(FieldPath::root()));
        };
        let mut path = FieldPath::root();
        self.decode_object(members, &mut path)
    }

    fn decode_object(
        &self,
        members: &Map<String, Value>,
        path: &mut FieldPath,
    ) -> Result<Box<dyn Document>, Error> {
        let mut doc = self.resolver.new_instance(path)?;
        for (key, value) in members {
            path.push(key.as_str());
            let field = self.decode_field(value, path);
            path.pop();
            doc.put(key, field?);
        }
        Ok(doc)
    }

    fn decode_field(&self, value: &Value, path: &mut FieldPath) -> Result<FieldValue, Error> {
        match value {
            Value::Object(members) => Ok(FieldValue::Document(self.decode_object(members, path)?)),
            Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for (idx, item) in items.iter().enumerate() {
                    path.push(idx.to_string());
                    let field = self.decode_field(item, path);
                    path.pop();
                    out.push(field?);
                }
                Ok(FieldValue::List(out))
            }
            scalar => Ok(FieldValue::Scalar(scalar.clone())),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
