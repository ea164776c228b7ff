//! Purpose: Field-layout capability used as the resolver's fallback tier.
//! Exports: `FieldTypeProvider`, `DescribeFields`, `FieldLayout`.
//! Role: Lets a root type describe which document type backs each of its fields.
//! Invariants: Lookups are pure; a layout never changes after construction.
//! Invariants: Nested paths descend only through field types that carry their own layout.

use std::collections::BTreeMap;
use std::fmt;

use crate::core::doc_type::DocType;
use crate::core::path::FieldPath;

/// Supplies a document type for a path relative to the type that owns it.
pub trait FieldTypeProvider: Send + Sync {
    fn field_type(&self, path: &FieldPath) -> Option<DocType>;
}

/// Implemented by document types that declare their field layout.
pub trait DescribeFields {
    fn field_layout() -> FieldLayout;
}

#[derive(Clone, Default)]
pub struct FieldLayout {
    fields: BTreeMap<String, DocType>,
}

impl FieldLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, doc_type: DocType) -> Self {
        self.fields.insert(name.into(), doc_type);
        self
    }

    pub fn get(&self, name: &str) -> Option<&DocType> {
        self.fields.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FieldTypeProvider for FieldLayout {
    fn field_type(&self, path: &FieldPath) -> Option<DocType> {
        let (first, rest) = path.segments().split_first()?;
        let field = self.fields.get(first)?;
        if rest.is_empty() {
            return Some(field.clone());
        }
        let nested = field.field_types()?;
        nested.field_type(&FieldPath::new(rest.iter().cloned()))
    }
}

impl fmt::Debug for FieldLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.fields.iter().map(|(name, ty)| (name, ty.name())))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldLayout, FieldTypeProvider};
    use crate::core::doc_type::DocType;
    use crate::core::path::FieldPath;

    fn address() -> DocType {
        DocType::abstract_type("Address")
            .with_field_types(FieldLayout::new().field("geo", DocType::abstract_type("Geo")))
    }

    #[test]
    fn top_level_field_resolves() {
        let layout = FieldLayout::new().field("address", address());
        let found = layout.field_type(&FieldPath::from(["address"]));
        assert_eq!(found.map(|ty| ty.name().to_string()), Some("Address".to_string()));
    }

    #[test]
    fn nested_field_descends_through_described_types() {
        let layout = FieldLayout::new()
            .field("address", address())
            .field("note", DocType::abstract_type("Note"));

        let geo = layout.field_type(&FieldPath::from(["address", "geo"]));
        assert_eq!(geo.map(|ty| ty.name().to_string()), Some("Geo".to_string()));

        assert!(layout.field_type(&FieldPath::from(["address", "zip"])).is_none());
        assert!(layout.field_type(&FieldPath::from(["note", "body"])).is_none());
    }

    #[test]
    fn root_and_unknown_paths_yield_nothing() {
        let layout = FieldLayout::new().field("address", address());
        assert!(layout.field_type(&FieldPath::root()).is_none());
        assert!(layout.field_type(&FieldPath::from(["billing"])).is_none());
        assert_eq!(layout.names().collect::<Vec<_>>(), vec!["address"]);
    }
}
