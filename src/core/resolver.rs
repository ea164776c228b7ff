//! Purpose: Resolve which document type backs a field path and build empty instances of it.
//! Exports: `PathTypeResolver`, `Resolution`, `ResolutionSource`.
//! Role: Lookup service called by decoders once per subdocument.
//! Invariants: Bindings always contain the root path; they are frozen after `new`.
//! Invariants: Resolution order is binding, then root field layout, then `GenericDocument`.
//! Invariants: A bound type that fails to construct is an error, never a silent default.
//! Notes: Override keys are split literally; see `FieldPath::from_dotted`.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use crate::core::doc::Document;
use crate::core::doc_type::DocType;
use crate::core::error::{Error, ErrorKind};
use crate::core::layout::FieldTypeProvider;
use crate::core::path::FieldPath;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolutionSource {
    Binding,
    Fallback,
    Default,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Resolution {
    pub doc_type: DocType,
    pub source: ResolutionSource,
}

#[derive(Clone)]
pub struct PathTypeResolver {
    bindings: HashMap<FieldPath, DocType>,
    fallback: Option<Arc<dyn FieldTypeProvider>>,
    default_type: DocType,
}

impl PathTypeResolver {
    pub fn with_root(root: DocType) -> Self {
        Self::new(root, BTreeMap::<String, DocType>::new())
    }

    /// The fallback layout is taken from `root`, even when an `""` override replaces it.
    pub fn new<I, K>(root: DocType, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, DocType)>,
        K: AsRef<str>,
    {
        let fallback = root.field_types();
        let mut bindings = HashMap::new();
        bindings.insert(FieldPath::root(), root);

        let ordered: BTreeMap<String, DocType> = overrides
            .into_iter()
            .map(|(key, doc_type)| (key.as_ref().to_string(), doc_type))
            .collect();
        for (key, doc_type) in ordered {
            let path = FieldPath::from_dotted(&key);
            if path.is_root() {
                tracing::warn!(
                    replacement = %doc_type,
                    "override replaces the root type binding"
                );
            }
            bindings.insert(path, doc_type);
        }

        tracing::debug!(
            bindings = bindings.len(),
            fallback = fallback.is_some(),
            "path type resolver ready"
        );

        Self {
            bindings,
            fallback,
            default_type: DocType::generic(),
        }
    }

    pub fn type_at(&self, path: &FieldPath) -> Option<&DocType> {
        self.bindings.get(path)
    }

    pub fn resolve_root_type(&self) -> &DocType {
        // Seeded in `new` and never removed.
        &self.bindings[&FieldPath::root()]
    }

    pub fn bindings(&self) -> &HashMap<FieldPath, DocType> {
        &self.bindings
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    pub fn default_type(&self) -> &DocType {
        &self.default_type
    }

    /// The type `new_instance` would construct at `path`, and which tier chose it.
    pub fn resolve(&self, path: &FieldPath) -> Resolution {
        if let Some(doc_type) = self.bindings.get(path) {
            return Resolution {
                doc_type: doc_type.clone(),
                source: ResolutionSource::Binding,
            };
        }
        if let Some(doc_type) = self
            .fallback
            .as_ref()
            .and_then(|fallback| fallback.field_type(path))
        {
            return Resolution {
                doc_type,
                source: ResolutionSource::Fallback,
            };
        }
        Resolution {
            doc_type: self.default_type.clone(),
            source: ResolutionSource::Default,
        }
    }

    pub fn new_instance(&self, path: &FieldPath) -> Result<Box<dyn Document>, Error> {
        let resolution = self.resolve(path);
        match resolution.source {
            ResolutionSource::Default => {
                tracing::debug!(%path, "no type bound, using default container");
            }
            source => {
                tracing::trace!(%path, doc_type = %resolution.doc_type, ?source, "resolved");
            }
        }
        resolution
            .doc_type
            .instantiate()
            .map_err(|source| Error::instantiation(resolution.doc_type.name(), path, source))
    }

    /// Checks every binding up front; never run implicitly.
    ///
    /// Rejects override keys with empty segments and bound types whose factory fails.
    pub fn validate(&self) -> Result<(), Error> {
        let mut paths: Vec<&FieldPath> = self.bindings.keys().collect();
        paths.sort();
        for path in paths {
            if path.has_empty_segment() {
                return Err(Error::new(ErrorKind::Configuration)
                    .with_message("override key has an empty segment")
                    .with_path(path.clone())
                    .with_hint("Check for leading, trailing, or doubled '.' separators."));
            }
            let doc_type = &self.bindings[path];
            if let Err(source) = doc_type.instantiate() {
                return Err(Error::new(ErrorKind::Configuration)
                    .with_message("bound type is not instantiable")
                    .with_type_name(doc_type.name())
                    .with_path(path.clone())
                    .with_boxed_source(source));
            }
        }
        Ok(())
    }
}

impl fmt::Debug for PathTypeResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bindings: Vec<_> = self.bindings.iter().collect();
        bindings.sort_by(|a, b| a.0.cmp(b.0));
        f.debug_struct("PathTypeResolver")
            .field(
                "bindings",
                &bindings
                    .into_iter()
                    .map(|(path, ty)| (path.to_string(), ty.name().to_string()))
                    .collect::<Vec<_>>(),
            )
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}
