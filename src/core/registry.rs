//! Purpose: Name-addressed type registry and a serde config for building resolvers.
//! Exports: `TypeRegistry`, `ResolverConfig`.
//! Role: Lets override tables live in JSON config files and bind to compiled-in types.
//! Invariants: Unknown type names are configuration errors, reported before any decode.
//! Invariants: Config parsing rejects unknown fields so typos fail loudly.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::doc::Document;
use crate::core::doc_type::DocType;
use crate::core::error::{Error, ErrorKind};
use crate::core::path::FieldPath;
use crate::core::resolver::PathTypeResolver;
use crate::json::parse;

#[derive(Clone, Debug, Default)]
pub struct TypeRegistry {
    types: BTreeMap<String, DocType>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-seeded with the default container under its own name.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(DocType::generic());
        registry
    }

    /// Registers under `doc_type.name()`, returning any handle it replaced.
    pub fn register(&mut self, doc_type: DocType) -> Option<DocType> {
        self.register_as(doc_type.name().to_string(), doc_type)
    }

    pub fn register_as(&mut self, name: impl Into<String>, doc_type: DocType) -> Option<DocType> {
        self.types.insert(name.into(), doc_type)
    }

    pub fn register_type<T: Document + Default>(&mut self) -> Option<DocType> {
        self.register(DocType::of::<T>())
    }

    pub fn get(&self, name: &str) -> Option<&DocType> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.types.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn build_resolver(&self, config: &ResolverConfig) -> Result<PathTypeResolver, Error> {
        let root = self.lookup(&config.root, None)?;
        let mut overrides = Vec::with_capacity(config.overrides.len());
        for (key, name) in &config.overrides {
            overrides.push((key.as_str(), self.lookup(name, Some(key.as_str()))?));
        }
        Ok(PathTypeResolver::new(root, overrides))
    }

    fn lookup(&self, name: &str, key: Option<&str>) -> Result<DocType, Error> {
        if let Some(doc_type) = self.types.get(name) {
            return Ok(doc_type.clone());
        }
        let mut err = Error::new(ErrorKind::Configuration)
            .with_message("unknown type name")
            .with_type_name(name)
            .with_hint(format!(
                "Registered types: {}",
                self.names().collect::<Vec<_>>().join(", ")
            ));
        if let Some(key) = key {
            err = err.with_path(FieldPath::from_dotted(key));
        }
        Err(err)
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ResolverConfig {
    pub root: String,
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
}

impl ResolverConfig {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            overrides: BTreeMap::new(),
        }
    }

    pub fn with_override(mut self, key: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.overrides.insert(key.into(), type_name.into());
        self
    }

    pub fn from_json_str(input: &str) -> Result<Self, Error> {
        parse::from_str(input).map_err(|err| {
            let category = parse::categorize_error(&err);
            Error::new(ErrorKind::Configuration)
                .with_message(format!("invalid resolver config ({})", category.label()))
                .with_source(err)
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| {
            Error::new(ErrorKind::Io)
                .with_message(format!("failed to read {}", path.display()))
                .with_source(err)
        })?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self).map_err(|err| {
            Error::new(ErrorKind::Configuration)
                .with_message("failed to encode resolver config")
                .with_source(err)
        })
    }
}
