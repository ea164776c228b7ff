//! Purpose: Runtime handle for a concrete document type and its no-argument factory.
//! Exports: `DocType`, `DocumentFactory`.
//! Role: The "type" value stored in bindings, layouts, and registries.
//! Invariants: A `DocType` is immutable; its factory and layout source are captured at creation.
//! Invariants: Declared layouts are built on first use, so self-referential types stay finite.
//! Invariants: Equality compares type name and `TypeId`, never the factory itself.
//! Notes: Factories may fail (abstract or broken types); failures surface at instantiation.

use std::any::{TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use crate::core::doc::{Document, GenericDocument};
use crate::core::error::BoxError;
use crate::core::layout::{DescribeFields, FieldLayout, FieldTypeProvider};

pub type DocumentFactory = dyn Fn() -> Result<Box<dyn Document>, BoxError> + Send + Sync;

#[derive(Clone)]
pub struct DocType {
    inner: Arc<Inner>,
}

struct Inner {
    name: String,
    type_id: Option<TypeId>,
    factory: Box<DocumentFactory>,
    fields: Fields,
}

enum Fields {
    Absent,
    Ready(Arc<dyn FieldTypeProvider>),
    Deferred {
        init: fn() -> FieldLayout,
        cell: OnceLock<Arc<dyn FieldTypeProvider>>,
    },
}

impl DocType {
    /// Handle for a Rust type constructed through `Default`.
    pub fn of<T: Document + Default>() -> Self {
        Self::build(
            short_type_name::<T>(),
            Some(TypeId::of::<T>()),
            Box::new(|| Ok(Box::new(T::default()) as Box<dyn Document>)),
            Fields::Absent,
        )
    }

    /// Like `of`, plus the field layout `T` declares.
    ///
    /// `T::field_layout` runs on the first `field_types` call of this handle, not here;
    /// a layout may name `described::<T>()` again (e.g. a `parent` field).
    pub fn described<T: Document + Default + DescribeFields>() -> Self {
        Self::build(
            short_type_name::<T>(),
            Some(TypeId::of::<T>()),
            Box::new(|| Ok(Box::new(T::default()) as Box<dyn Document>)),
            Fields::Deferred {
                init: T::field_layout,
                cell: OnceLock::new(),
            },
        )
    }

    /// The default container type.
    pub fn generic() -> Self {
        Self::of::<GenericDocument>()
    }

    /// Handle backed by an arbitrary, possibly failing, factory.
    pub fn with_factory<F>(name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Result<Box<dyn Document>, BoxError> + Send + Sync + 'static,
    {
        Self::build(name.into(), None, Box::new(factory), Fields::Absent)
    }

    /// A type that can be bound but never constructed.
    pub fn abstract_type(name: impl Into<String>) -> Self {
        let name = name.into();
        let message = format!("{name} is abstract and has no constructor");
        Self::with_factory(name, move || Err(message.clone().into()))
    }

    /// Returns a copy of this handle carrying `provider` as its field layout.
    pub fn with_field_types(&self, provider: impl FieldTypeProvider + 'static) -> Self {
        Self {
            inner: Arc::new(Inner {
                name: self.inner.name.clone(),
                type_id: self.inner.type_id,
                factory: {
                    let source = self.clone();
                    Box::new(move || source.instantiate())
                },
                fields: Fields::Ready(Arc::new(provider)),
            }),
        }
    }

    fn build(
        name: String,
        type_id: Option<TypeId>,
        factory: Box<DocumentFactory>,
        fields: Fields,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                name,
                type_id,
                factory,
                fields,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn type_id(&self) -> Option<TypeId> {
        self.inner.type_id
    }

    pub fn is<T: Document>(&self) -> bool {
        self.inner.type_id == Some(TypeId::of::<T>())
    }

    pub fn field_types(&self) -> Option<Arc<dyn FieldTypeProvider>> {
        match &self.inner.fields {
            Fields::Absent => None,
            Fields::Ready(provider) => Some(Arc::clone(provider)),
            Fields::Deferred { init, cell } => Some(Arc::clone(
                cell.get_or_init(|| Arc::new(init()) as Arc<dyn FieldTypeProvider>),
            )),
        }
    }

    pub fn has_field_types(&self) -> bool {
        !matches!(self.inner.fields, Fields::Absent)
    }

    /// Runs the factory; no instance is cached.
    pub fn instantiate(&self) -> Result<Box<dyn Document>, BoxError> {
        (self.inner.factory)()
    }
}

impl PartialEq for DocType {
    fn eq(&self, other: &Self) -> bool {
        self.inner.name == other.inner.name && self.inner.type_id == other.inner.type_id
    }
}

impl Eq for DocType {}

impl Hash for DocType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.name.hash(state);
        self.inner.type_id.hash(state);
    }
}

impl fmt::Debug for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocType")
            .field("name", &self.inner.name)
            .field("has_field_types", &self.has_field_types())
            .finish()
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.name)
    }
}

fn short_type_name<T: ?Sized>() -> String {
    let full = type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    let short = base.rsplit("::").next().unwrap_or(base);
    full[base.len() - short.len()..].to_string()
}
