//! Purpose: Define the stable public Rust API boundary for docbind.
//! Exports: Core types and operations needed by decoders and applications.
//! Role: Public, additive-only surface over the `core` and `decode` modules.
//! Invariants: Callers should not need to name `core::*` paths directly.

pub use crate::core::doc::{Document, FieldValue, GenericDocument};
pub use crate::core::doc_type::{DocType, DocumentFactory};
pub use crate::core::error::{BoxError, Error, ErrorKind};
pub use crate::core::layout::{DescribeFields, FieldLayout, FieldTypeProvider};
pub use crate::core::path::FieldPath;
pub use crate::core::registry::{ResolverConfig, TypeRegistry};
pub use crate::core::resolver::{PathTypeResolver, Resolution, ResolutionSource};
pub use crate::decode::DocumentDecoder;
