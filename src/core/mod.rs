// Core modules implementing path addressing, type handles, resolution, and error modeling.
pub mod doc;
pub mod doc_type;
pub mod error;
pub mod layout;
pub mod path;
pub mod registry;
pub mod resolver;
