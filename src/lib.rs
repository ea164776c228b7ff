//! Purpose: Path-addressed type resolution for decoding nested documents into typed objects.
//! Exports: `api` (stable surface), `core` (resolver, types, errors), `decode` (JSON walker).
//! Role: Library consulted by document decoders once per subdocument they enter.
//! Invariants: Resolvers are immutable after construction and safe to share across threads.
//! Invariants: Core modules prefer explicit inputs/outputs over hidden state.
#[cfg(test)]
#[macro_use]
mod test_support;

pub mod api;
pub mod core;
pub mod decode;
mod json;
