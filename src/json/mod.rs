//! Purpose: Internal JSON text parsing boundary shared by config loading and decoding.
//! Exports: `parse` module with decode helpers and failure categorization.
//! Role: Single seam for parser details so callsites avoid ad hoc decode logic.
//! Invariants: JSON text entering the crate goes through this module.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub(crate) mod parse;
