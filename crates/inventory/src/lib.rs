//! `stockpad-inventory` — the inventory entry domain.
//!
//! Pure validation and arithmetic for inventory entries. No UI or storage
//! concerns; the desktop shell and the store both build on this crate.

pub mod entry;

pub use entry::{ItemDraft, NewItem};
