//! `stockpad-desktop`
//!
//! **Responsibility:** the desktop inventory entry form.
//!
//! This crate provides:
//! - Shared types crossing the Tauri/WASM boundary
//! - The backend submit pipeline and Tauri command layer
//! - A Leptos form frontend (compiled only for `wasm32`)
//!
//! The desktop shell is a **thin shell** around the pure inventory domain
//! and the SQLite store.

pub mod types;

#[cfg(not(target_arch = "wasm32"))]
pub mod submit;

#[cfg(all(not(target_arch = "wasm32"), feature = "tauri"))]
pub mod commands;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use types::{InsertedItem, StartupInfo};
