//! Shared types for both backend and frontend (WASM-compatible).
//!
//! Everything here crosses the Tauri boundary as JSON and must not depend
//! on backend-only dependencies like `tokio` or `sqlx`.

use serde::{Deserialize, Serialize};

/// Confirmation of a committed insert, ready for the log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertedItem {
    pub id: i64,
    pub name: String,
}

/// Seed data for the session log shown at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartupInfo {
    /// Highest id assigned so far, 0 for an empty store.
    pub max_id: i64,
}
