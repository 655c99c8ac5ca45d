//! Tauri commands for frontend integration.

use std::sync::Arc;

use tauri::State;

use stockpad_inventory::ItemDraft;
use stockpad_store::InventoryStore;

use crate::submit::submit_item;
use crate::types::{InsertedItem, StartupInfo};

/// Application state shared across Tauri commands.
///
/// Owns the single long-lived store handle for the process (opened once in
/// `main`, released when the process exits).
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<InventoryStore>,
}

impl AppState {
    pub fn new(store: InventoryStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Current highest assigned id, for the startup status line.
#[tauri::command]
pub async fn startup_info(state: State<'_, AppState>) -> Result<StartupInfo, String> {
    let max_id = state.store.max_id().await.map_err(|e| format!("{e:#}"))?;

    Ok(StartupInfo { max_id })
}

/// Validate, compute and persist one inventory entry.
///
/// The `Err` side carries the user-facing dialog message; the form keeps
/// its fields in that case and clears them on `Ok`.
#[tauri::command]
pub async fn add_item(
    draft: ItemDraft,
    state: State<'_, AppState>,
) -> Result<InsertedItem, String> {
    submit_item(&state.store, &draft)
        .await
        .map_err(|e| e.to_string())
}
