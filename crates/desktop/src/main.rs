//! Tauri application entry point.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(feature = "tauri")]
use stockpad_desktop::commands::{AppState, add_item, startup_info};

#[cfg(feature = "tauri")]
#[tokio::main]
async fn main() {
    stockpad_observability::init();

    let db_path = match stockpad_store::default_db_path() {
        Ok(path) => path,
        Err(err) => {
            tracing::error!("failed to resolve store path: {err:#}");
            std::process::exit(1);
        }
    };

    // Fatal: the form must never come up against a store that failed to
    // initialize.
    let store = match stockpad_store::InventoryStore::open(&db_path).await {
        Ok(store) => store,
        Err(err) => {
            tracing::error!("store initialization failed: {err:#}");
            std::process::exit(1);
        }
    };

    tauri::Builder::default()
        .manage(AppState::new(store))
        .invoke_handler(tauri::generate_handler![startup_info, add_item])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

#[cfg(not(feature = "tauri"))]
fn main() {
    eprintln!("This binary requires the 'tauri' feature to be enabled.");
    eprintln!("Build with: cargo build --features tauri");
    std::process::exit(1);
}
