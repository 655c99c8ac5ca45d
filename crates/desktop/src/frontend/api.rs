//! API bindings using Tauri's invoke system via JavaScript.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::window;

use stockpad_inventory::ItemDraft;

use crate::types::{InsertedItem, StartupInfo};

/// Invoke a Tauri command from WASM.
///
/// Goes through `window.__TAURI__.core.invoke` (available because
/// `withGlobalTauri` is enabled). `args` must already be a plain object
/// whose keys match the command's parameter names.
async fn invoke_tauri<T>(cmd: &str, args: JsValue) -> Result<T, String>
where
    T: serde::de::DeserializeOwned,
{
    let window = window().ok_or_else(|| "No window object".to_string())?;

    let tauri_obj = js_sys::Reflect::get(&window, &JsValue::from_str("__TAURI__"))
        .map_err(|e| format!("Failed to get __TAURI__: {e:?}"))?;

    let core = js_sys::Reflect::get(&tauri_obj, &JsValue::from_str("core"))
        .map_err(|e| format!("Failed to get core: {e:?}"))?;

    let invoke_fn = js_sys::Reflect::get(&core, &JsValue::from_str("invoke"))
        .map_err(|e| format!("Failed to get invoke: {e:?}"))?;

    let invoke_function = js_sys::Function::from(invoke_fn);
    let promise = invoke_function
        .call2(&core, &JsValue::from_str(cmd), &args)
        .map_err(|e| format!("Failed to call invoke: {e:?}"))?;

    let result = JsFuture::from(js_sys::Promise::from(promise))
        .await
        .map_err(rejection_message)?;

    serde_wasm_bindgen::from_value(result)
        .map_err(|e| format!("Failed to deserialize result: {e:?}"))
}

/// A rejected command promise carries the command's `Err(String)` payload;
/// surface it as-is so dialogs show the backend's message.
fn rejection_message(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Current highest assigned id, for the startup status line.
pub async fn startup_info() -> Result<StartupInfo, String> {
    invoke_tauri("startup_info", js_sys::Object::new().into()).await
}

#[derive(Serialize)]
struct AddItemArgs<'a> {
    draft: &'a ItemDraft,
}

/// Submit one entry: validate, compute and persist on the backend.
pub async fn add_item(draft: &ItemDraft) -> Result<InsertedItem, String> {
    let args = serde_wasm_bindgen::to_value(&AddItemArgs { draft })
        .map_err(|e| format!("Failed to serialize args: {e:?}"))?;

    invoke_tauri("add_item", args).await
}
