//! The submit pipeline: validate, compute, persist, report.
//!
//! Kept free of any UI types so the whole per-submit state machine is
//! testable without Tauri.

use thiserror::Error;

use stockpad_core::DomainError;
use stockpad_inventory::ItemDraft;
use stockpad_store::InventoryStore;

use crate::types::InsertedItem;

/// Why a submit invocation did not commit.
///
/// The `Display` text is shown to the user verbatim; the form keeps its
/// fields as entered when it sees either variant.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Input rejected before touching the store.
    #[error(transparent)]
    Invalid(#[from] DomainError),

    /// The store-level insert failed; nothing was committed.
    #[error("failed to insert data: {0:#}")]
    Store(anyhow::Error),
}

/// Run one submit invocation to completion.
///
/// Validation failures never reach the store, and a store failure commits
/// nothing. On success the caller gets back the name together with the id
/// the store assigned, ready for the log line.
pub async fn submit_item(
    store: &InventoryStore,
    draft: &ItemDraft,
) -> Result<InsertedItem, SubmitError> {
    let item = draft.validate()?;

    let id = store.insert(&item).await.map_err(SubmitError::Store)?;

    tracing::info!(id, name = %item.name, "inserted inventory item");

    Ok(InsertedItem {
        id,
        name: item.name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_store(dir: &tempfile::TempDir) -> InventoryStore {
        InventoryStore::open(&dir.path().join("store.db"))
            .await
            .unwrap()
    }

    fn widget_draft() -> ItemDraft {
        ItemDraft {
            name: "Widget".to_string(),
            stock: "10".to_string(),
            cp: "2.50".to_string(),
            sp: "4.00".to_string(),
            vendor: "Acme".to_string(),
            vendor_phoneno: "555-1234".to_string(),
        }
    }

    #[tokio::test]
    async fn submit_commits_exactly_one_row() {
        let dir = tempfile::tempdir().unwrap();
        let store = test_store(&dir).await;

        let inserted = submit_item(&store, &widget_draft()).await.unwrap();

        assert_eq!(inserted.id, 1);
        assert_eq!(inserted.name, "Widget");
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn submit_with_empty_field_commits_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = test_store(&dir).await;

        let mut draft = widget_draft();
        draft.vendor.clear();

        let err = submit_item(&store, &draft).await.unwrap_err();
        assert_eq!(err.to_string(), "please fill all the fields");
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn submit_with_bad_numeric_commits_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = test_store(&dir).await;

        let mut draft = widget_draft();
        draft.stock = "abc".to_string();

        let err = submit_item(&store, &draft).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "please enter valid numeric values for stock, cost price, and selling price"
        );
        assert_eq!(store.count().await.unwrap(), 0);
    }
}
