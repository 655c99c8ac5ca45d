//! `stockpad-store` — SQLite persistence for inventory entries.
//!
//! One table, one long-lived pool opened at startup. Initialization is
//! idempotent: repeated startups against an existing store file neither
//! error nor touch existing rows.

use std::path::{Path, PathBuf};

use anyhow::Context;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Row, SqlitePool};

use stockpad_inventory::NewItem;

/// A row as stored, including the assigned id.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredItem {
    pub id: i64,
    pub name: String,
    pub stock: i64,
    pub cp: f64,
    pub sp: f64,
    pub totalcp: f64,
    pub totalsp: f64,
    pub assumed_profit: f64,
    pub vendor: String,
    pub vendor_phoneno: String,
}

/// SQLite-backed inventory store.
///
/// `SqlitePool` is cheap to clone; the handle is owned by whoever opened
/// it (the desktop app state) rather than living in a global.
#[derive(Debug, Clone)]
pub struct InventoryStore {
    pool: SqlitePool,
}

impl InventoryStore {
    /// Open (creating if missing) the store file and ensure the schema.
    ///
    /// Parent directories are created as needed. Any failure here is fatal
    /// for the application: the caller must not present the form against a
    /// partially initialized store.
    pub async fn open(db_path: &Path) -> anyhow::Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create store directory at {parent:?}"))?;
        }

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options)
            .await
            .with_context(|| format!("failed to open inventory store at {db_path:?}"))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS inventory (
                id             INTEGER PRIMARY KEY AUTOINCREMENT,
                name           TEXT NOT NULL,
                stock          INTEGER NOT NULL,
                cp             REAL NOT NULL,
                sp             REAL NOT NULL,
                totalcp        REAL NOT NULL,
                totalsp        REAL NOT NULL,
                assumed_profit REAL NOT NULL,
                vendor         TEXT NOT NULL,
                vendor_phoneno TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .context("failed to create inventory table")?;

        tracing::info!(path = %db_path.display(), "inventory store ready");

        Ok(Self { pool })
    }

    /// Highest assigned id so far, 0 for an empty table.
    ///
    /// Read once after open to seed the startup status line.
    pub async fn max_id(&self) -> anyhow::Result<i64> {
        let row = sqlx::query("SELECT MAX(id) AS max_id FROM inventory")
            .fetch_one(&self.pool)
            .await
            .context("failed to fetch max inventory id")?;

        let max_id: Option<i64> = row.try_get("max_id")?;
        Ok(max_id.unwrap_or(0))
    }

    /// Insert one item and return the id the store assigned to it.
    ///
    /// The insert is a single autocommitted statement: it either fully
    /// commits or does not happen.
    pub async fn insert(&self, item: &NewItem) -> anyhow::Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO inventory (
                name, stock, cp, sp, totalcp, totalsp, assumed_profit,
                vendor, vendor_phoneno
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(&item.name)
        .bind(item.stock)
        .bind(item.cp)
        .bind(item.sp)
        .bind(item.totalcp)
        .bind(item.totalsp)
        .bind(item.assumed_profit)
        .bind(&item.vendor)
        .bind(&item.vendor_phoneno)
        .execute(&self.pool)
        .await
        .context("failed to insert inventory item")?;

        Ok(result.last_insert_rowid())
    }

    /// Fetch one row by id.
    pub async fn get(&self, id: i64) -> anyhow::Result<Option<StoredItem>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, stock, cp, sp, totalcp, totalsp, assumed_profit,
                   vendor, vendor_phoneno
            FROM inventory
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("failed to fetch inventory item")?;

        let row = match row {
            Some(row) => row,
            None => return Ok(None),
        };

        Ok(Some(StoredItem {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            stock: row.try_get("stock")?,
            cp: row.try_get("cp")?,
            sp: row.try_get("sp")?,
            totalcp: row.try_get("totalcp")?,
            totalsp: row.try_get("totalsp")?,
            assumed_profit: row.try_get("assumed_profit")?,
            vendor: row.try_get("vendor")?,
            vendor_phoneno: row.try_get("vendor_phoneno")?,
        }))
    }

    /// Number of rows in the table.
    pub async fn count(&self) -> anyhow::Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM inventory")
            .fetch_one(&self.pool)
            .await
            .context("failed to count inventory items")?;

        Ok(row.try_get("n")?)
    }

    /// Close the pool, releasing the store file.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Resolve the store location from the program's own location:
/// `<exe_dir>/../database/store.db`.
pub fn default_db_path() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("failed to resolve executable path")?;
    let exe_dir = exe
        .parent()
        .context("executable path has no parent directory")?;
    let root = exe_dir.parent().unwrap_or(exe_dir);

    Ok(root.join("database").join("store.db"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockpad_inventory::ItemDraft;

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
    async fn insert_assigns_sequential_ids_from_one() {
        let dir = tempfile::tempdir().unwrap();
        let store = InventoryStore::open(&dir.path().join("store.db"))
            .await
            .unwrap();

        assert_eq!(store.max_id().await.unwrap(), 0);

        let item = widget_draft().validate().unwrap();
        let first = store.insert(&item).await.unwrap();
        let second = store.insert(&item).await.unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(store.max_id().await.unwrap(), 2);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn inserted_row_round_trips_with_derived_totals() {
        let dir = tempfile::tempdir().unwrap();
        let store = InventoryStore::open(&dir.path().join("store.db"))
            .await
            .unwrap();

        let item = widget_draft().validate().unwrap();
        let id = store.insert(&item).await.unwrap();

        let stored = store.get(id).await.unwrap().unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.name, "Widget");
        assert_eq!(stored.stock, 10);
        assert_eq!(stored.totalcp, 25.0);
        assert_eq!(stored.totalsp, 40.0);
        assert_eq!(stored.assumed_profit, 15.0);
        assert_eq!(stored.vendor, "Acme");
        assert_eq!(stored.vendor_phoneno, "555-1234");
    }

    #[tokio::test]
    async fn reopening_an_existing_store_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("store.db");

        let store = InventoryStore::open(&db_path).await.unwrap();
        let item = widget_draft().validate().unwrap();
        store.insert(&item).await.unwrap();
        store.close().await;

        // Second startup: no schema error, existing rows untouched, ids
        // keep increasing from where they left off.
        let store = InventoryStore::open(&db_path).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 1);
        assert_eq!(store.max_id().await.unwrap(), 1);

        let id = store.insert(&item).await.unwrap();
        assert_eq!(id, 2);
    }

    #[tokio::test]
    async fn open_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("database").join("store.db");

        let store = InventoryStore::open(&db_path).await.unwrap();
        assert_eq!(store.max_id().await.unwrap(), 0);
        assert!(db_path.exists());
    }
}
