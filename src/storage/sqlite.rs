use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::info;

use super::{last_updated_or_now, CatalogStore};
use crate::catalog::Catalog;
use crate::model::{CanonicalDeal, StorageError};

const DEAL_COLUMNS: &str = "id, title, link, main_category, sub_category, sale_price, \
     original_price, store, sale_period, notes, pub_date";

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Открывает базу и выполняет миграции
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self, StorageError> {
        if let Some(dir) = db_path.as_ref().parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        Self::with_connection(Connection::open(db_path)?)
    }

    pub fn in_memory() -> Result<Self, StorageError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS deals (
                id TEXT PRIMARY KEY,
                position INTEGER NOT NULL,
                title TEXT NOT NULL,
                link TEXT NOT NULL DEFAULT '',
                main_category TEXT NOT NULL DEFAULT 'Uncategorized',
                sub_category TEXT NOT NULL DEFAULT '',
                sale_price TEXT NOT NULL DEFAULT '',
                original_price TEXT NOT NULL DEFAULT '',
                store TEXT NOT NULL DEFAULT '',
                sale_period TEXT NOT NULL DEFAULT ''
            );

            CREATE TABLE IF NOT EXISTS meta (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            ",
        )?;

        // Столбцы, появившиеся позже первой версии схемы
        Self::migrate_add_column_if_missing(&conn, "deals", "notes", "TEXT NOT NULL DEFAULT ''")?;
        Self::migrate_add_column_if_missing(
            &conn,
            "deals",
            "pub_date",
            "TEXT NOT NULL DEFAULT ''",
        )?;

        Ok(Self { conn })
    }

    /// Добавляет столбец, если его ещё нет в таблице
    fn migrate_add_column_if_missing(
        conn: &Connection,
        table: &str,
        column: &str,
        column_def: &str,
    ) -> Result<(), StorageError> {
        let mut stmt = conn.prepare(&format!("PRAGMA table_info({table})"))?;
        let existing_columns: Vec<String> = stmt
            .query_map([], |row| row.get::<_, String>(1))?
            .collect::<Result<_, _>>()?;

        if !existing_columns.iter().any(|c| c == column) {
            conn.execute(&format!("ALTER TABLE {table} ADD COLUMN {column} {column_def}"), [])?;
        }

        Ok(())
    }

    fn map_deal(row: &Row) -> Result<CanonicalDeal, rusqlite::Error> {
        Ok(CanonicalDeal {
            id: row.get(0)?,
            title: row.get(1)?,
            link: row.get(2)?,
            main_category: row.get(3)?,
            sub_category: row.get(4)?,
            sale_price: row.get(5)?,
            original_price: row.get(6)?,
            store: row.get(7)?,
            sale_period: row.get(8)?,
            notes: row.get(9)?,
            pub_date: row.get(10)?,
        })
    }
}

impl CatalogStore for SqliteStore {
    fn load(&self) -> Result<Catalog, StorageError> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {DEAL_COLUMNS} FROM deals ORDER BY position ASC"))?;
        let deals = stmt
            .query_map([], Self::map_deal)?
            .collect::<Result<Vec<_>, _>>()?;

        let mut catalog = Catalog::from_deals(deals);
        let last_updated: Option<String> = self
            .conn
            .query_row("SELECT value FROM meta WHERE key = 'last_updated'", [], |row| {
                row.get(0)
            })
            .optional()?;
        if let Some(ts) = last_updated {
            catalog.set_last_updated(ts);
        }
        Ok(catalog)
    }

    /// Перезаписывает каталог целиком в одной транзакции
    fn save(&self, catalog: &Catalog) -> Result<(), StorageError> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM deals", [])?;
        {
            let mut insert = tx.prepare(&format!(
                "INSERT INTO deals (position, {DEAL_COLUMNS})
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)"
            ))?;
            for (position, deal) in catalog.iter().enumerate() {
                insert.execute(params![
                    position as i64,
                    &deal.id,
                    &deal.title,
                    &deal.link,
                    &deal.main_category,
                    &deal.sub_category,
                    &deal.sale_price,
                    &deal.original_price,
                    &deal.store,
                    &deal.sale_period,
                    &deal.notes,
                    &deal.pub_date,
                ])?;
            }
        }
        tx.execute(
            "INSERT OR REPLACE INTO meta (key, value) VALUES ('last_updated', ?1)",
            params![last_updated_or_now(catalog)],
        )?;
        tx.commit()?;

        info!(deals = catalog.len(), "Saved catalog to sqlite");
        Ok(())
    }
}
