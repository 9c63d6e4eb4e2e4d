use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use sqlx::Error as SqlxError;
use tracing::info;

use crate::models::{Item, ItemPayload};

/// Data access object for the `items` table
///
/// Holds the single long-lived connection handle, opened once at process
/// start and shared by every request handler. Each method issues exactly one
/// parameterized statement; values are always bound, never interpolated into
/// the SQL text.
pub struct ItemStore {
    pool: MySqlPool,
}

impl ItemStore {
    /// Create the store around a lazily-opened connection handle
    ///
    /// # Arguments
    /// * `database_url` - MySQL connection string
    ///
    /// # Returns
    /// * `Result<Self, SqlxError>` - Store handle, or an error for an
    ///   unparseable URL. The actual connection is established on first use.
    pub fn connect(database_url: &str) -> Result<Self, SqlxError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .connect_lazy(database_url)?;
        Ok(Self { pool })
    }

    /// Verify the connection by issuing a trivial statement
    ///
    /// Called once at startup so that an unreachable store is logged early.
    /// A failure here is not fatal; requests simply fail at query time.
    pub async fn ping(&self) -> Result<(), SqlxError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Insert a new item and return the id the store assigned to it
    pub async fn insert_item(&self, payload: &ItemPayload) -> Result<i64, SqlxError> {
        let result = sqlx::query(
            "INSERT INTO items (name, price, description, image_url) VALUES (?, ?, ?, ?)",
        )
        .bind(&payload.name)
        .bind(payload.price)
        .bind(&payload.description)
        .bind(&payload.image_url)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_id() as i64;
        info!("Inserted item {}", id);
        Ok(id)
    }

    /// Fetch every item, in store default order
    pub async fn list_items(&self) -> Result<Vec<Item>, SqlxError> {
        sqlx::query_as::<_, Item>("SELECT * FROM items")
            .fetch_all(&self.pool)
            .await
    }

    /// Fetch a single item by id
    ///
    /// # Returns
    /// * `Result<Option<Item>, SqlxError>` - The item, or None if no row
    ///   matches the id
    pub async fn get_item(&self, id: i64) -> Result<Option<Item>, SqlxError> {
        sqlx::query_as::<_, Item>("SELECT * FROM items WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Overwrite all four mutable fields of an item
    ///
    /// # Returns
    /// * `Result<u64, SqlxError>` - Number of rows affected; zero means no
    ///   item has the given id
    pub async fn update_item(&self, id: i64, payload: &ItemPayload) -> Result<u64, SqlxError> {
        let result = sqlx::query(
            "UPDATE items SET name = ?, price = ?, description = ?, image_url = ? WHERE id = ?",
        )
        .bind(&payload.name)
        .bind(payload.price)
        .bind(&payload.description)
        .bind(&payload.image_url)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete an item by id
    ///
    /// # Returns
    /// * `Result<u64, SqlxError>` - Number of rows affected; zero means no
    ///   item has the given id
    pub async fn delete_item(&self, id: i64) -> Result<u64, SqlxError> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
