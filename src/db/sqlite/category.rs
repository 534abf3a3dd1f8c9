//! SQLite CategoryRepository implementation.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::helpers::map_sqlx_error;
use crate::db::{Category, CategoryRepository, DbError, DbResult, Id};

/// SQLx-backed category repository.
pub struct SqliteCategoryRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn category_from_row(row: &SqliteRow) -> Category {
    Category {
        id: row.get("id"),
        kind: row.get("type"),
    }
}

impl CategoryRepository for SqliteCategoryRepository<'_> {
    async fn create(&self, kind: &str) -> DbResult<Category> {
        let result = sqlx::query("INSERT INTO categories (type) VALUES (?)")
            .bind(kind)
            .execute(self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(Category {
            id: result.last_insert_rowid(),
            kind: kind.to_string(),
        })
    }

    async fn get(&self, id: Id) -> DbResult<Category> {
        let row = sqlx::query("SELECT id, type FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.as_ref()
            .map(category_from_row)
            .ok_or_else(|| DbError::not_found("Category", id))
    }

    async fn list(&self) -> DbResult<Vec<Category>> {
        let rows = sqlx::query("SELECT id, type FROM categories ORDER BY id ASC")
            .fetch_all(self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.iter().map(category_from_row).collect())
    }
}
