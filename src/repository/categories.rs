//! Categories repository: existence checks and the book-category link table

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::category::BookCategory};

#[derive(Clone)]
pub struct CategoriesRepository {
    pool: Pool<Postgres>,
}

impl CategoriesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Check whether a category exists
    pub async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    /// Link a book to a set of categories
    pub async fn add_links(&self, book_id: i64, category_ids: &[i64]) -> AppResult<()> {
        for category_id in category_ids {
            sqlx::query(
                r#"
                INSERT INTO book_categories (book_id, category_id)
                VALUES ($1, $2)
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(book_id)
            .bind(category_id)
            .execute(&self.pool)
            .await?;
        }

        Ok(())
    }

    /// Fetch the category links for a single book
    pub async fn links_for_book(&self, book_id: i64) -> AppResult<Vec<BookCategory>> {
        let links = sqlx::query_as::<_, BookCategory>(
            "SELECT book_id, category_id FROM book_categories WHERE book_id = $1 ORDER BY category_id",
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(links)
    }

    /// Fetch every category link, ordered by book. Used to attach category
    /// ids when listing the whole catalog in one pass.
    pub async fn all_links(&self) -> AppResult<Vec<BookCategory>> {
        let links = sqlx::query_as::<_, BookCategory>(
            "SELECT book_id, category_id FROM book_categories ORDER BY book_id, category_id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(links)
    }
}
