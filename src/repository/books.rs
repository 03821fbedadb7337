//! Books repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::book::{Book, NewBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get book by ID
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(book)
    }

    /// Get book by normalized name (first match by id when duplicates exist)
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE name = $1 ORDER BY id LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }

    /// Check whether a book with this exact (name, total_copies) pair exists
    pub async fn exists(&self, name: &str, total_copies: i32) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM books WHERE name = $1 AND total_copies = $2)",
        )
        .bind(name)
        .bind(total_copies)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// Create a new book
    pub async fn create(&self, book: &NewBook) -> AppResult<Book> {
        let created = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (name, total_copies)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(&book.name)
        .bind(book.total_copies)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Take one copy off the shelf if any remain.
    ///
    /// The guard in the UPDATE makes the read-check-write atomic per row:
    /// two simultaneous borrows of the last copy cannot both succeed.
    pub async fn try_decrement_copies(&self, book_id: i32) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE books SET total_copies = total_copies - 1 WHERE id = $1 AND total_copies > 0",
        )
        .bind(book_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
