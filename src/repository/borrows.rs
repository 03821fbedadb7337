//! Borrow ledger repository for database operations

use sqlx::{Pool, Postgres};

use crate::error::AppResult;

#[derive(Clone)]
pub struct BorrowsRepository {
    pool: Pool<Postgres>,
}

impl BorrowsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Check whether the student currently holds the book
    pub async fn has_active(&self, student_id: i32, book_id: i32) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM borrows
                WHERE student_id = $1 AND book_id = $2 AND returned_at IS NULL
            )
            "#,
        )
        .bind(student_id)
        .bind(book_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// Record an active borrow relationship.
    ///
    /// Returns `false` when the partial unique index rejects a second active
    /// entry for the same (student, book) pair, which happens when two
    /// borrow requests race past the `has_active` check.
    pub async fn try_create(&self, student_id: i32, book_id: i32) -> AppResult<bool> {
        let result = sqlx::query("INSERT INTO borrows (student_id, book_id) VALUES ($1, $2)")
            .bind(student_id)
            .bind(book_id)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(true),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Close the active ledger entry and put the copy back on the shelf.
    ///
    /// Both statements run in one transaction so the ledger and the copy
    /// count cannot drift apart. Returns `false` (and changes nothing) when
    /// no active entry exists for the pair.
    pub async fn close_and_restock(&self, student_id: i32, book_id: i32) -> AppResult<bool> {
        let mut tx = self.pool.begin().await?;

        let closed = sqlx::query(
            r#"
            UPDATE borrows SET returned_at = NOW()
            WHERE student_id = $1 AND book_id = $2 AND returned_at IS NULL
            "#,
        )
        .bind(student_id)
        .bind(book_id)
        .execute(&mut *tx)
        .await?;

        if closed.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query("UPDATE books SET total_copies = total_copies + 1 WHERE id = $1")
            .bind(book_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }

    /// Names of students with an active borrow of the book, in ledger order
    pub async fn list_borrowers_of_book(&self, book_id: i32) -> AppResult<Vec<String>> {
        let names: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT s.name
            FROM borrows b
            JOIN students s ON b.student_id = s.id
            WHERE b.book_id = $1 AND b.returned_at IS NULL
            ORDER BY b.id
            "#,
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(names)
    }
}
