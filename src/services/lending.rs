//! Lending service: borrow, return, and borrower listings

use crate::{error::AppResult, models::normalize_name, repository::Repository};

/// Outcome of a borrow attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorrowOutcome {
    Issued,
    BookNotFound,
    StudentNotFound,
    AlreadyIssued,
    OutOfStock,
}

/// Outcome of a return attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnOutcome {
    Returned,
    BookNotFound,
    StudentNotFound,
    NotBorrowed,
}

/// Outcome of a borrowers listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorrowersOutcome {
    Borrowers(Vec<String>),
    NoneBorrowed,
    BookNotFound,
}

#[derive(Clone)]
pub struct LendingService {
    repository: Repository,
}

impl LendingService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Issue a book to a student.
    ///
    /// The ledger entry is written before the stock check, so an
    /// out-of-stock attempt still records the relationship. That mirrors
    /// the long-standing behavior callers depend on (see DESIGN.md); the
    /// anomaly is logged when it happens.
    pub async fn borrow(&self, book_id: i32, student_id: i32) -> AppResult<BorrowOutcome> {
        if self.repository.books.find_by_id(book_id).await?.is_none() {
            return Ok(BorrowOutcome::BookNotFound);
        }

        if self.repository.students.find_by_id(student_id).await?.is_none() {
            return Ok(BorrowOutcome::StudentNotFound);
        }

        if self.repository.borrows.has_active(student_id, book_id).await? {
            return Ok(BorrowOutcome::AlreadyIssued);
        }

        // Lost the race against a concurrent identical borrow
        if !self.repository.borrows.try_create(student_id, book_id).await? {
            return Ok(BorrowOutcome::AlreadyIssued);
        }

        if self.repository.books.try_decrement_copies(book_id).await? {
            tracing::info!("Issued book id={} to student id={}", book_id, student_id);
            Ok(BorrowOutcome::Issued)
        } else {
            tracing::warn!(
                "Out-of-stock borrow attempt recorded in ledger: book id={} student id={}",
                book_id,
                student_id
            );
            Ok(BorrowOutcome::OutOfStock)
        }
    }

    /// Take a book back from a student.
    ///
    /// Succeeds only when the student actually holds the book; the ledger
    /// entry is closed and the copy count restored atomically.
    pub async fn return_book(&self, book_id: i32, student_id: i32) -> AppResult<ReturnOutcome> {
        if self.repository.books.find_by_id(book_id).await?.is_none() {
            return Ok(ReturnOutcome::BookNotFound);
        }

        if self.repository.students.find_by_id(student_id).await?.is_none() {
            return Ok(ReturnOutcome::StudentNotFound);
        }

        if self.repository.borrows.close_and_restock(student_id, book_id).await? {
            tracing::info!("Returned book id={} from student id={}", book_id, student_id);
            Ok(ReturnOutcome::Returned)
        } else {
            Ok(ReturnOutcome::NotBorrowed)
        }
    }

    /// List the names of students currently holding the named book
    pub async fn borrowers_of_book(&self, book_name: &str) -> AppResult<BorrowersOutcome> {
        let book = match self
            .repository
            .books
            .find_by_name(&normalize_name(book_name))
            .await?
        {
            Some(b) => b,
            None => return Ok(BorrowersOutcome::BookNotFound),
        };

        let names = self.repository.borrows.list_borrowers_of_book(book.id).await?;

        if names.is_empty() {
            Ok(BorrowersOutcome::NoneBorrowed)
        } else {
            Ok(BorrowersOutcome::Borrowers(names))
        }
    }
}
