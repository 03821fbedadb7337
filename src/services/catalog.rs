//! Catalog service: registrations and name-based lookups

use crate::{
    error::AppResult,
    models::{book::NewBook, normalize_name, student::NewStudent},
    repository::Repository,
};

/// Outcome of a registration attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    Created,
    AlreadyExists,
}

/// Outcome of an availability check.
///
/// `OutOfStock` is distinct from `NotInCatalog`: the book exists but every
/// copy is out, and the caller gets a different message for each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    OutOfStock,
    NotInCatalog,
}

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a book; an exact (name, copies) duplicate is rejected
    pub async fn register_book(&self, name: &str, total_copies: i32) -> AppResult<RegisterOutcome> {
        let name = normalize_name(name);

        if self.repository.books.exists(&name, total_copies).await? {
            return Ok(RegisterOutcome::AlreadyExists);
        }

        let book = self
            .repository
            .books
            .create(&NewBook { name, total_copies })
            .await?;

        tracing::info!("Registered book id={} name={:?}", book.id, book.name);
        Ok(RegisterOutcome::Created)
    }

    /// Register a student; an exact (name, student_id) duplicate is rejected
    pub async fn register_student(
        &self,
        name: &str,
        student_id: &str,
    ) -> AppResult<RegisterOutcome> {
        let name = normalize_name(name);

        if self.repository.students.exists(&name, student_id).await? {
            return Ok(RegisterOutcome::AlreadyExists);
        }

        let student = self
            .repository
            .students
            .create(&NewStudent {
                name,
                student_id: student_id.to_string(),
            })
            .await?;

        tracing::info!("Registered student id={} name={:?}", student.id, student.name);
        Ok(RegisterOutcome::Created)
    }

    /// Check whether a book with this name is known to the catalog
    pub async fn check_presence(&self, name: &str) -> AppResult<bool> {
        let book = self.repository.books.find_by_name(&normalize_name(name)).await?;
        Ok(book.is_some())
    }

    /// Check whether a book can be issued right now
    pub async fn check_availability(&self, name: &str) -> AppResult<Availability> {
        let book = self.repository.books.find_by_name(&normalize_name(name)).await?;

        Ok(match book {
            None => Availability::NotInCatalog,
            Some(b) if b.total_copies > 0 => Availability::Available,
            Some(_) => Availability::OutOfStock,
        })
    }
}
