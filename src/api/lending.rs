//! Lending endpoints: borrow, return, borrowers listing

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    services::lending::{BorrowOutcome, BorrowersOutcome, ReturnOutcome},
};

use super::{books::BookNameQuery, LibraryResponse};

/// Borrow / return request: which student, which book
#[derive(Deserialize, ToSchema)]
pub struct LoanRequest {
    /// Book database ID
    pub book_id: i32,
    /// Student database ID
    pub student_id: i32,
}

/// Issue a book to a student
#[utoipa::path(
    post,
    path = "/loans",
    tag = "loans",
    request_body = LoanRequest,
    responses(
        (status = 200, description = "Borrow outcome", body = LibraryResponse)
    )
)]
pub async fn borrow_book(
    State(state): State<crate::AppState>,
    Json(request): Json<LoanRequest>,
) -> AppResult<Json<LibraryResponse>> {
    let outcome = state
        .services
        .lending
        .borrow(request.book_id, request.student_id)
        .await?;

    Ok(Json(match outcome {
        BorrowOutcome::Issued => LibraryResponse::ok("Book is issued"),
        BorrowOutcome::BookNotFound => LibraryResponse::fail("Can't issue the book"),
        BorrowOutcome::StudentNotFound => {
            LibraryResponse::fail("Can't find the student with the given ID")
        }
        BorrowOutcome::AlreadyIssued => {
            LibraryResponse::fail("The book is already issued by this student")
        }
        BorrowOutcome::OutOfStock => LibraryResponse::fail("Books out of stock"),
    }))
}

/// Take a book back from a student
#[utoipa::path(
    post,
    path = "/loans/return",
    tag = "loans",
    request_body = LoanRequest,
    responses(
        (status = 200, description = "Return outcome", body = LibraryResponse)
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    Json(request): Json<LoanRequest>,
) -> AppResult<Json<LibraryResponse>> {
    let outcome = state
        .services
        .lending
        .return_book(request.book_id, request.student_id)
        .await?;

    Ok(Json(match outcome {
        ReturnOutcome::Returned => LibraryResponse::ok("Book is returned"),
        ReturnOutcome::BookNotFound => LibraryResponse::fail("Book not present in the Library"),
        ReturnOutcome::StudentNotFound => {
            LibraryResponse::fail("Can't find the student with the given ID")
        }
        ReturnOutcome::NotBorrowed => {
            LibraryResponse::fail("This student has not borrowed the given Book.")
        }
    }))
}

/// List the students currently holding a book
#[utoipa::path(
    get,
    path = "/books/borrowers",
    tag = "loans",
    params(
        ("book_name" = String, Query, description = "Book name")
    ),
    responses(
        (status = 200, description = "Borrowers listing", body = LibraryResponse)
    )
)]
pub async fn list_borrowers(
    State(state): State<crate::AppState>,
    Query(query): Query<BookNameQuery>,
) -> AppResult<Json<LibraryResponse>> {
    let outcome = state
        .services
        .lending
        .borrowers_of_book(&query.book_name)
        .await?;

    Ok(Json(match outcome {
        BorrowersOutcome::Borrowers(names) => LibraryResponse::names(names),
        BorrowersOutcome::NoneBorrowed => {
            LibraryResponse::fail("No student has borrowed this book")
        }
        BorrowersOutcome::BookNotFound => LibraryResponse::fail("Book not found"),
    }))
}
