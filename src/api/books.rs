//! Book catalog endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    services::catalog::{Availability, RegisterOutcome},
};

use super::LibraryResponse;

/// Register book request
#[derive(Deserialize, Validate, ToSchema)]
pub struct RegisterBookRequest {
    /// Book name (matched case-insensitively)
    #[validate(length(min = 1, message = "book_name must not be empty"))]
    pub book_name: String,
    /// Number of physical copies
    #[validate(range(min = 0, message = "total_copies must not be negative"))]
    pub total_copies: i32,
}

/// Query parameters for name-based book lookups
#[derive(Deserialize)]
pub struct BookNameQuery {
    pub book_name: String,
}

/// Register a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = RegisterBookRequest,
    responses(
        (status = 200, description = "Registration outcome", body = LibraryResponse),
        (status = 400, description = "Invalid request")
    )
)]
pub async fn register_book(
    State(state): State<crate::AppState>,
    Json(request): Json<RegisterBookRequest>,
) -> AppResult<Json<LibraryResponse>> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let outcome = state
        .services
        .catalog
        .register_book(&request.book_name, request.total_copies)
        .await?;

    Ok(Json(match outcome {
        RegisterOutcome::Created => LibraryResponse::ok("Book is added to the library"),
        RegisterOutcome::AlreadyExists => {
            LibraryResponse::fail("Book is already in the database.")
        }
    }))
}

/// Check whether a book is present in the catalog
#[utoipa::path(
    get,
    path = "/books/presence",
    tag = "books",
    params(
        ("book_name" = String, Query, description = "Book name")
    ),
    responses(
        (status = 200, description = "Presence outcome", body = LibraryResponse)
    )
)]
pub async fn check_presence(
    State(state): State<crate::AppState>,
    Query(query): Query<BookNameQuery>,
) -> AppResult<Json<LibraryResponse>> {
    let present = state.services.catalog.check_presence(&query.book_name).await?;

    Ok(Json(if present {
        LibraryResponse::ok("The book is present in the library")
    } else {
        LibraryResponse::fail("The book is not present in the library")
    }))
}

/// Check whether a book can be issued right now.
///
/// A book that exists with zero copies gets a different message than a
/// book the catalog has never seen.
#[utoipa::path(
    get,
    path = "/books/availability",
    tag = "books",
    params(
        ("book_name" = String, Query, description = "Book name")
    ),
    responses(
        (status = 200, description = "Availability outcome", body = LibraryResponse)
    )
)]
pub async fn check_availability(
    State(state): State<crate::AppState>,
    Query(query): Query<BookNameQuery>,
) -> AppResult<Json<LibraryResponse>> {
    let availability = state
        .services
        .catalog
        .check_availability(&query.book_name)
        .await?;

    Ok(Json(match availability {
        Availability::Available => LibraryResponse::ok("Books is available.You can issue it."),
        Availability::NotInCatalog => LibraryResponse::fail("Book is not available."),
        Availability::OutOfStock => {
            LibraryResponse::fail("Book is not available in the library.")
        }
    }))
}
