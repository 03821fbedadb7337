//! Book model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Book model from database
///
/// `total_copies` is the number of physical units currently on the shelf;
/// it is decremented by a borrow and incremented by a return, and the
/// schema guarantees it never goes negative.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub total_copies: i32,
    pub created_at: DateTime<Utc>,
}

/// New book data for registration (name already normalized)
#[derive(Debug, Clone, Deserialize)]
pub struct NewBook {
    pub name: String,
    pub total_copies: i32,
}
