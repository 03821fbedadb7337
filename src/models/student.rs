//! Student model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Student model from database
///
/// `student_id` is the external identifier (card number); `id` is the
/// database key the lending operations use.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub student_id: String,
    pub created_at: DateTime<Utc>,
}

/// New student data for registration (name already normalized)
#[derive(Debug, Clone, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub student_id: String,
}
