//! Student registration endpoints

use axum::{extract::State, Json};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    services::catalog::RegisterOutcome,
};

use super::LibraryResponse;

/// Register student request
#[derive(Deserialize, Validate, ToSchema)]
pub struct RegisterStudentRequest {
    /// Student name (stored lowercase)
    #[validate(length(min = 1, message = "student_name must not be empty"))]
    pub student_name: String,
    /// External student identifier (card number)
    #[validate(length(min = 1, message = "student_id must not be empty"))]
    pub student_id: String,
}

/// Register a new student
#[utoipa::path(
    post,
    path = "/students",
    tag = "students",
    request_body = RegisterStudentRequest,
    responses(
        (status = 200, description = "Registration outcome", body = LibraryResponse),
        (status = 400, description = "Invalid request")
    )
)]
pub async fn register_student(
    State(state): State<crate::AppState>,
    Json(request): Json<RegisterStudentRequest>,
) -> AppResult<Json<LibraryResponse>> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let outcome = state
        .services
        .catalog
        .register_student(&request.student_name, &request.student_id)
        .await?;

    Ok(Json(match outcome {
        RegisterOutcome::Created => {
            LibraryResponse::ok("Student is added to the library database")
        }
        RegisterOutcome::AlreadyExists => {
            LibraryResponse::fail("Student is already present in the database")
        }
    }))
}
