//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, lending, students};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Librarium API",
        version = "0.3.0",
        description = "Library Record Keeper REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::register_book,
        books::check_presence,
        books::check_availability,
        // Students
        students::register_student,
        // Loans
        lending::borrow_book,
        lending::return_book,
        lending::list_borrowers,
    ),
    components(
        schemas(
            // Requests
            books::RegisterBookRequest,
            students::RegisterStudentRequest,
            lending::LoanRequest,
            // Responses
            crate::api::LibraryResponse,
            crate::api::Message,
            health::HealthResponse,
            // Models
            crate::models::book::Book,
            crate::models::student::Student,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog operations"),
        (name = "students", description = "Student registration"),
        (name = "loans", description = "Borrow and return operations")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
