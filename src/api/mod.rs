//! API handlers for Librarium REST endpoints

pub mod books;
pub mod health;
pub mod lending;
pub mod openapi;
pub mod students;

use serde::Serialize;
use utoipa::ToSchema;

/// Message payload of the operation envelope: a plain string for most
/// operations, a list of student names for the borrowers listing.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, ToSchema)]
#[serde(untagged)]
pub enum Message {
    Text(String),
    Names(Vec<String>),
}

/// Uniform response envelope for all library operations.
///
/// Domain failures travel in-band as `{status: false, message}` with
/// HTTP 200; only infrastructure failures become HTTP errors.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, ToSchema)]
pub struct LibraryResponse {
    pub status: bool,
    pub message: Message,
}

impl LibraryResponse {
    pub fn ok(message: &str) -> Self {
        Self {
            status: true,
            message: Message::Text(message.to_string()),
        }
    }

    pub fn fail(message: &str) -> Self {
        Self {
            status: false,
            message: Message::Text(message.to_string()),
        }
    }

    pub fn names(names: Vec<String>) -> Self {
        Self {
            status: true,
            message: Message::Names(names),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_envelope_serializes_flat() {
        let json = serde_json::to_value(LibraryResponse::ok("Book is issued")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": true, "message": "Book is issued"})
        );
    }

    #[test]
    fn test_names_envelope_serializes_as_list() {
        let json =
            serde_json::to_value(LibraryResponse::names(vec!["abc".to_string()])).unwrap();
        assert_eq!(json, serde_json::json!({"status": true, "message": ["abc"]}));
    }

    #[test]
    fn test_fail_envelope() {
        let json = serde_json::to_value(LibraryResponse::fail("Book not found")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": false, "message": "Book not found"})
        );
    }
}
