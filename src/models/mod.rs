//! Data models for Librarium

pub mod book;
pub mod student;

pub use book::Book;
pub use student::Student;

/// Normalize a name for storage and lookup.
///
/// Registration and every name-based lookup go through this, so "Dune" and
/// "dune" address the same record.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize_name("The Rust Book"), "the rust book");
    }

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize_name("  b11 "), "b11");
    }

    #[test]
    fn test_normalize_already_normal() {
        assert_eq!(normalize_name("b5"), "b5");
    }
}
