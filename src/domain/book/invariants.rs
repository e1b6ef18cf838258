use super::entity::Book;
use crate::domain::{DomainError, DomainResult};

/// Validates what a draft must satisfy before it becomes a new book.
///
/// Only emptiness is checked; a title of spaces is accepted.
pub fn validate_book_submission(book: &Book) -> DomainResult<()> {
    validate_titulo(&book.titulo)?;
    validate_autor(&book.autor)?;
    Ok(())
}

fn validate_titulo(titulo: &str) -> DomainResult<()> {
    if titulo.is_empty() {
        return Err(DomainError::InvariantViolation(
            "Book title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_autor(autor: &str) -> DomainResult<()> {
    if autor.is_empty() {
        return Err(DomainError::InvariantViolation(
            "Book author cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Invariants that must hold true for Book domain:
///
/// 1. Identity is system-assigned and never changes
/// 2. Identity is unique across the collection
/// 3. Registration date is written once, at creation
/// 4. Title and author are required to create a book
/// 5. Publication year, genre and description are unconstrained
