// src/application/commands/book_commands.rs
//
// Book Command Handlers
//
// RULES:
// - Call the session, return DTOs
// - Never contain business logic

use crate::application::dto::{book_rows, BookDto, BookRowDto, FormDto};
use crate::application::error_handling::{ErrorResponse, ToErrorResponse};
use crate::domain::BookField;
use crate::services::{DeleteOutcome, EditSession, SubmitOutcome};

/// List all books in insertion order
pub fn list_books(session: &EditSession) -> Vec<BookRowDto> {
    book_rows(session)
}

/// Full details of one book
pub fn get_book(session: &EditSession, book_id: &str) -> Result<BookDto, ErrorResponse> {
    session
        .store()
        .get(book_id)
        .cloned()
        .map(BookDto::from)
        .ok_or_else(|| ErrorResponse::not_found("Book"))
}

/// Current form state
pub fn show_form(session: &EditSession) -> FormDto {
    FormDto::from_session(session)
}

/// Load a book into the form for editing
pub fn edit_book(session: &mut EditSession, book_id: &str) -> Result<FormDto, ErrorResponse> {
    session.begin_edit_by_id(book_id).to_error_response()?;
    Ok(FormDto::from_session(session))
}

/// Type into one form field
pub fn set_field(
    session: &mut EditSession,
    field: BookField,
    value: &str,
) -> Result<FormDto, ErrorResponse> {
    session.update_draft_field(field, value).to_error_response()?;
    Ok(FormDto::from_session(session))
}

/// Discard the form and go back to adding
pub fn new_book(session: &mut EditSession) -> FormDto {
    session.cancel_edit();
    FormDto::from_session(session)
}

/// Submit the form
pub fn submit_form(session: &mut EditSession) -> Result<String, ErrorResponse> {
    let message = match session.submit().to_error_response()? {
        SubmitOutcome::Created { id } => format!("Added book {}", id),
        SubmitOutcome::Updated { id, found: true } => format!("Updated book {}", id),
        SubmitOutcome::Updated { id, found: false } => {
            format!("Book {} no longer exists, nothing updated", id)
        }
        SubmitOutcome::Ignored => "Title and author are required".to_string(),
    };
    Ok(message)
}

/// Delete a book, asking first
pub fn delete_book(session: &mut EditSession, book_id: &str) -> Result<String, ErrorResponse> {
    let message = match session.delete_record(book_id).to_error_response()? {
        DeleteOutcome::Removed => format!("Deleted book {}", book_id),
        DeleteOutcome::Declined => "Deletion cancelled".to_string(),
        DeleteOutcome::Missing => format!("Book {} not found", book_id),
    };
    Ok(message)
}
