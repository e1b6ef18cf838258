// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::{Book, BookField};
use crate::services::EditSession;

// ============================================================================
// BOOK DTOs
// ============================================================================

/// One row of the book table: the columns the list shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRowDto {
    pub id: String,
    pub titulo: String,
    pub autor: String,
    pub ano_publicacao: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub id: String,
    pub titulo: String,
    pub autor: String,
    pub ano_publicacao: i32,
    pub data_cadastro: String,
    pub genero: String,
    pub descricao: String,
}

// ============================================================================
// FORM DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormFieldDto {
    pub name: String,
    pub label: String,
    pub value: String,
}

/// Everything needed to draw the shared add/edit form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDto {
    pub heading: String,
    pub submit_label: String,
    pub editing_id: Option<String>,
    pub fields: Vec<FormFieldDto>,
}

impl FormDto {
    pub fn from_session(session: &EditSession) -> Self {
        let editing_id = session.mode().target_id().map(str::to_string);
        let (heading, submit_label) = if editing_id.is_some() {
            ("Edit Book", "Update Book")
        } else {
            ("Add Book", "Add Book")
        };

        let draft = session.draft();
        let fields = BookField::ALL
            .iter()
            .map(|field| FormFieldDto {
                name: field.to_string(),
                label: field.label().to_string(),
                value: draft.field(*field),
            })
            .collect();

        Self {
            heading: heading.to_string(),
            submit_label: submit_label.to_string(),
            editing_id,
            fields,
        }
    }
}

// ============================================================================
// CONVERSION HELPERS (Domain → DTO)
// ============================================================================

impl From<&Book> for BookRowDto {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            titulo: book.titulo.clone(),
            autor: book.autor.clone(),
            ano_publicacao: book.ano_publicacao,
        }
    }
}

impl From<Book> for BookDto {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            titulo: book.titulo,
            autor: book.autor,
            ano_publicacao: book.ano_publicacao,
            data_cadastro: book.data_cadastro,
            genero: book.genero,
            descricao: book.descricao,
        }
    }
}

/// Rows in display order
pub fn book_rows(session: &EditSession) -> Vec<BookRowDto> {
    session
        .store()
        .get_all()
        .iter()
        .map(BookRowDto::from)
        .collect()
}
