// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod book;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use book::{
    validate_book_submission, Book, BookField, Clock, IdGenerator, LocalClock, UuidIdGenerator,
};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Invalid value {value:?} for field {field}")]
    InvalidFieldValue { field: String, value: String },

    #[error("Unknown field: {0}")]
    UnknownField(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
