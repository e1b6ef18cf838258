// src/lib.rs
// BookHub - Local-first book catalog manager
//
// Architecture:
// - Domain-centric: the Book entity and its invariants live in `domain`
// - One persisted slot: the whole collection is rewritten on every change
// - One shared form: EditSession decides between create and update
// - Explicit: no global state, no background work

pub mod application;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod integrations;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_book_submission, Book, BookField, Clock, DomainError, DomainResult, IdGenerator,
    LocalClock, UuidIdGenerator,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus, BookCreated, BookDeleted, BookUpdated, CollectionLoaded, DomainEvent,
    EventBus, EventLogEntry,
};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool_at, get_database_path, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{InMemoryKeyValueRepository, KeyValueRepository, SqliteKeyValueRepository};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    AlwaysConfirm, BookStore, Confirmation, DeleteOutcome, EditMode, EditSession, NeverConfirm,
    SessionConfig, StoreConfig, SubmitOutcome,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;
pub use application::{commands, dto};

pub use integrations::TerminalConfirmation;
