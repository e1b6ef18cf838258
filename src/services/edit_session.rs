// src/services/edit_session.rs
//
// Edit Session - the single shared form
//
// ARCHITECTURE:
// - Owns the draft and the explicit Idle/Editing mode
// - Owns the BookStore; every mutation goes through here
// - Decides per submit whether the draft creates or replaces a book
// - Edit target is held by id, never as a copy of the book

use std::sync::Arc;

use crate::domain::{
    validate_book_submission, Book, BookField, Clock, DomainResult, IdGenerator, LocalClock,
    UuidIdGenerator,
};
use crate::error::{AppError, AppResult};
use crate::events::{BookCreated, BookDeleted, BookUpdated, EventBus};
use crate::services::book_store::BookStore;
use crate::services::confirmation::Confirmation;

/// pt-BR short date, e.g. 17/10/2026
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";
pub const DEFAULT_DELETE_PROMPT: &str = "Are you sure you want to delete this book?";

/// Re-draws allowed when a generated id collides with an existing one
const MAX_ID_ATTEMPTS: usize = 8;

#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// chrono format for registration dates
    pub date_format: String,

    /// Apply the create-time title/author check to edits as well.
    /// Off by default: edits have never been validated.
    pub validate_on_update: bool,

    /// Text handed to the confirmation collaborator before deleting
    pub delete_prompt: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            validate_on_update: false,
            delete_prompt: DEFAULT_DELETE_PROMPT.to_string(),
        }
    }
}

/// Which way the next submit goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMode {
    /// Draft composes a new book
    Idle,
    /// Draft holds a loaded book; submit replaces `target_id`
    Editing { target_id: String },
}

impl EditMode {
    pub fn target_id(&self) -> Option<&str> {
        match self {
            EditMode::Idle => None,
            EditMode::Editing { target_id } => Some(target_id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditMode::Editing { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created { id: String },
    /// `found` is false when the target had already disappeared
    Updated { id: String, found: bool },
    /// Draft failed validation; nothing changed
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Declined,
    Removed,
    Missing,
}

pub struct EditSession {
    store: BookStore,
    draft: Book,
    mode: EditMode,
    confirmation: Arc<dyn Confirmation>,
    id_generator: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    event_bus: Arc<EventBus>,
    config: SessionConfig,
}

impl EditSession {
    /// Start an idle session with an empty draft over an already loaded store
    pub fn new(
        store: BookStore,
        confirmation: Arc<dyn Confirmation>,
        event_bus: Arc<EventBus>,
        config: SessionConfig,
    ) -> Self {
        let clock = Arc::new(LocalClock::new(config.date_format.clone()));
        Self {
            store,
            draft: Book::empty(),
            mode: EditMode::Idle,
            confirmation,
            id_generator: Arc::new(UuidIdGenerator),
            clock,
            event_bus,
            config,
        }
    }

    pub fn with_id_generator(mut self, id_generator: Arc<dyn IdGenerator>) -> Self {
        self.id_generator = id_generator;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &BookStore {
        &self.store
    }

    pub fn draft(&self) -> &Book {
        &self.draft
    }

    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    /// Load `book` into the draft and target it for the next submit.
    /// Valid from any mode; a pending edit is discarded.
    pub fn begin_edit(&mut self, book: Book) {
        log::debug!("Editing book {}", book.id);
        self.mode = EditMode::Editing {
            target_id: book.id.clone(),
        };
        self.draft = book;
    }

    /// Like [`EditSession::begin_edit`] but looks the book up in the store
    pub fn begin_edit_by_id(&mut self, id: &str) -> AppResult<()> {
        let book = self.store.get(id).cloned().ok_or(AppError::NotFound)?;
        self.begin_edit(book);
        Ok(())
    }

    /// Overwrite one draft field. Never persists, never changes mode.
    pub fn update_draft_field(&mut self, field: BookField, value: &str) -> DomainResult<()> {
        self.draft.set_field(field, value)
    }

    /// Drop the draft and return to Idle
    pub fn cancel_edit(&mut self) {
        self.reset();
    }

    /// Create or replace depending on mode, then reset to an idle empty draft.
    ///
    /// A create with an empty title or author is ignored and leaves the
    /// draft as typed. A storage failure is returned and also leaves the
    /// draft and mode untouched so the user can retry.
    pub fn submit(&mut self) -> AppResult<SubmitOutcome> {
        match self.mode.clone() {
            EditMode::Idle => self.submit_new(),
            EditMode::Editing { target_id } => self.submit_edit(target_id),
        }
    }

    fn submit_new(&mut self) -> AppResult<SubmitOutcome> {
        if let Err(e) = validate_book_submission(&self.draft) {
            log::debug!("Ignoring submission: {}", e);
            return Ok(SubmitOutcome::Ignored);
        }

        let id = self.allocate_id()?;
        let book = self.draft.clone().registered(id.clone(), self.clock.today());
        let titulo = book.titulo.clone();

        self.store.append(book)?;
        self.reset();

        log::info!("Created book {}", id);
        self.event_bus.emit(BookCreated::new(id.clone(), titulo));

        Ok(SubmitOutcome::Created { id })
    }

    fn submit_edit(&mut self, target_id: String) -> AppResult<SubmitOutcome> {
        if self.config.validate_on_update {
            if let Err(e) = validate_book_submission(&self.draft) {
                log::debug!("Ignoring edit of {}: {}", target_id, e);
                return Ok(SubmitOutcome::Ignored);
            }
        }

        let found = self.store.replace(&target_id, self.draft.clone())?;
        self.reset();

        if found {
            log::info!("Updated book {}", target_id);
        } else {
            log::warn!("Edit target {} no longer exists", target_id);
        }
        self.event_bus.emit(BookUpdated::new(target_id.clone(), found));

        Ok(SubmitOutcome::Updated {
            id: target_id,
            found,
        })
    }

    /// Remove a book after the confirmation collaborator agrees.
    ///
    /// Removing the book currently being edited also ends the edit.
    pub fn delete_record(&mut self, id: &str) -> AppResult<DeleteOutcome> {
        if !self.confirmation.confirm(&self.config.delete_prompt) {
            log::debug!("Deletion of {} declined", id);
            return Ok(DeleteOutcome::Declined);
        }

        let removed = self.store.remove(id)?;

        if self.mode.target_id() == Some(id) {
            log::info!("Edit target {} was deleted, returning to idle", id);
            self.reset();
        }

        if removed {
            log::info!("Deleted book {}", id);
            self.event_bus.emit(BookDeleted::new(id.to_string()));
            Ok(DeleteOutcome::Removed)
        } else {
            Ok(DeleteOutcome::Missing)
        }
    }

    fn allocate_id(&self) -> AppResult<String> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.id_generator.next_id();
            if !id.is_empty() && !self.store.contains(&id) {
                return Ok(id);
            }
            log::warn!("Generated book id {:?} is taken, drawing again", id);
        }
        Err(AppError::Other("Could not allocate a unique book id".to_string()))
    }

    fn reset(&mut self) {
        self.mode = EditMode::Idle;
        self.draft = Book::empty();
    }
}
