// events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// COLLECTION EVENTS
// ============================================================================

/// Emitted once the store has hydrated from its persisted slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionLoaded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub book_count: usize,
    /// True when the slot was unreadable and the store fell back to empty
    pub recovered: bool,
}

impl CollectionLoaded {
    pub fn new(book_count: usize, recovered: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            book_count,
            recovered,
        }
    }
}

impl DomainEvent for CollectionLoaded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CollectionLoaded" }
}

// ============================================================================
// BOOK EVENTS
// ============================================================================

/// Emitted when a draft has been appended as a new book
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookCreated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub book_id: String,
    pub titulo: String,
}

impl BookCreated {
    pub fn new(book_id: String, titulo: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            book_id,
            titulo,
        }
    }
}

impl DomainEvent for BookCreated {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "BookCreated" }
}

/// Emitted when an edit has been submitted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub book_id: String,
    /// False when the target no longer existed and nothing was replaced
    pub found: bool,
}

impl BookUpdated {
    pub fn new(book_id: String, found: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            book_id,
            found,
        }
    }
}

impl DomainEvent for BookUpdated {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "BookUpdated" }
}

/// Emitted after a confirmed deletion removed a book
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub book_id: String,
}

impl BookDeleted {
    pub fn new(book_id: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            book_id,
        }
    }
}

impl DomainEvent for BookDeleted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "BookDeleted" }
}
