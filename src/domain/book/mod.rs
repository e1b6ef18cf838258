pub mod entity;
pub mod identity;
pub mod invariants;

pub use entity::{Book, BookField};
pub use identity::{Clock, IdGenerator, LocalClock, UuidIdGenerator};
pub use invariants::validate_book_submission;
