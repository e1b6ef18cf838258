// Identity and registration stamps for newly created books.
//
// Both are traits so tests can pin ids and dates.

use chrono::Local;
use uuid::Uuid;

/// Allocates identifiers for new books
pub trait IdGenerator {
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs. Two books created within the same clock tick still
/// get distinct ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Source of the registration date written on creation
pub trait Clock {
    fn today(&self) -> String;
}

/// Local calendar date rendered with a chrono format string
#[derive(Debug, Clone)]
pub struct LocalClock {
    format: String,
}

impl LocalClock {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }
}

impl Clock for LocalClock {
    fn today(&self) -> String {
        Local::now().format(&self.format).to_string()
    }
}
