// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod book_store;
pub mod confirmation;
pub mod edit_session;


pub use book_store::{BookStore, StoreConfig, DEFAULT_STORAGE_KEY};

pub use confirmation::{AlwaysConfirm, Confirmation, NeverConfirm};

pub use edit_session::{
    DeleteOutcome, EditMode, EditSession, SessionConfig, SubmitOutcome, DEFAULT_DATE_FORMAT,
    DEFAULT_DELETE_PROMPT,
};
