// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Boundary between the front end and the services
// - Translates domain entities into DTOs
// - Parses and dispatches user intents

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use commands::{dispatch, Command, CommandOutput};
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use state::AppState;
