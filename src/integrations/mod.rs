// src/integrations/mod.rs
//
// External Integrations Module
//
// Collaborators that talk to the outside world on behalf of the services.

pub mod terminal;

pub use terminal::TerminalConfirmation;
