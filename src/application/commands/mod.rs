// src/application/commands/mod.rs
//
// Text Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between a line-oriented UI and the session
// - Commands return DTOs
// - Commands NEVER contain business logic

pub mod book_commands;

pub use book_commands::*;

use std::str::FromStr;

use crate::application::dto::{BookDto, BookRowDto, FormDto};
use crate::application::error_handling::ErrorResponse;
use crate::domain::BookField;
use crate::services::EditSession;

/// One user intent, as typed on a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Show,
    Get(String),
    New,
    Edit(String),
    Set(BookField, String),
    Submit,
    Cancel,
    Delete(String),
    Help,
    Quit,
}

/// What the UI should draw after a command
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    Rows(Vec<BookRowDto>),
    Book(BookDto),
    Form(FormDto),
    Message(String),
    Help,
    Quit,
}

pub const HELP: &str = "\
list                 show all books
get <id>             show one book in full
show                 show the form
new                  clear the form to add a book
edit <id>            load a book into the form
set <field> <value>  type into a field (titulo, autor, anoPublicacao, genero, descricao)
submit               add or update from the form
cancel               discard the form
delete <id>          delete a book (asks first)
help                 this text
quit                 exit";

impl FromStr for Command {
    type Err = ErrorResponse;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let required = |what: &str| -> Result<String, ErrorResponse> {
            if rest.is_empty() {
                Err(ErrorResponse::validation(format!("Usage: {} <{}>", verb, what)))
            } else {
                Ok(rest.to_string())
            }
        };

        match verb {
            "list" | "ls" => Ok(Command::List),
            "show" => Ok(Command::Show),
            "get" => Ok(Command::Get(required("id")?)),
            "new" => Ok(Command::New),
            "edit" => Ok(Command::Edit(required("id")?)),
            "set" => {
                let args = required("field")?;
                let (name, value) = match args.split_once(char::is_whitespace) {
                    Some((name, value)) => (name, value.trim()),
                    None => (args.as_str(), ""),
                };
                let field = name
                    .parse::<BookField>()
                    .map_err(ErrorResponse::from_domain_error)?;
                Ok(Command::Set(field, value.to_string()))
            }
            "submit" | "save" => Ok(Command::Submit),
            "cancel" => Ok(Command::Cancel),
            "delete" | "rm" => Ok(Command::Delete(required("id")?)),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "" => Err(ErrorResponse::validation("Empty command".to_string())),
            other => Err(ErrorResponse::validation(format!(
                "Unknown command: {} (try help)",
                other
            ))),
        }
    }
}

/// Route a command to its handler
pub fn dispatch(
    session: &mut EditSession,
    command: Command,
) -> Result<CommandOutput, ErrorResponse> {
    let output = match command {
        Command::List => CommandOutput::Rows(list_books(session)),
        Command::Show => CommandOutput::Form(show_form(session)),
        Command::Get(id) => CommandOutput::Book(get_book(session, &id)?),
        Command::New | Command::Cancel => CommandOutput::Form(new_book(session)),
        Command::Edit(id) => CommandOutput::Form(edit_book(session, &id)?),
        Command::Set(field, value) => CommandOutput::Form(set_field(session, field, &value)?),
        Command::Submit => CommandOutput::Message(submit_form(session)?),
        Command::Delete(id) => CommandOutput::Message(delete_book(session, &id)?),
        Command::Help => CommandOutput::Help,
        Command::Quit => CommandOutput::Quit,
    };
    Ok(output)
}
