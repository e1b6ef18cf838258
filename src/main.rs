// src/main.rs
//
// Terminal front end: one command per line against the shared form.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;

use bookhub::application::{dispatch, AppState, Command, CommandOutput, FormDto};
use bookhub::application::commands::HELP;
use bookhub::application::dto::{BookDto, BookRowDto};
use bookhub::db::{
    create_connection_pool_at, get_connection, get_database_path, initialize_database,
    verify_database_integrity,
};
use bookhub::events::{BookCreated, BookDeleted, BookUpdated};
use bookhub::integrations::TerminalConfirmation;
use bookhub::repositories::{KeyValueRepository, SqliteKeyValueRepository};
use bookhub::services::{SessionConfig, StoreConfig};

fn main() -> anyhow::Result<()> {
    // 1. INFRASTRUCTURE
    let db_path = match std::env::args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => get_database_path().context("resolving database path")?,
    };
    let pool = Arc::new(create_connection_pool_at(&db_path).context("opening database")?);
    {
        let conn = get_connection(&pool)?;
        initialize_database(&conn).context("initializing schema")?;
        verify_database_integrity(&conn).context("checking database integrity")?;
    }

    // 2. REPOSITORIES
    let repo: Arc<dyn KeyValueRepository> = Arc::new(SqliteKeyValueRepository::new(pool));

    // 3. APPLICATION STATE
    let mut state = AppState::bootstrap(
        repo,
        Arc::new(TerminalConfirmation),
        StoreConfig::default(),
        SessionConfig::default(),
    );

    // 4. EVENT HANDLER REGISTRATION
    state.event_bus.subscribe::<BookCreated, _>(|event| {
        println!("+ {}", event.titulo);
    });
    state.event_bus.subscribe::<BookUpdated, _>(|event| {
        if event.found {
            println!("~ {}", event.book_id);
        }
    });
    state.event_bus.subscribe::<BookDeleted, _>(|event| {
        println!("- {}", event.book_id);
    });

    println!("BookHub ({})", db_path.display());
    println!("Type `help` for commands.");

    // 5. COMMAND LOOP
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let result = line
            .parse::<Command>()
            .and_then(|command| dispatch(&mut state.session, command));

        match result {
            Ok(CommandOutput::Quit) => break,
            Ok(output) => render(&output),
            Err(error) => println!("error: {}", error),
        }
    }

    Ok(())
}

fn render(output: &CommandOutput) {
    match output {
        CommandOutput::Rows(rows) => render_rows(rows),
        CommandOutput::Book(book) => render_book(book),
        CommandOutput::Form(form) => render_form(form),
        CommandOutput::Message(message) => println!("{}", message),
        CommandOutput::Help => println!("{}", HELP),
        CommandOutput::Quit => {}
    }
}

fn render_rows(rows: &[BookRowDto]) {
    if rows.is_empty() {
        println!("(no books)");
        return;
    }
    println!("{:<38} {:<30} {:<24} {:>6}", "ID", "Title", "Author", "Year");
    for row in rows {
        println!(
            "{:<38} {:<30} {:<24} {:>6}",
            row.id, row.titulo, row.autor, row.ano_publicacao
        );
    }
}

fn render_book(book: &BookDto) {
    println!("{}", book.titulo);
    println!("  id:          {}", book.id);
    println!("  author:      {}", book.autor);
    println!("  year:        {}", book.ano_publicacao);
    println!("  registered:  {}", book.data_cadastro);
    println!("  genre:       {}", book.genero);
    println!("  description: {}", book.descricao);
}

fn render_form(form: &FormDto) {
    println!("== {} ==", form.heading);
    for field in &form.fields {
        println!("  {:<18} [{}] {}", field.label, field.name, field.value);
    }
    println!("  (submit: {})", form.submit_label);
}
