pub mod context;

use chrono::NaiveDate;
use std::path::Path;
use tracing::{debug, error, info};

use crate::error::BookError;
use crate::model::AddressBook;
use crate::ops::contact_ops;
use context::CLIContext;

/// Result of executing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reply(String),
    Exit,
    Nothing,
}

/// Run the interactive loop against the book stored at `book_path`.
pub fn run(book_path: &Path) {
    let mut ctx = CLIContext::load(book_path);
    println!("Welcome to the assistant bot!");

    loop {
        // EOF is treated like `exit`.
        let input = ctx.read_line("Enter a command: ").unwrap_or_else(|| "exit".into());

        match execute(&mut ctx.book, &input, None) {
            Outcome::Reply(text) => println!("{}", text),
            Outcome::Nothing => {}
            Outcome::Exit => {
                if let Err(e) = ctx.save() {
                    error!(error = %e, "failed to save address book");
                    println!("{}", describe_error(&e));
                }
                println!("Good bye!");
                break;
            }
        }
    }
    info!("session finished");
}

/// Execute one command line against the book. `as_of` is the date the
/// upcoming-birthday window starts from; None means today.
pub fn execute(book: &mut AddressBook, input: &str, as_of: Option<NaiveDate>) -> Outcome {
    let (command, args) = match parse_input(input) {
        Some(parsed) => parsed,
        None => return Outcome::Nothing,
    };
    debug!(command = %command, args = args.len(), "executing command");

    let result = match command.as_str() {
        "close" | "exit" => return Outcome::Exit,
        "hello" => Ok("How can I help you?".to_string()),
        "help" => Ok(help_text().to_string()),
        "add" => contact_ops::add_contact(book, &args),
        "change" => contact_ops::change_contact(book, &args),
        "phone" => contact_ops::show_phone(book, &args),
        "all" => Ok(contact_ops::show_all(book)),
        "add-birthday" => contact_ops::add_birthday(book, &args),
        "show-birthday" => contact_ops::show_birthday(book, &args),
        "birthdays" => Ok(match as_of {
            Some(date) => contact_ops::birthdays(book, date),
            None => contact_ops::birthdays_today(book),
        }),
        "delete" => contact_ops::delete_contact(book, &args),
        "remove-phone" => contact_ops::remove_phone(book, &args),
        _ => Ok("Invalid command.".to_string()),
    };

    match result {
        Ok(text) => Outcome::Reply(text),
        Err(e) => {
            debug!(error = %e, "command failed");
            Outcome::Reply(describe_error(&e))
        }
    }
}

/// Split a line on whitespace. The command word is lower-cased; blank
/// input yields None.
pub fn parse_input(input: &str) -> Option<(String, Vec<&str>)> {
    let mut tokens = input.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    Some((command, tokens.collect()))
}

/// The user-facing message for a failed command.
pub fn describe_error(e: &BookError) -> String {
    match e {
        BookError::InvalidFormat(msg) => msg.clone(),
        BookError::DuplicateKey { .. } => e.to_string(),
        BookError::NotFound { .. } => "Contact not found".into(),
        BookError::ArityMismatch { .. } => e.to_string(),
        BookError::UnreadableBook { .. }
        | BookError::Config { .. }
        | BookError::Database(_)
        | BookError::Io(_)
        | BookError::Json(_) => format!("Error: {}", e),
    }
}

pub fn help_text() -> &'static str {
    r#"COMMANDS:
    hello                               Greeting
    add <name> <phone>                  Add a contact or a phone to it
    change <name> <old> <new>           Replace a phone number
    phone <name>                        Show a contact's phones
    remove-phone <name> <phone>         Remove a phone number
    delete <name>                       Delete a contact
    all                                 List all contacts
    add-birthday <name> <DD.MM.YYYY>    Set a birthday
    show-birthday <name>                Show a birthday
    birthdays                           Birthdays in the next 7 days
    help                                Show this help
    close / exit                        Save and quit"#
}
