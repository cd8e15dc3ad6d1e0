use chrono::NaiveDate;
use tracing::debug;

use crate::error::{BookError, BookResult};
use crate::model::{AddressBook, Record, UpcomingBirthday};

pub const ADD_USAGE: &str = "add <name> <phone>";
pub const CHANGE_USAGE: &str = "change <name> <old phone> <new phone>";
pub const PHONE_USAGE: &str = "phone <name>";
pub const ADD_BIRTHDAY_USAGE: &str = "add-birthday <name> <DD.MM.YYYY>";
pub const SHOW_BIRTHDAY_USAGE: &str = "show-birthday <name>";
pub const DELETE_USAGE: &str = "delete <name>";
pub const REMOVE_PHONE_USAGE: &str = "remove-phone <name> <phone>";

const UNKNOWN_CONTACT: &str = "Contact does not exist, you can add it.";

/// Creates the contact if needed, then appends the phone. A new contact is
/// kept even when the phone turns out to be invalid.
pub fn add_contact(book: &mut AddressBook, args: &[&str]) -> BookResult<String> {
    let (name, phone) = match args {
        [name, phone, ..] => (*name, *phone),
        _ => return Err(arity(ADD_USAGE)),
    };

    let message = if book.find(name).is_none() {
        book.add_record(Record::new(name))?;
        debug!(name, "contact created");
        "Contact added."
    } else {
        "Contact updated."
    };

    let record = book.find_mut(name).ok_or_else(|| not_found(name))?;
    record.add_phone(phone)?;
    Ok(message.into())
}

pub fn change_contact(book: &mut AddressBook, args: &[&str]) -> BookResult<String> {
    let (name, old_phone, new_phone) = match args {
        [name, old, new] => (*name, *old, *new),
        _ => return Err(arity(CHANGE_USAGE)),
    };

    match book.find_mut(name) {
        Some(record) => {
            record.edit_phone(old_phone, new_phone)?;
            Ok("Phone changed.".into())
        }
        None => Ok(UNKNOWN_CONTACT.into()),
    }
}

pub fn show_phone(book: &AddressBook, args: &[&str]) -> BookResult<String> {
    let name = args.first().ok_or_else(|| arity(PHONE_USAGE))?;
    Ok(book
        .find(name)
        .map(|r| r.to_string())
        .unwrap_or_else(|| UNKNOWN_CONTACT.into()))
}

pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        "No contacts saved.".into()
    } else {
        book.to_string()
    }
}

pub fn add_birthday(book: &mut AddressBook, args: &[&str]) -> BookResult<String> {
    let (name, date) = match args {
        [name, date] => (*name, *date),
        _ => return Err(arity(ADD_BIRTHDAY_USAGE)),
    };

    match book.find_mut(name) {
        Some(record) => {
            record.add_birthday(date)?;
            Ok("Birthday added for this name.".into())
        }
        None => Ok("Contact with this name not found.".into()),
    }
}

pub fn show_birthday(book: &AddressBook, args: &[&str]) -> BookResult<String> {
    let name = args.first().ok_or_else(|| arity(SHOW_BIRTHDAY_USAGE))?;
    let reply = match book.find(name) {
        Some(record) => match record.birthday() {
            Some(bd) => bd.format(),
            None => "Birthday not added to this contact.".into(),
        },
        None => "Contact does not exist, you can add it".into(),
    };
    Ok(reply)
}

pub fn birthdays(book: &AddressBook, as_of: NaiveDate) -> String {
    format_upcoming(&book.upcoming_birthdays(as_of))
}

pub fn birthdays_today(book: &AddressBook) -> String {
    format_upcoming(&book.get_upcoming_birthdays())
}

fn format_upcoming(upcoming: &[UpcomingBirthday]) -> String {
    if upcoming.is_empty() {
        return "No upcoming birthdays.".into();
    }
    upcoming
        .iter()
        .map(|u| u.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn delete_contact(book: &mut AddressBook, args: &[&str]) -> BookResult<String> {
    let name = args.first().ok_or_else(|| arity(DELETE_USAGE))?;
    book.delete(name)?;
    Ok("Contact deleted.".into())
}

pub fn remove_phone(book: &mut AddressBook, args: &[&str]) -> BookResult<String> {
    let (name, phone) = match args {
        [name, phone] => (*name, *phone),
        _ => return Err(arity(REMOVE_PHONE_USAGE)),
    };

    match book.find_mut(name) {
        Some(record) => {
            record.remove_phone(phone);
            Ok("Phone removed.".into())
        }
        None => Ok(UNKNOWN_CONTACT.into()),
    }
}

fn arity(usage: &str) -> BookError {
    BookError::ArityMismatch {
        usage: usage.into(),
    }
}

fn not_found(name: &str) -> BookError {
    BookError::NotFound {
        name: name.into(),
    }
}
