use std::path::Path;

use crate::db::book_store;
use crate::error::BookResult;
use crate::model::{AddressBook, Record};

/// Serializes a book as a JSON array of records in insertion order.
pub fn export_json(book: &AddressBook) -> BookResult<String> {
    Ok(serde_json::to_string_pretty(book)?)
}

/// Builds a book from JSON produced by `export_json`. Phones and dates are
/// validated and duplicate names are rejected.
pub fn import_json(json: &str) -> BookResult<AddressBook> {
    let records: Vec<Record> = serde_json::from_str(json)?;
    let mut book = AddressBook::new();
    for record in records {
        book.add_record(record)?;
    }
    Ok(book)
}

/// Writes the book stored at `db_path` to `json_path`.
/// Returns the number of records exported.
pub fn export_file(db_path: &Path, json_path: &Path) -> BookResult<usize> {
    let conn = book_store::open(db_path)?;
    let book = book_store::load(&conn)?;
    std::fs::write(json_path, export_json(&book)?)?;
    Ok(book.len())
}

/// Replaces the book stored at `db_path` with the contents of `json_path`.
/// Returns the number of records imported.
pub fn import_file(json_path: &Path, db_path: &Path) -> BookResult<usize> {
    let json = std::fs::read_to_string(json_path)?;
    let book = import_json(&json)?;
    book_store::save_to(db_path, &book)?;
    Ok(book.len())
}
