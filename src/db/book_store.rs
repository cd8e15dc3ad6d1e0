//! Whole-book persistence. A save replaces everything stored; a load
//! rebuilds the book in the order records were added.

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tracing::{debug, error, info, warn};

use crate::db::contact_repo::ContactRow;
use crate::db::{contact_repo, phone_repo, schema};
use crate::error::BookResult;
use crate::model::{AddressBook, BirthdayDate, Record};

/// Open (or create) the book database at `path`, including missing parent
/// directories.
pub fn open(path: &Path) -> BookResult<Connection> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            std::fs::create_dir_all(dir)?;
        }
    }
    let conn = Connection::open(path)?;
    schema::initialize(&conn)?;
    Ok(conn)
}

pub fn save(conn: &mut Connection, book: &AddressBook) -> BookResult<()> {
    let tx = conn.transaction()?;
    contact_repo::delete_all(&tx)?;

    for (position, record) in book.records().enumerate() {
        let row = ContactRow {
            name: record.name().to_string(),
            position: position as i64,
            birthday: record.birthday().map(|b| b.date()),
        };
        contact_repo::insert(&tx, &row)?;
        for (i, phone) in record.phones().iter().enumerate() {
            phone_repo::insert(&tx, record.name(), i as i64, phone.as_str())?;
        }
    }

    tx.commit()?;
    debug!(records = book.len(), "address book saved");
    Ok(())
}

/// Load the stored book. An empty database yields an empty book.
pub fn load(conn: &Connection) -> BookResult<AddressBook> {
    let mut book = AddressBook::new();

    for row in contact_repo::find_all(conn)? {
        let mut record = Record::new(row.name.clone());
        for number in phone_repo::find_by_contact(conn, &row.name)? {
            record.add_phone(&number)?;
        }
        record.set_birthday(row.birthday.map(BirthdayDate::from_date));
        book.add_record(record)?;
    }

    debug!(records = book.len(), "address book loaded");
    Ok(book)
}

/// How the stored book was obtained at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// No file yet; the book starts empty.
    Missing,
    Loaded,
    /// The file could not be read and was moved aside to `backup`.
    Recovered { backup: PathBuf },
    /// The file could not be read nor moved aside. It must not be overwritten.
    Unreadable,
}

impl LoadStatus {
    pub fn can_save(&self) -> bool {
        !matches!(self, LoadStatus::Unreadable)
    }
}

/// `<path>.bak`
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

/// Load the book stored at `path`. Never fails: an unreadable file is moved
/// to `<path>.bak` and an empty book is returned in its place.
pub fn load_or_default(path: &Path) -> (AddressBook, LoadStatus) {
    if !path.exists() {
        info!(path = %path.display(), "no saved address book, starting empty");
        return (AddressBook::new(), LoadStatus::Missing);
    }

    let err = match open(path).and_then(|conn| load(&conn)) {
        Ok(book) => {
            info!(path = %path.display(), records = book.len(), "loaded address book");
            return (book, LoadStatus::Loaded);
        }
        Err(e) => e,
    };

    let backup = backup_path(path);
    match std::fs::rename(path, &backup) {
        Ok(()) => {
            warn!(
                path = %path.display(),
                backup = %backup.display(),
                error = %err,
                "could not load address book, moved it aside and starting empty"
            );
            (AddressBook::new(), LoadStatus::Recovered { backup })
        }
        Err(rename_err) => {
            error!(
                path = %path.display(),
                error = %err,
                rename_error = %rename_err,
                "could not load address book nor back it up, it will not be overwritten"
            );
            (AddressBook::new(), LoadStatus::Unreadable)
        }
    }
}

pub fn save_to(path: &Path, book: &AddressBook) -> BookResult<()> {
    let mut conn = open(path)?;
    save(&mut conn, book)?;
    info!(path = %path.display(), records = book.len(), "saved address book");
    Ok(())
}
