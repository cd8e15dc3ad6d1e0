use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::db::book_store::{self, LoadStatus};
use crate::error::{BookError, BookResult};
use crate::model::AddressBook;

/// The in-process book, where it is persisted and how it was loaded.
pub struct CLIContext {
    pub book: AddressBook,
    pub book_path: PathBuf,
    pub load_status: LoadStatus,
}

impl CLIContext {
    pub fn new(book: AddressBook, book_path: PathBuf, load_status: LoadStatus) -> Self {
        Self {
            book,
            book_path,
            load_status,
        }
    }

    /// Load the book stored at `book_path`, or start empty.
    pub fn load(book_path: &Path) -> Self {
        let (book, status) = book_store::load_or_default(book_path);
        if let LoadStatus::Recovered { backup } = &status {
            println!(
                "Saved contacts could not be read; the file was moved to {}.",
                backup.display()
            );
        }
        Self::new(book, book_path.to_path_buf(), status)
    }

    /// Persist the book. Refused when the stored file could not be loaded
    /// or moved aside.
    pub fn save(&self) -> BookResult<()> {
        if !self.load_status.can_save() {
            return Err(BookError::UnreadableBook {
                path: self.book_path.display().to_string(),
            });
        }
        book_store::save_to(&self.book_path, &self.book)
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }
}
