//! Runtime configuration: where the book lives and how chatty the logs are.
//!
//! Command-line flags win over environment variables, which win over the
//! defaults.

use std::env;
use std::path::PathBuf;

use crate::error::{BookError, BookResult};

pub const DEFAULT_BOOK_PATH: &str = ".data/addressbook.db";
pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const BOOK_FILE_VAR: &str = "CONTACT_BOOK_FILE";
pub const LOG_LEVEL_VAR: &str = "CONTACT_BOOK_LOG";

/// What the binary should do once configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Export(PathBuf),
    Import(PathBuf),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub book_path: PathBuf,
    pub log_level: String,
    pub mode: Mode,
}

impl Config {
    /// Build the configuration from process arguments (without the program
    /// name) and the environment.
    pub fn load<I>(args: I) -> BookResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        Self::from_sources(args, |var| env::var(var).ok())
    }

    /// Same as `load`, with the environment lookup supplied by the caller.
    pub fn from_sources<I, F>(args: I, lookup: F) -> BookResult<Self>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config {
            book_path: lookup(BOOK_FILE_VAR)
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_BOOK_PATH)),
            log_level: lookup(LOG_LEVEL_VAR)
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            mode: Mode::Interactive,
        };

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--file" | "-f" => {
                    config.book_path = PathBuf::from(required_value(&arg, args.next())?);
                }
                "--log-level" => {
                    config.log_level = required_value(&arg, args.next())?;
                }
                "--export" => {
                    config.mode = Mode::Export(PathBuf::from(required_value(&arg, args.next())?));
                }
                "--import" => {
                    config.mode = Mode::Import(PathBuf::from(required_value(&arg, args.next())?));
                }
                "--help" | "-h" => config.mode = Mode::Help,
                other => {
                    return Err(BookError::Config {
                        var: other.to_string(),
                        reason: "unknown argument, use --help for usage".into(),
                    })
                }
            }
        }

        Ok(config)
    }
}

fn required_value(flag: &str, value: Option<String>) -> BookResult<String> {
    value.ok_or_else(|| BookError::Config {
        var: flag.to_string(),
        reason: "requires a value".into(),
    })
}

pub fn usage() -> &'static str {
    "Contact Book - names, phones and birthdays

Usage: contact-book [OPTIONS]

Options:
  -f, --file <PATH>      Book file path (default: .data/addressbook.db, env CONTACT_BOOK_FILE)
  --log-level <LEVEL>    Log filter when RUST_LOG is unset (default: warn, env CONTACT_BOOK_LOG)
  --export <JSON_PATH>   Write the stored book to a JSON file and exit
  --import <JSON_PATH>   Replace the stored book with a JSON file and exit
  -h, --help             Show this help"
}
