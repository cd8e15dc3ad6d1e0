use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use super::birthday::BirthdayDate;
use super::record::Record;
use crate::error::{BookError, BookResult};
use crate::queries::birthday_queries;

/// A contact whose birthday falls in the upcoming window, with the date
/// on which to congratulate them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub date: BirthdayDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.date)
    }
}

/// Records keyed by name. Iteration follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&mut self, record: Record) -> BookResult<()> {
        if self.find(record.name()).is_some() {
            return Err(BookError::DuplicateKey {
                name: record.name().to_string(),
            });
        }
        self.records.push(record);
        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name() == name)
    }

    /// Removes and returns the record stored under `name`.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let pos = self
            .records
            .iter()
            .position(|r| r.name() == name)
            .ok_or_else(|| BookError::NotFound {
                name: name.to_string(),
            })?;
        Ok(self.records.remove(pos))
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn upcoming_birthdays(&self, as_of: NaiveDate) -> Vec<UpcomingBirthday> {
        birthday_queries::upcoming_birthdays(self, as_of)
    }

    /// Upcoming birthdays relative to the local calendar date.
    pub fn get_upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays(birthday_queries::today())
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.records.iter().map(|r| r.to_string()).collect();
        write!(f, "{}", lines.join("\n"))
    }
}
