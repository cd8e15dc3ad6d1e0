use serde::{Deserialize, Serialize};
use std::fmt;

use super::birthday::BirthdayDate;
use super::phone::PhoneNumber;
use crate::error::{BookError, BookResult};

/// One contact: a fixed name, any number of phones and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
    #[serde(default)]
    birthday: Option<BirthdayDate>,
}

impl Record {
    /// The name is stored as given; blank names are not rejected.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<BirthdayDate> {
        self.birthday
    }

    pub fn add_phone(&mut self, raw: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Removes every phone equal to `value`. Missing values are ignored.
    pub fn remove_phone(&mut self, value: &str) {
        self.phones.retain(|p| p.as_str() != value);
    }

    /// Replaces all occurrences of `old` with `new`. When `old` is not
    /// present the new phone is simply appended.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let validated = PhoneNumber::new(new).map_err(|e| {
            BookError::InvalidFormat(format!("New phone number is invalid: {}", e))
        })?;
        self.remove_phone(old);
        self.phones.push(validated);
        Ok(())
    }

    pub fn find_phone(&self, value: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Sets the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, raw: &str) -> BookResult<()> {
        self.birthday = Some(BirthdayDate::parse(raw)?);
        Ok(())
    }

    pub(crate) fn set_birthday(&mut self, birthday: Option<BirthdayDate>) {
        self.birthday = birthday;
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(|p| p.as_str()).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))?;
        if let Some(bd) = &self.birthday {
            write!(f, ", birthday: {}", bd)?;
        }
        Ok(())
    }
}
