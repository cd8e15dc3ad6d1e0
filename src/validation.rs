use chrono::NaiveDate;

use crate::error::{BookError, BookResult};

pub const PHONE_DIGITS: usize = 10;
pub const DATE_FORMAT: &str = "%d.%m.%Y";
pub const DATE_FORMAT_ERROR: &str = "Invalid date format. Use DD.MM.YYYY";

/// Validates that a phone number is exactly ten ASCII digits.
/// Returns the input unchanged on success.
pub fn ten_digit_phone(value: &str) -> BookResult<String> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BookError::InvalidFormat(
            "Phone number must contain only numbers".into(),
        ));
    }
    if value.len() != PHONE_DIGITS {
        return Err(BookError::InvalidFormat(format!(
            "Phone number must contain {} digits",
            PHONE_DIGITS
        )));
    }
    Ok(value.to_string())
}

/// Parses a `DD.MM.YYYY` date. Zero padding is mandatory, so the
/// accepted text always renders back to itself.
pub fn day_month_year(value: &str) -> BookResult<NaiveDate> {
    let invalid = || BookError::InvalidFormat(DATE_FORMAT_ERROR.into());

    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'.' || bytes[5] != b'.' {
        return Err(invalid());
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 2 && *i != 5)
        .all(|(_, b)| b.is_ascii_digit());
    if !digits_ok {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}
