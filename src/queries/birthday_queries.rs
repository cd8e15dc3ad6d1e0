use chrono::{Datelike, Days, Local, NaiveDate, Weekday};

use crate::model::{AddressBook, BirthdayDate, UpcomingBirthday};

/// Days after `as_of` still counted as upcoming. The window is inclusive
/// at both ends.
pub const WINDOW_DAYS: u64 = 7;

/// The local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The birthday moved into `year`. A 29 February birthday falls on
/// 28 February in common years.
pub fn anniversary_in_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28).filter(|_| birthday.month() == 2))
}

/// Saturday and Sunday move to the following Monday.
pub fn shift_off_weekend(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => date.checked_add_days(Days::new(2)),
        Weekday::Sun => date.checked_add_days(Days::new(1)),
        _ => Some(date),
    }
}

/// The date to congratulate on, if the birthday falls within
/// `[as_of, as_of + WINDOW_DAYS]` of the current year.
///
/// Only the current year is considered, so a January birthday is not seen
/// from late December.
pub fn congratulation_date(birthday: NaiveDate, as_of: NaiveDate) -> Option<NaiveDate> {
    let candidate = anniversary_in_year(birthday, as_of.year())?;
    let window_end = as_of.checked_add_days(Days::new(WINDOW_DAYS))?;

    if candidate < as_of || candidate > window_end {
        return None;
    }
    shift_off_weekend(candidate)
}

/// Upcoming birthdays in book order (not sorted by date).
pub fn upcoming_birthdays(book: &AddressBook, as_of: NaiveDate) -> Vec<UpcomingBirthday> {
    book.records()
        .filter_map(|record| {
            let birthday = record.birthday()?;
            let date = congratulation_date(birthday.date(), as_of)?;
            Some(UpcomingBirthday {
                name: record.name().to_string(),
                date: BirthdayDate::from_date(date),
            })
        })
        .collect()
}
