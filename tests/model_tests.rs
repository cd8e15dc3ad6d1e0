use contact_book::error::BookError;
use contact_book::model::*;

fn record_with_phones(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name);
    for p in phones {
        record.add_phone(p).unwrap();
    }
    record
}

fn phone_values(record: &Record) -> Vec<&str> {
    record.phones().iter().map(|p| p.as_str()).collect()
}

// ==========================================================================
// PHONE NUMBER TESTS
// ==========================================================================

#[test]
fn phone_accepts_any_ten_digit_string() {
    for s in ["0000000000", "1234567890", "9999999999", "0501234567"] {
        assert_eq!(PhoneNumber::new(s).unwrap().as_str(), s);
    }
}

#[test]
fn phone_rejects_non_digits_and_wrong_length() {
    for s in ["", "123", "12345678901", "123456789a", " 123456789", "123-456-78"] {
        assert!(matches!(PhoneNumber::new(s), Err(BookError::InvalidFormat(_))), "{s}");
    }
}

// ==========================================================================
// BIRTHDAY DATE TESTS
// ==========================================================================

#[test]
fn birthday_format_roundtrips() {
    for s in ["15.08.1990", "01.01.1970", "29.02.1996", "31.12.2023"] {
        assert_eq!(BirthdayDate::parse(s).unwrap().format(), s);
    }
}

#[test]
fn birthday_rejects_invalid_text() {
    for s in ["31.04.2020", "15-08-1990", "15.08", "15.08.1990.01", "ab.cd.efgh"] {
        let err = BirthdayDate::parse(s).unwrap_err();
        assert_eq!(err.to_string(), "Invalid date format. Use DD.MM.YYYY", "{s}");
    }
}

// ==========================================================================
// RECORD TESTS
// ==========================================================================

#[test]
fn record_starts_with_name_only() {
    let record = Record::new("Alice");
    assert_eq!(record.name(), "Alice");
    assert!(record.phones().is_empty());
    assert!(record.birthday().is_none());
}

#[test]
fn record_accepts_blank_name() {
    assert_eq!(Record::new("").name(), "");
}

#[test]
fn add_phone_appends_and_keeps_duplicates() {
    let mut record = Record::new("Alice");
    record.add_phone("1111111111").unwrap();
    record.add_phone("2222222222").unwrap();
    record.add_phone("1111111111").unwrap();
    assert_eq!(phone_values(&record), ["1111111111", "2222222222", "1111111111"]);
}

#[test]
fn add_invalid_phone_leaves_list_unchanged() {
    let mut record = record_with_phones("Alice", &["1111111111"]);
    assert!(record.add_phone("12ab").is_err());
    assert_eq!(phone_values(&record), ["1111111111"]);
}

#[test]
fn remove_phone_removes_every_match() {
    let mut record = record_with_phones("Alice", &["1111111111", "2222222222", "1111111111"]);
    record.remove_phone("1111111111");
    assert_eq!(phone_values(&record), ["2222222222"]);
}

#[test]
fn remove_missing_phone_is_noop() {
    let mut record = record_with_phones("Alice", &["1111111111"]);
    record.remove_phone("3333333333");
    assert_eq!(phone_values(&record), ["1111111111"]);
}

#[test]
fn edit_phone_replaces_existing() {
    let mut record = record_with_phones("Alice", &["0000000000"]);
    record.edit_phone("0000000000", "1111111111").unwrap();
    assert_eq!(phone_values(&record), ["1111111111"]);
}

#[test]
fn edit_phone_with_missing_old_value_appends() {
    let mut record = record_with_phones("Alice", &["0000000000"]);
    record.edit_phone("9999999999", "1111111111").unwrap();
    assert_eq!(phone_values(&record), ["0000000000", "1111111111"]);
}

#[test]
fn edit_phone_rejects_invalid_new_value() {
    let mut record = record_with_phones("Alice", &["0000000000"]);
    let err = record.edit_phone("0000000000", "123").unwrap_err();
    assert_eq!(
        err.to_string(),
        "New phone number is invalid: Phone number must contain 10 digits"
    );
    assert_eq!(phone_values(&record), ["0000000000"]);
}

#[test]
fn find_phone_returns_first_match() {
    let record = record_with_phones("Alice", &["0000000000", "1111111111"]);
    assert_eq!(record.find_phone("1111111111").unwrap().as_str(), "1111111111");
    assert!(record.find_phone("2222222222").is_none());
}

#[test]
fn add_birthday_replaces_previous() {
    let mut record = Record::new("Alice");
    record.add_birthday("15.08.1990").unwrap();
    record.add_birthday("16.09.1991").unwrap();
    assert_eq!(record.birthday().unwrap().format(), "16.09.1991");
}

#[test]
fn invalid_birthday_keeps_previous() {
    let mut record = Record::new("Alice");
    record.add_birthday("15.08.1990").unwrap();
    assert!(record.add_birthday("1990-08-15").is_err());
    assert_eq!(record.birthday().unwrap().format(), "15.08.1990");
}

#[test]
fn record_display_without_birthday() {
    let record = record_with_phones("Alice", &["0000000000", "1111111111"]);
    assert_eq!(
        record.to_string(),
        "Contact name: Alice, phones: 0000000000; 1111111111"
    );
}

#[test]
fn record_display_with_birthday() {
    let mut record = record_with_phones("Bob", &["0000000000"]);
    record.add_birthday("02.01.1985").unwrap();
    assert_eq!(
        record.to_string(),
        "Contact name: Bob, phones: 0000000000, birthday: 02.01.1985"
    );
}

// ==========================================================================
// ADDRESS BOOK TESTS
// ==========================================================================

#[test]
fn add_and_find_record() {
    let mut book = AddressBook::new();
    book.add_record(Record::new("Alice")).unwrap();
    assert_eq!(book.find("Alice").unwrap().name(), "Alice");
    assert!(book.find("alice").is_none());
    assert_eq!(book.len(), 1);
}

#[test]
fn duplicate_name_is_rejected_and_first_kept() {
    let mut book = AddressBook::new();
    book.add_record(record_with_phones("Alice", &["1111111111"])).unwrap();

    let err = book.add_record(record_with_phones("Alice", &["2222222222"])).unwrap_err();
    assert!(matches!(err, BookError::DuplicateKey { ref name } if name == "Alice"));

    let kept = book.find("Alice").unwrap();
    assert_eq!(phone_values(kept), ["1111111111"]);
    assert_eq!(book.len(), 1);
}

#[test]
fn delete_removes_record() {
    let mut book = AddressBook::new();
    book.add_record(Record::new("Alice")).unwrap();
    let removed = book.delete("Alice").unwrap();
    assert_eq!(removed.name(), "Alice");
    assert!(book.find("Alice").is_none());
    assert!(book.is_empty());
}

#[test]
fn delete_missing_record_fails() {
    let mut book = AddressBook::new();
    let err = book.delete("Carol").unwrap_err();
    assert!(matches!(err, BookError::NotFound { ref name } if name == "Carol"));
}

#[test]
fn find_mut_allows_editing_in_place() {
    let mut book = AddressBook::new();
    book.add_record(Record::new("Alice")).unwrap();
    book.find_mut("Alice").unwrap().add_phone("1234567890").unwrap();
    assert_eq!(phone_values(book.find("Alice").unwrap()), ["1234567890"]);
}

#[test]
fn book_display_lists_records_in_insertion_order() {
    let mut book = AddressBook::new();
    book.add_record(record_with_phones("Zed", &["1111111111"])).unwrap();
    book.add_record(record_with_phones("Amy", &["2222222222"])).unwrap();
    assert_eq!(
        book.to_string(),
        "Contact name: Zed, phones: 1111111111\nContact name: Amy, phones: 2222222222"
    );
}

#[test]
fn empty_book_displays_as_empty_string() {
    assert_eq!(AddressBook::new().to_string(), "");
}
