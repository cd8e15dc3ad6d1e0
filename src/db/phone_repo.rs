use rusqlite::{params, Connection};

use crate::error::BookResult;

pub fn insert(conn: &Connection, contact_name: &str, position: i64, number: &str) -> BookResult<()> {
    conn.execute(
        "INSERT INTO phones (contact_name, position, number) VALUES (?1, ?2, ?3)",
        params![contact_name, position, number],
    )?;
    Ok(())
}

/// Phone numbers for a contact, in the order they were added.
pub fn find_by_contact(conn: &Connection, contact_name: &str) -> BookResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT number FROM phones WHERE contact_name = ?1 ORDER BY position",
    )?;

    let numbers = stmt
        .query_map(params![contact_name], |row| row.get(0))?
        .collect::<Result<Vec<String>, _>>()?;

    Ok(numbers)
}
