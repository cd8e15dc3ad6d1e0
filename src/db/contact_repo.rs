use chrono::NaiveDate;
use rusqlite::{params, Connection};

use crate::error::{BookError, BookResult};

/// A `contacts` row: name, insertion position and optional birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRow {
    pub name: String,
    pub position: i64,
    pub birthday: Option<NaiveDate>,
}

pub fn insert(conn: &Connection, row: &ContactRow) -> BookResult<()> {
    conn.execute(
        "INSERT INTO contacts (name, position, birthday) VALUES (?1, ?2, ?3)",
        params![row.name, row.position, row.birthday.map(|d| d.to_string())],
    )?;
    Ok(())
}

/// Removes every contact along with its phones.
pub fn delete_all(conn: &Connection) -> BookResult<()> {
    conn.execute_batch("DELETE FROM phones; DELETE FROM contacts;")?;
    Ok(())
}

pub fn find_all(conn: &Connection) -> BookResult<Vec<ContactRow>> {
    let mut stmt =
        conn.prepare("SELECT name, position, birthday FROM contacts ORDER BY position")?;

    let rows = stmt
        .query_map([], |row| Ok(row_to_contact(row)))?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(rows)
}

pub fn count(conn: &Connection) -> BookResult<usize> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;
    Ok(n as usize)
}

fn row_to_contact(row: &rusqlite::Row) -> BookResult<ContactRow> {
    let birthday_str: Option<String> = row.get(2).map_err(rusqlite::Error::from)?;
    let birthday = match birthday_str {
        Some(s) => Some(NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|e| {
            BookError::InvalidFormat(format!("Stored birthday '{}' is invalid: {}", s, e))
        })?),
        None => None,
    };

    Ok(ContactRow {
        name: row.get(0).map_err(rusqlite::Error::from)?,
        position: row.get(1).map_err(rusqlite::Error::from)?,
        birthday,
    })
}
