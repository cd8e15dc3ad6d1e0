use rusqlite::Connection;

use crate::error::BookResult;

/// Initialize the database schema. Creates all tables if they don't exist.
pub fn initialize(conn: &Connection) -> BookResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS contacts (
            name TEXT PRIMARY KEY NOT NULL,
            position INTEGER NOT NULL,
            birthday TEXT
        );

        CREATE TABLE IF NOT EXISTS phones (
            contact_name TEXT NOT NULL REFERENCES contacts(name) ON DELETE CASCADE,
            position INTEGER NOT NULL,
            number TEXT NOT NULL,
            PRIMARY KEY (contact_name, position)
        );

        PRAGMA foreign_keys = ON;
        ",
    )?;
    Ok(())
}

/// Create an in-memory connection with the schema applied. Used by tests
/// and anywhere a throwaway book store is needed.
pub fn test_connection() -> BookResult<Connection> {
    let conn = Connection::open_in_memory()?;
    initialize(&conn)?;
    Ok(conn)
}
