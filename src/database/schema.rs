/*!
 * Database schema definition.
 *
 * A single append-only `translations` table. There are no migrations and no
 * indexes beyond the primary key.
 */

use anyhow::{Context, Result};
use rusqlite::Connection;
use log::debug;

/// Name of the translation history table
pub const TRANSLATIONS_TABLE: &str = "translations";

/// DDL for the translation history table
pub const CREATE_TRANSLATIONS_TABLE: &str = "CREATE TABLE IF NOT EXISTS translations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    english TEXT,
    translated TEXT,
    language TEXT
);";

/// Ensure the translation history table exists
///
/// Safe to run on every start: an existing table is left untouched.
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(CREATE_TRANSLATIONS_TABLE)
        .context("Failed to create translations table")?;
    debug!("Translation history schema ready");
    Ok(())
}

/// Column names of a table, in declaration order
pub fn table_columns(conn: &Connection, table: &str) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(columns)
}
