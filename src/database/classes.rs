//! Interface for the `classes` table.

use crate::class_record::ClassRecord;
use crate::common::GradebookResult as Result;
use log::{debug, info};
use rusqlite::{params, Connection};
use std::convert::TryFrom;

pub const TABLE: &str = "classes";

/// Create the `classes` table.
///
/// Fails if the table already exists.
///
pub fn create_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(include_str!("tables.sql"))?;
    debug!("Created table {}", TABLE);
    Ok(())
}

/// Check if the `classes` table exists.
#[allow(dead_code)]
pub fn exists(conn: &Connection) -> Result<bool> {
    let found = conn
        .prepare("SELECT name FROM sqlite_master WHERE type IS 'table' AND name IS ?")?
        .exists(params![TABLE])?;
    Ok(found)
}

/// Insert all records in a single transaction and commit it.
///
/// Returns the number of inserted rows. Nothing is inserted if any
/// insert fails.
///
pub fn insert_all(conn: &mut Connection, records: &[ClassRecord]) -> Result<usize> {
    let tx = conn.transaction()?;
    let mut n = 0;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO classes (class, grade_1, grade_2, grade_3) VALUES (?, ?, ?, ?)",
        )?;
        for rec in records {
            debug!("Inserting {}", rec);
            n += stmt.execute(params![
                rec.class(),
                rec.grade_1(),
                rec.grade_2(),
                rec.grade_3(),
            ])?;
        }
    }
    tx.commit()?;
    info!("Committed {} rows to {}", n, TABLE);
    Ok(n)
}

/// Fetch every row of the table, in storage order.
#[allow(dead_code)]
pub fn fetch_all(conn: &Connection) -> Result<Vec<ClassRecord>> {
    let mut stmt = conn.prepare("SELECT class, grade_1, grade_2, grade_3 FROM classes")?;
    let mut records = Vec::new();
    for res in stmt.query_map([], |row| ClassRecord::try_from(row))? {
        records.push(res?);
    }
    Ok(records)
}

pub fn count(conn: &Connection) -> Result<usize> {
    let mut stmt = conn.prepare("SELECT count(*) FROM classes")?;
    let count = stmt.query_row([], |row| row.get(0))?;
    Ok(count)
}

/*******************************************************************************
 *                                                                             *
 * Tests
 *                                                                             *
 *******************************************************************************/
