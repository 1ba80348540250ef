//! The database module provides the interface for interacting
//! with the database for the rest of the program.
//!
//! All conversion to and from rust types are handled by this module.

use crate::common::GradebookResult as Result;
use crate::frame::Frame;
use rusqlite::types::Value;
use rusqlite::Connection;

pub mod classes;

/// Run a query and collect every row it returns into a frame.
///
/// Values keep the type SQLite stored them with.
///
pub fn query_frame(conn: &Connection, sql: &str) -> Result<Frame> {
    let mut stmt = conn.prepare(sql)?;
    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    if columns.is_empty() {
        return_error!("statement returns no columns: {}", sql);
    }

    let mut frame = Frame::new(columns);
    let width = frame.columns.len();
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let mut values = Vec::with_capacity(width);
        for i in 0..width {
            values.push(Value::from(row.get_ref(i)?));
        }
        frame.rows.push(values);
    }
    Ok(frame)
}
