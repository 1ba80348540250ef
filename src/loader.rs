//! Loading a grades CSV file into the `classes` table.

use crate::class_record::ClassRecord;
use crate::common::GradebookResult as Result;
use crate::csv_source;
use crate::database::{self, classes};
use crate::frame::{Frame, OutputFormat};
use log::{debug, info};
use rusqlite::Connection;
use std::io::Write;
use std::path::Path;

/// Load the CSV file at `path` into a new `classes` table and return the
/// table's full content.
///
/// The file is opened before the table is created, so a missing file leaves
/// the database untouched. Any later failure is returned as is; the table
/// may then exist without rows.
///
pub fn load<P: AsRef<Path>>(conn: &mut Connection, path: P) -> Result<Frame> {
    let path = path.as_ref();
    let file = csv_source::open(path)?;
    classes::create_table(conn)?;
    let records: Vec<ClassRecord> = csv_source::records_from_reader(file)?
        .into_iter()
        .map(ClassRecord::from)
        .collect();
    let n = classes::insert_all(conn, &records)?;
    debug!("Inserted {} rows into {}", n, classes::TABLE);

    let frame = database::query_frame(conn, "SELECT * FROM classes")?;
    info!("Loaded {} classes from {}", frame.len(), path.display());
    Ok(frame)
}

/// Load the CSV file at `path` into a new `classes` table and print the
/// table's content to `out`.
pub fn load_sql<P, W>(conn: &mut Connection, path: P, out: &mut W, format: OutputFormat) -> Result<()>
where
    P: AsRef<Path>,
    W: Write,
{
    let frame = load(conn, path)?;
    frame.render(out, format)
}
