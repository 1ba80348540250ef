//! Reading class records from a grades CSV file.
//!

use crate::class_record::CsvClassRecord;
use crate::common::GradebookResult as Result;
use csv::ReaderBuilder;
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Open a grades CSV file for reading.
///
/// Fails with an I/O error if the file doesn't exist or can't be read.
///
pub fn open<P: AsRef<Path>>(path: P) -> Result<File> {
    let path = path.as_ref();
    let file = File::open(path)?;
    debug!("Opened {}", path.display());
    Ok(file)
}

/// Read every record of a grades CSV file, in file order.
///
/// The file is closed before this returns.
///
#[allow(dead_code)]
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<CsvClassRecord>> {
    records_from_reader(open(path)?)
}

/// Read every record from CSV text with a header row.
///
/// Headers and text fields are taken verbatim.
///
pub fn records_from_reader<R: Read>(rdr: R) -> Result<Vec<CsvClassRecord>> {
    let mut reader = ReaderBuilder::new().from_reader(rdr);
    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: CsvClassRecord = result?;
        records.push(record);
    }
    debug!("Read {} CSV records", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::GradebookError;
    use anyhow::Result;
    use std::io::Write;

    const GRADES: &str = "course,midterm_1,midterm_2,midterm_3\n\
                          Algebra,90,85,88\n\
                          Biology,75,80,82\n";

    #[test]
    fn reads_rows_in_file_order() -> Result<()> {
        let records = records_from_reader(GRADES.as_bytes())?;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].course, "Algebra");
        assert_eq!(
            (records[0].midterm_1, records[0].midterm_2, records[0].midterm_3),
            (90, 85, 88)
        );
        assert_eq!(records[1].course, "Biology");
        assert_eq!(
            (records[1].midterm_1, records[1].midterm_2, records[1].midterm_3),
            (75, 80, 82)
        );
        Ok(())
    }

    #[test]
    fn columns_are_matched_by_header_name() -> Result<()> {
        let text = "midterm_3,notes,course,midterm_2,midterm_1\n\
                    88,hard,Algebra,85,90\n";
        let records = records_from_reader(text.as_bytes())?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].course, "Algebra");
        assert_eq!(records[0].midterm_1, 90);
        assert_eq!(records[0].midterm_3, 88);
        Ok(())
    }

    #[test]
    fn text_fields_keep_their_whitespace() -> Result<()> {
        let text = "course,midterm_1,midterm_2,midterm_3\n  Algebra II , 90,85 ,88\n";
        let records = records_from_reader(text.as_bytes())?;
        assert_eq!(records[0].course, "  Algebra II ");
        assert_eq!(
            (records[0].midterm_1, records[0].midterm_2, records[0].midterm_3),
            (90, 85, 88)
        );
        Ok(())
    }

    #[test]
    fn padded_header_is_a_missing_column() {
        let text = " course ,midterm_1,midterm_2,midterm_3\nAlgebra,90,85,88\n";
        let res = records_from_reader(text.as_bytes());
        assert!(matches!(res, Err(GradebookError::Csv(_))));
    }

    #[test]
    fn header_only_gives_no_records() -> Result<()> {
        let records = records_from_reader("course,midterm_1,midterm_2,midterm_3\n".as_bytes())?;
        assert!(records.is_empty());
        Ok(())
    }

    #[test]
    fn missing_column_is_an_error() {
        let text = "course,midterm_1,midterm_2\nAlgebra,90,85\n";
        let res = records_from_reader(text.as_bytes());
        assert!(matches!(res, Err(GradebookError::Csv(_))));
    }

    #[test]
    fn malformed_grade_is_an_error() {
        let text = "course,midterm_1,midterm_2,midterm_3\nAlgebra,ninety,85,88\n";
        let res = records_from_reader(text.as_bytes());
        assert!(matches!(res, Err(GradebookError::Csv(_))));
    }

    #[test]
    fn reads_from_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(GRADES.as_bytes())?;
        let records = read_records(file.path())?;
        assert_eq!(records.len(), 2);
        Ok(())
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let res = read_records(dir.path().join("nope.csv"));
        assert!(matches!(res, Err(GradebookError::Io(_))));
    }
}
