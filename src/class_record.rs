use getset::Getters;
use rusqlite::Row;
use serde::{de, Deserialize, Deserializer};
use std::convert::TryFrom;
use std::fmt;

/// CsvClassRecord is one row of the grades CSV file, keyed by header name.
///
/// Columns other than the four below are ignored. The course is kept
/// verbatim; grades may be padded with whitespace.
///
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize)]
pub struct CsvClassRecord {
    pub course: String,
    #[serde(deserialize_with = "padded_int")]
    pub midterm_1: i64,
    #[serde(deserialize_with = "padded_int")]
    pub midterm_2: i64,
    #[serde(deserialize_with = "padded_int")]
    pub midterm_3: i64,
}

fn padded_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.trim()
        .parse()
        .map_err(|e| de::Error::custom(format!("invalid grade {:?}: {}", s, e)))
}

/// ClassRecord is one row of the `classes` table.
///
#[derive(Debug, Clone, Eq, PartialEq, Hash, Getters)]
#[getset(get = "pub")]
pub struct ClassRecord {
    class: String,
    grade_1: i64,
    grade_2: i64,
    grade_3: i64,
}

impl ClassRecord {
    #[allow(dead_code)]
    pub fn new<T: Into<String>>(class: T, grade_1: i64, grade_2: i64, grade_3: i64) -> ClassRecord {
        ClassRecord {
            class: class.into(),
            grade_1,
            grade_2,
            grade_3,
        }
    }

}

impl From<CsvClassRecord> for ClassRecord {
    fn from(rec: CsvClassRecord) -> ClassRecord {
        ClassRecord {
            class: rec.course,
            grade_1: rec.midterm_1,
            grade_2: rec.midterm_2,
            grade_3: rec.midterm_3,
        }
    }
}

impl TryFrom<&Row<'_>> for ClassRecord {
    type Error = rusqlite::Error;

    fn try_from(row: &Row<'_>) -> Result<ClassRecord, Self::Error> {
        Ok(ClassRecord {
            class: row.get("class")?,
            grade_1: row.get("grade_1")?,
            grade_2: row.get("grade_2")?,
            grade_3: row.get("grade_3")?,
        })
    }
}

impl fmt::Display for ClassRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Class {} {}/{}/{}>",
            self.class, self.grade_1, self.grade_2, self.grade_3
        )
    }
}
