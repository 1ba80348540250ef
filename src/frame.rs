//! Tabular query results and their rendering.
//!
//! A `Frame` holds the column names and the dynamically typed values of
//! every row a query returned. It renders either as a text table with a
//! leading row index, or as pretty-printed JSON.

use crate::common::GradebookResult as Result;
use rusqlite::types::Value;
use serde_json::{Map, Value as Json};
use std::fmt;
use std::io::Write;

/// Separator between rendered table columns.
const COLUMN_GAP: &str = "  ";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Frame {
    pub fn new(columns: Vec<String>) -> Frame {
        Frame {
            columns,
            rows: Vec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows as JSON objects keyed by column name, keys sorted.
    pub fn to_json(&self) -> Json {
        let objects = self
            .rows
            .iter()
            .map(|row| {
                let mut obj = Map::new();
                for (name, value) in self.columns.iter().zip(row) {
                    obj.insert(name.clone(), json_value(value));
                }
                Json::Object(obj)
            })
            .collect();
        Json::Array(objects)
    }

    /// Rows as a JSON array with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_json())?)
    }

    /// Write the frame to `out` in the given format, ending with a newline.
    pub fn render<W: Write>(&self, out: &mut W, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Table => writeln!(out, "{}", self)?,
            OutputFormat::Json => writeln!(out, "{}", self.to_json_pretty()?)?,
        }
        Ok(())
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            writeln!(f, "Empty DataFrame")?;
            writeln!(f, "Columns: [{}]", self.columns.join(", "))?;
            return write!(f, "Index: []");
        }

        let index: Vec<String> = (0..self.rows.len()).map(|i| i.to_string()).collect();
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(cell_text).collect())
            .collect();

        let index_width = index.iter().map(|s| s.chars().count()).max().unwrap_or(0);
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, name)| {
                cells
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|s| s.chars().count())
                    .chain(std::iter::once(name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        // Header
        write!(f, "{:w$}", "", w = index_width)?;
        for (name, w) in self.columns.iter().zip(&widths) {
            write!(f, "{}{:>w$}", COLUMN_GAP, name, w = *w)?;
        }

        // Rows
        for (idx, row) in index.iter().zip(&cells) {
            write!(f, "\n{:<w$}", idx, w = index_width)?;
            for (cell, w) in row.iter().zip(&widths) {
                write!(f, "{}{:>w$}", COLUMN_GAP, cell, w = *w)?;
            }
        }
        Ok(())
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Real(r) => format!("{:?}", r),
        Value::Text(s) => s.clone(),
        Value::Blob(b) => format!("b'{}'", hex::encode(b)),
    }
}

fn json_value(value: &Value) -> Json {
    match value {
        Value::Null => Json::Null,
        Value::Integer(i) => Json::from(*i),
        // Non-finite reals have no JSON representation
        Value::Real(r) => serde_json::Number::from_f64(*r)
            .map(Json::Number)
            .unwrap_or(Json::Null),
        Value::Text(s) => Json::String(s.clone()),
        Value::Blob(b) => Json::String(hex::encode(b)),
    }
}
