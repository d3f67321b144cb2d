//! Loads delimited text into a [`Table`].
//!
//! The first record names the columns; a caller-supplied positional index
//! designates the target column, which is removed from the feature list. A
//! literal `?` field is the conventional missing-value marker and is
//! normalized to the empty string, which then behaves as an ordinary
//! categorical level everywhere downstream.

use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::data::column::Column;
use crate::data::table::Table;

const MISSING_VALUE_MARKER: &str = "?";

/// Reads a CSV file into a table, treating column `target_index` (position
/// in the file, zero-based) as the target.
pub fn read_table(path: impl AsRef<Path>, target_index: usize) -> Result<Table<String>, Box<dyn Error>> {
    let file = File::open(path)?;
    read_table_from_reader(file, target_index)
}

/// Same as [`read_table`], but over any reader. Ragged records and a target
/// index past the last column are errors.
pub fn read_table_from_reader<R: Read>(
    reader: R,
    target_index: usize,
) -> Result<Table<String>, Box<dyn Error>> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let mut columns: Vec<Column<String>> = csv_reader
        .headers()?
        .iter()
        .map(Column::new)
        .collect();

    if target_index >= columns.len() {
        return Err(format!(
            "Target column index {} is out of range for {} columns.",
            target_index,
            columns.len()
        )
        .into());
    }

    for record in csv_reader.records() {
        let record = record?;
        for (column, field) in columns.iter_mut().zip(record.iter()) {
            if field == MISSING_VALUE_MARKER {
                column.push(String::new());
            } else {
                column.push(field.to_string());
            }
        }
    }

    let target = columns.remove(target_index);
    Table::new(columns, target)
}
