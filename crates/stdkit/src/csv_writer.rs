//! Writing serializable rows as CSV.
//!
//! Each row is converted to JSON first; its object keys become columns. The
//! header comes from the first row, later rows are written in header order
//! with missing keys left empty.

use std::io::Write;

use serde::Serialize;
use serde_json::Value;

use crate::error::CsvError;

/// CSV writer for rows of serializable records.
///
/// ```
/// use serde::Serialize;
/// use stdkit::CsvWriter;
///
/// #[derive(Serialize)]
/// struct Host {
///     name: &'static str,
///     up: bool,
/// }
///
/// let rows = [Host { name: "web-1", up: true }, Host { name: "db, primary", up: false }];
/// let csv = CsvWriter::new().write(&rows).unwrap();
///
/// assert_eq!(csv, "name,up\nweb-1,true\n\"db, primary\",false\n");
/// ```
#[derive(Debug, Clone)]
pub struct CsvWriter {
    delimiter: u8,
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field delimiter (default `,`).
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Writes `rows` to a string.
    ///
    /// No rows produce an empty string, without a header.
    pub fn write<T, I>(&self, rows: I) -> Result<String, CsvError>
    where
        I: IntoIterator<Item = T>,
        T: Serialize,
    {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer, rows)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Writes `rows` to `writer`.
    pub fn write_to<W, T, I>(&self, writer: W, rows: I) -> Result<(), CsvError>
    where
        W: Write,
        I: IntoIterator<Item = T>,
        T: Serialize,
    {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(writer);
        let mut headers: Option<Vec<String>> = None;

        for (index, row) in rows.into_iter().enumerate() {
            let Value::Object(record) = serde_json::to_value(row)? else {
                return Err(CsvError::NotARecord { index });
            };

            let columns = headers.get_or_insert_with(|| record.keys().cloned().collect());
            if index == 0 {
                wtr.write_record(columns.iter())?;
            }

            let fields: Vec<String> = columns
                .iter()
                .map(|column| record.get(column).map(field_to_string).unwrap_or_default())
                .collect();
            wtr.write_record(&fields)?;
        }

        wtr.flush()?;
        Ok(())
    }
}

/// Converts a JSON value to a CSV field.
fn field_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
