use csv::{Reader, StringRecord};
use log::{debug, info};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::record::{Record, BRAND, RATING};
use crate::report::ReportRow;
use crate::table::Table;

/// Reads product records from a list of CSV files, in the order given.
pub struct CsvReader {
    paths: Vec<PathBuf>,
}

impl CsvReader {
    pub(crate) fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    pub(crate) fn read(&self) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        for path in &self.paths {
            let before = records.len();
            read_file(path, &mut records)?;
            debug!(
                "read {} records from {}",
                records.len() - before,
                path.display()
            );
        }
        info!(
            "loaded {} records from {} files",
            records.len(),
            self.paths.len()
        );
        Ok(records)
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::NotFound {
            path: path.to_path_buf(),
            source: e,
        },
        _ => Error::Io(e),
    })
}

// The reader owns the file handle, so it is closed when this returns.
fn read_file(path: &Path, records: &mut Vec<Record>) -> Result<()> {
    let mut rdr = Reader::from_reader(open(path)?);
    let headers = rdr.headers()?.clone();
    for result in rdr.records() {
        let row = result?;
        let mut fields: HashMap<String, String> = row.deserialize(Some(&headers))?;
        let brand = take(path, &mut fields, BRAND)?;
        let rating = parse_rating(path, &row, &take(path, &mut fields, RATING)?)?;
        records.push(Record::new(brand, rating).with_fields(fields));
    }
    Ok(())
}

fn take(path: &Path, fields: &mut HashMap<String, String>, field: &'static str) -> Result<String> {
    fields.remove(field).ok_or_else(|| Error::MissingField {
        path: path.to_path_buf(),
        field,
    })
}

fn parse_rating(path: &Path, row: &StringRecord, value: &str) -> Result<f64> {
    value.trim().parse::<f64>().map_err(|_| Error::Conversion {
        path: path.to_path_buf(),
        line: row.position().map_or(0, |p| p.line()),
        value: value.to_owned(),
    })
}

/// Writes a finished report, or `empty_message` when there is nothing to show.
pub struct ReportWriter<W> {
    inner: W,
    empty_message: String,
}

impl ReportWriter<Stdout> {
    pub(crate) fn stdout(empty_message: impl Into<String>) -> Self {
        Self::new(io::stdout(), empty_message)
    }
}

impl<W: Write> ReportWriter<W> {
    pub(crate) fn new(inner: W, empty_message: impl Into<String>) -> Self {
        Self {
            inner,
            empty_message: empty_message.into(),
        }
    }

    pub(crate) fn write(&mut self, rows: &[ReportRow]) -> Result<()> {
        if rows.is_empty() {
            writeln!(self.inner, "{}", self.empty_message)?;
        } else {
            writeln!(self.inner, "{}", Table::new(rows))?;
        }
        self.inner.flush()?;
        Ok(())
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.inner
    }
}
