use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use bench_model::Record;
use csv::WriterBuilder;

use crate::error::Result;

/// What an export wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub rows: usize,
    pub columns: Vec<String>,
}

/// The projection if given, otherwise every field of the first record.
pub fn resolve_columns(records: &[&Record], columns: Option<&[String]>) -> Vec<String> {
    match columns {
        Some(columns) => columns.to_vec(),
        None => records
            .first()
            .map(|record| record.field_names().map(str::to_string).collect())
            .unwrap_or_default(),
    }
}

/// Writes `records` as CSV to `writer` and returns the number of data rows.
///
/// Nothing at all is written when there are no columns to project.
pub fn write_csv<W: Write>(
    writer: W,
    records: &[&Record],
    columns: &[String],
) -> Result<usize> {
    if columns.is_empty() {
        return Ok(0);
    }
    let mut csv_writer = WriterBuilder::new().from_writer(writer);
    csv_writer.write_record(columns)?;
    for record in records {
        let row = columns.iter().map(|column| {
            record
                .get(column)
                .map(ToString::to_string)
                .unwrap_or_default()
        });
        csv_writer.write_record(row)?;
    }
    csv_writer.flush()?;
    Ok(records.len())
}

/// Writes `records` to a CSV file at `path`, replacing any existing file.
pub fn export_csv(
    path: &Path,
    records: &[&Record],
    columns: Option<&[String]>,
) -> Result<ExportSummary> {
    let columns = resolve_columns(records, columns);
    let file = File::create(path)?;
    let rows = write_csv(file, records, &columns)?;
    tracing::info!(
        path = %path.display(),
        rows,
        columns = columns.len(),
        "export written"
    );
    Ok(ExportSummary {
        path: path.to_path_buf(),
        rows,
        columns,
    })
}
