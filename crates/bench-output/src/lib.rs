//! Export of query results.
//!
//! Records are written as CSV: a header row, then one row per record. The
//! column list defaults to the first record's fields; a record without a
//! projected column gets an empty cell.

pub mod csv_export;
pub mod error;

pub use csv_export::{ExportSummary, export_csv, resolve_columns, write_csv};
pub use error::{ExportError, Result};
