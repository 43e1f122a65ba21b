//! Benchmark data ingestion.
//!
//! The query crates only need a decoded `Vec<Record>`; this crate supplies one,
//! either from the live site or from a payload saved earlier.

pub mod error;
pub mod fetch;
pub mod payload;

pub use error::{IngestError, Result};
pub use fetch::{BenchmarkClient, FetchConfig, fetch_records};
pub use payload::{load_records, parse_payload, save_payload, write_payload};
